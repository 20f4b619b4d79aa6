//! # Softworks Content Model
//!
//! Typed page content tree for the Softworks storefront editor.
//!
//! A page is a [`Document`]: an ordered list of [`Section`]s, each holding
//! an ordered list of leaf [`Element`]s. Section and element kinds are
//! closed enumerations, and an element's content payload is carried by the
//! variant itself, so an image element can never hold free text.
//!
//! Ids are strings generated per page by [`IdGenerator`]; uniqueness within
//! a document is an invariant the editor crate maintains.

pub mod document;
pub mod ids;

pub use document::{
    Animation, AnimationKind, Document, Easing, Element, ElementContent, ElementKind, ElementStyle,
    ImageRef, Position, Section, SectionAttributes, SectionKind, Size, Spacing, Visibility,
};
pub use ids::{page_seed, IdGenerator};
