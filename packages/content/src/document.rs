//! Page content tree: documents, sections, elements.
//!
//! Section and element order is significant and persisted. Lookup helpers
//! search by id across the whole tree; callers that need the owning section
//! of an element use the `(section index, element index)` locators.

use serde::{Deserialize, Serialize};

/// Root of one editable page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Document {
    pub sections: Vec<Section>,
}

/// Top-level visual block within a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub kind: SectionKind,
    pub attributes: SectionAttributes,
    pub elements: Vec<Element>,
}

/// Closed set of section layouts the storefront can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    Banner,
    Grid,
    Custom,
}

/// Style and configuration attributes shared by every section kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SectionAttributes {
    /// CSS color or image URL painted behind the section.
    pub background: Option<String>,
    pub spacing: Spacing,
    pub visibility: Visibility,
}

/// Vertical padding in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Spacing {
    pub top: u32,
    pub bottom: u32,
}

/// Per-breakpoint visibility toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    pub desktop: bool,
    pub tablet: bool,
    pub mobile: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            desktop: true,
            tablet: true,
            mobile: true,
        }
    }
}

/// Leaf content node within a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub content: ElementContent,
    #[serde(default)]
    pub style: ElementStyle,
}

/// Element payload. The variant carries the content shape, so the
/// "content matches kind" invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementContent {
    Text { text: String },
    Image { asset: ImageRef },
    Button { label: String, link: String },
    Spacer,
}

/// Element kind, derived from the content variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Text,
    Image,
    Button,
    Spacer,
}

/// Hosted image reference. Image elements always point at an uploaded
/// asset, never inline data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: Option<String>,
}

/// Position, size and entrance animation for one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ElementStyle {
    pub position: Option<Position>,
    pub size: Option<Size>,
    pub animation: Option<Animation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// Entrance animation descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    pub kind: AnimationKind,
    pub easing: Easing,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationKind {
    Fade,
    SlideUp,
    SlideDown,
    Zoom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Document {
    /// Empty page with no sections.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn section_mut(&mut self, section_id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == section_id)
    }

    pub fn section_index(&self, section_id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == section_id)
    }

    /// Find an element anywhere in the document, with its owning section.
    pub fn element(&self, element_id: &str) -> Option<(&Section, &Element)> {
        self.sections.iter().find_map(|section| {
            section
                .element(element_id)
                .map(|element| (section, element))
        })
    }

    pub fn element_mut(&mut self, element_id: &str) -> Option<&mut Element> {
        self.sections
            .iter_mut()
            .find_map(|section| section.element_mut(element_id))
    }

    /// Locate an element as `(section index, element index)`.
    pub fn element_position(&self, element_id: &str) -> Option<(usize, usize)> {
        self.sections.iter().enumerate().find_map(|(si, section)| {
            section
                .elements
                .iter()
                .position(|e| e.id == element_id)
                .map(|ei| (si, ei))
        })
    }

    pub fn contains_section(&self, section_id: &str) -> bool {
        self.section(section_id).is_some()
    }

    pub fn contains_element(&self, element_id: &str) -> bool {
        self.element_position(element_id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Section {
    pub fn new(id: String, kind: SectionKind) -> Self {
        Self {
            id,
            kind,
            attributes: SectionAttributes::default(),
            elements: Vec::new(),
        }
    }

    pub fn element(&self, element_id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == element_id)
    }

    pub fn element_mut(&mut self, element_id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == element_id)
    }
}

impl Element {
    pub fn new(id: String, content: ElementContent) -> Self {
        Self {
            id,
            content,
            style: ElementStyle::default(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }
}

impl ElementContent {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementContent::Text { .. } => ElementKind::Text,
            ElementContent::Image { .. } => ElementKind::Image,
            ElementContent::Button { .. } => ElementKind::Button,
            ElementContent::Spacer => ElementKind::Spacer,
        }
    }
}
