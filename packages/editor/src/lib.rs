//! # Softworks Editor
//!
//! Document/history store for the storefront's visual page editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ content: typed Document tree                │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: edits + bounded snapshot history    │
//! │  - Validate and apply structural edits      │
//! │  - One snapshot per accepted edit           │
//! │  - Undo/redo as cursor moves over history   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ workspace: sessions + persistence           │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **Edits are atomic**: an edit either fully applies and pushes one
//!    history entry, or it is rejected and nothing changes.
//! 2. **History holds values**: whole-document snapshots, never references
//!    into live state; undo/redo only move the cursor.
//! 3. **No I/O**: the store is synchronous and single-owner. Persistence
//!    lives in the workspace crate.
//!
//! ## Usage
//!
//! ```rust
//! use softworks_content::{Document, ElementContent, ElementStyle, IdGenerator, SectionKind};
//! use softworks_editor::{Edit, Editor};
//!
//! let mut editor = Editor::new(Document::new(), IdGenerator::new("home"));
//!
//! editor
//!     .apply(Edit::InsertSection {
//!         index: 0,
//!         kind: SectionKind::Hero,
//!         attributes: Default::default(),
//!     })
//!     .unwrap();
//! let section_id = editor.current().sections[0].id.clone();
//!
//! editor
//!     .apply(Edit::InsertElement {
//!         section_id,
//!         index: 0,
//!         content: ElementContent::Text { text: "Hello".into() },
//!         style: ElementStyle::default(),
//!     })
//!     .unwrap();
//!
//! editor.undo();
//! assert!(editor.current().sections[0].elements.is_empty());
//! editor.redo();
//! assert_eq!(editor.current().sections[0].elements.len(), 1);
//! ```

mod editor;
mod edits;
mod history;

pub use editor::{Editor, DEFAULT_HISTORY_CAPACITY};
pub use edits::{Edit, EditError};
pub use history::{History, HistoryEntry};

// Re-export the content model for convenience
pub use softworks_content::Document;
