//! # Structural Edits
//!
//! High-level semantic operations on a page [`Document`].
//!
//! ## Design principles
//!
//! 1. **Intent-preserving**: each edit is one user-level operation
//! 2. **Validated**: every referenced id must exist before anything mutates
//! 3. **Atomic**: an edit either fully applies or leaves the document alone
//!
//! ## Edit semantics
//!
//! ### Move
//! - Reorders within the owning list (sections in the document, elements
//!   in their section)
//! - Out-of-range target indices clamp to the valid range instead of
//!   failing, so a move is always applicable once the id exists
//!
//! ### Duplicate
//! - Deep-copies the subtree and assigns fresh ids to the copy and every
//!   descendant; ids are never reused
//! - The copy lands immediately after the source
//!
//! ### Remove
//! - Removing the last section of a document or the last element of a
//!   section is valid; empty documents and sections are legal states

use serde::{Deserialize, Serialize};
use softworks_content::{
    Document, Element, ElementContent, ElementKind, ElementStyle, IdGenerator, Section,
    SectionAttributes, SectionKind,
};
use thiserror::Error;

/// Structural edit operations (intent-preserving)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Edit {
    /// Insert a new empty section at index (clamped to `[0, len]`)
    InsertSection {
        index: usize,
        kind: SectionKind,
        attributes: SectionAttributes,
    },

    /// Remove a section and all of its elements
    RemoveSection { section_id: String },

    /// Move a section to a new index (clamped to `[0, len-1]`)
    MoveSection { section_id: String, index: usize },

    /// Deep-copy a section; the copy and its elements get fresh ids
    DuplicateSection { section_id: String },

    /// Insert a new element into a section at index (clamped to `[0, len]`)
    InsertElement {
        section_id: String,
        index: usize,
        content: ElementContent,
        style: ElementStyle,
    },

    /// Remove an element from its section
    RemoveElement { element_id: String },

    /// Move an element within its section (clamped to `[0, len-1]`)
    MoveElement { element_id: String, index: usize },

    /// Copy an element in place; the copy gets a fresh id
    DuplicateElement { element_id: String },

    /// Replace a section's attribute record
    UpdateSection {
        section_id: String,
        attributes: SectionAttributes,
    },

    /// Replace an element's content and/or style. New content must keep
    /// the element's kind.
    UpdateElement {
        element_id: String,
        content: Option<ElementContent>,
        style: Option<ElementStyle>,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Content kind mismatch for element {element_id}: expected {expected:?}, got {found:?}")]
    ContentKindMismatch {
        element_id: String,
        expected: ElementKind,
        found: ElementKind,
    },
}

impl Edit {
    /// Apply the edit to a document, drawing fresh ids from `ids` where
    /// the edit creates nodes. Validates first; on error the document is
    /// untouched.
    pub fn apply(&self, doc: &mut Document, ids: &mut IdGenerator) -> Result<(), EditError> {
        self.validate(doc)?;

        match self {
            Edit::InsertSection {
                index,
                kind,
                attributes,
            } => Self::apply_insert_section(doc, ids, *index, *kind, attributes),

            Edit::RemoveSection { section_id } => Self::apply_remove_section(doc, section_id),

            Edit::MoveSection { section_id, index } => {
                Self::apply_move_section(doc, section_id, *index)
            }

            Edit::DuplicateSection { section_id } => {
                Self::apply_duplicate_section(doc, ids, section_id)
            }

            Edit::InsertElement {
                section_id,
                index,
                content,
                style,
            } => Self::apply_insert_element(doc, ids, section_id, *index, content, style),

            Edit::RemoveElement { element_id } => Self::apply_remove_element(doc, element_id),

            Edit::MoveElement { element_id, index } => {
                Self::apply_move_element(doc, element_id, *index)
            }

            Edit::DuplicateElement { element_id } => {
                Self::apply_duplicate_element(doc, ids, element_id)
            }

            Edit::UpdateSection {
                section_id,
                attributes,
            } => Self::apply_update_section(doc, section_id, attributes),

            Edit::UpdateElement {
                element_id,
                content,
                style,
            } => Self::apply_update_element(doc, element_id, content, style),
        }
    }

    /// Validate without applying
    pub fn validate(&self, doc: &Document) -> Result<(), EditError> {
        match self {
            Edit::InsertSection { .. } => Ok(()),

            Edit::RemoveSection { section_id }
            | Edit::MoveSection { section_id, .. }
            | Edit::DuplicateSection { section_id }
            | Edit::UpdateSection { section_id, .. }
            | Edit::InsertElement { section_id, .. } => {
                if doc.contains_section(section_id) {
                    Ok(())
                } else {
                    Err(EditError::SectionNotFound(section_id.clone()))
                }
            }

            Edit::RemoveElement { element_id }
            | Edit::MoveElement { element_id, .. }
            | Edit::DuplicateElement { element_id } => {
                if doc.contains_element(element_id) {
                    Ok(())
                } else {
                    Err(EditError::ElementNotFound(element_id.clone()))
                }
            }

            Edit::UpdateElement {
                element_id,
                content,
                ..
            } => {
                let (_, element) = doc
                    .element(element_id)
                    .ok_or_else(|| EditError::ElementNotFound(element_id.clone()))?;

                if let Some(content) = content {
                    if content.kind() != element.kind() {
                        return Err(EditError::ContentKindMismatch {
                            element_id: element_id.clone(),
                            expected: element.kind(),
                            found: content.kind(),
                        });
                    }
                }

                Ok(())
            }
        }
    }

    fn apply_insert_section(
        doc: &mut Document,
        ids: &mut IdGenerator,
        index: usize,
        kind: SectionKind,
        attributes: &SectionAttributes,
    ) -> Result<(), EditError> {
        let mut section = Section::new(ids.new_id(), kind);
        section.attributes = attributes.clone();

        let insert_index = index.min(doc.sections.len());
        doc.sections.insert(insert_index, section);
        Ok(())
    }

    fn apply_remove_section(doc: &mut Document, section_id: &str) -> Result<(), EditError> {
        let index = doc
            .section_index(section_id)
            .ok_or_else(|| EditError::SectionNotFound(section_id.to_string()))?;
        doc.sections.remove(index);
        Ok(())
    }

    fn apply_move_section(
        doc: &mut Document,
        section_id: &str,
        index: usize,
    ) -> Result<(), EditError> {
        let from = doc
            .section_index(section_id)
            .ok_or_else(|| EditError::SectionNotFound(section_id.to_string()))?;

        let to = index.min(doc.sections.len() - 1);
        let section = doc.sections.remove(from);
        doc.sections.insert(to, section);
        Ok(())
    }

    fn apply_duplicate_section(
        doc: &mut Document,
        ids: &mut IdGenerator,
        section_id: &str,
    ) -> Result<(), EditError> {
        let from = doc
            .section_index(section_id)
            .ok_or_else(|| EditError::SectionNotFound(section_id.to_string()))?;

        let mut copy = doc.sections[from].clone();
        copy.id = ids.new_id();
        for element in &mut copy.elements {
            element.id = ids.new_id();
        }

        doc.sections.insert(from + 1, copy);
        Ok(())
    }

    fn apply_insert_element(
        doc: &mut Document,
        ids: &mut IdGenerator,
        section_id: &str,
        index: usize,
        content: &ElementContent,
        style: &ElementStyle,
    ) -> Result<(), EditError> {
        let section = doc
            .section_mut(section_id)
            .ok_or_else(|| EditError::SectionNotFound(section_id.to_string()))?;

        let mut element = Element::new(ids.new_id(), content.clone());
        element.style = style.clone();

        let insert_index = index.min(section.elements.len());
        section.elements.insert(insert_index, element);
        Ok(())
    }

    fn apply_remove_element(doc: &mut Document, element_id: &str) -> Result<(), EditError> {
        let (si, ei) = doc
            .element_position(element_id)
            .ok_or_else(|| EditError::ElementNotFound(element_id.to_string()))?;
        doc.sections[si].elements.remove(ei);
        Ok(())
    }

    fn apply_move_element(
        doc: &mut Document,
        element_id: &str,
        index: usize,
    ) -> Result<(), EditError> {
        let (si, from) = doc
            .element_position(element_id)
            .ok_or_else(|| EditError::ElementNotFound(element_id.to_string()))?;

        let elements = &mut doc.sections[si].elements;
        let to = index.min(elements.len() - 1);
        let element = elements.remove(from);
        elements.insert(to, element);
        Ok(())
    }

    fn apply_duplicate_element(
        doc: &mut Document,
        ids: &mut IdGenerator,
        element_id: &str,
    ) -> Result<(), EditError> {
        let (si, ei) = doc
            .element_position(element_id)
            .ok_or_else(|| EditError::ElementNotFound(element_id.to_string()))?;

        let mut copy = doc.sections[si].elements[ei].clone();
        copy.id = ids.new_id();
        doc.sections[si].elements.insert(ei + 1, copy);
        Ok(())
    }

    fn apply_update_section(
        doc: &mut Document,
        section_id: &str,
        attributes: &SectionAttributes,
    ) -> Result<(), EditError> {
        let section = doc
            .section_mut(section_id)
            .ok_or_else(|| EditError::SectionNotFound(section_id.to_string()))?;
        section.attributes = attributes.clone();
        Ok(())
    }

    fn apply_update_element(
        doc: &mut Document,
        element_id: &str,
        content: &Option<ElementContent>,
        style: &Option<ElementStyle>,
    ) -> Result<(), EditError> {
        let element = doc
            .element_mut(element_id)
            .ok_or_else(|| EditError::ElementNotFound(element_id.to_string()))?;

        if let Some(content) = content {
            element.content = content.clone();
        }
        if let Some(style) = style {
            element.style = style.clone();
        }
        Ok(())
    }
}
