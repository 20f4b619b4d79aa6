//! # Editor Store
//!
//! Owns the current document and its history. Exactly one editing session
//! drives one `Editor`; all operations are synchronous and never perform
//! I/O. Persistence belongs to the workspace crate.

use crate::{Edit, EditError, History};
use softworks_content::{Document, IdGenerator};

/// Default number of retained history snapshots.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Document/history store for one editing session.
#[derive(Debug)]
pub struct Editor {
    history: History,
    ids: IdGenerator,
}

impl Editor {
    /// Create a store over a loaded or empty document with the default
    /// history capacity.
    pub fn new(document: Document, ids: IdGenerator) -> Self {
        Self::with_capacity(document, ids, DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a store with a custom history capacity.
    pub fn with_capacity(document: Document, ids: IdGenerator, capacity: usize) -> Self {
        Self {
            history: History::new(document, capacity),
            ids,
        }
    }

    /// Current document at the history cursor. Pure read.
    pub fn current(&self) -> &Document {
        self.history.current()
    }

    /// Apply a structural edit.
    ///
    /// On success the new document is pushed onto history (discarding any
    /// redo tail) and returned. On failure nothing changes: no snapshot is
    /// pushed, no id is visible in the document, the cursor stays put.
    pub fn apply(&mut self, edit: Edit) -> Result<&Document, EditError> {
        let mut next = self.history.current().clone();
        edit.apply(&mut next, &mut self.ids)?;
        self.history.push(next);
        Ok(self.history.current())
    }

    /// Step back one history entry. At the earliest retained entry this is
    /// a no-op returning the unchanged current document.
    pub fn undo(&mut self) -> &Document {
        self.history.undo();
        self.history.current()
    }

    /// Step forward one history entry. No-op at the latest entry.
    pub fn redo(&mut self) -> &Document {
        self.history.redo();
        self.history.current()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
