//! # Snapshot History
//!
//! Bounded undo/redo history of whole-document snapshots.
//!
//! ## Design
//!
//! - Every accepted edit pushes one immutable snapshot
//! - A cursor marks the current position; undo/redo only move the cursor
//! - A push truncates everything after the cursor (new edits invalidate
//!   the redo tail)
//! - Once capacity is exceeded the oldest entry is evicted silently and
//!   the cursor shifts so it keeps naming the same logical state

use crate::Document;

/// One immutable snapshot retained for undo/redo.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub document: Document,
}

/// Bounded snapshot sequence with a cursor.
///
/// Invariant: `entries` is never empty and `cursor < entries.len()`.
#[derive(Debug)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    capacity: usize,
}

impl History {
    /// Start a history with the initial document as its only entry.
    /// Capacity is at least 1.
    pub fn new(initial: Document, capacity: usize) -> Self {
        Self {
            entries: vec![HistoryEntry { document: initial }],
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> &Document {
        &self.entries[self.cursor].document
    }

    /// Push a new snapshot: drop the redo tail, append, advance the
    /// cursor, evict the oldest entry if over capacity.
    pub fn push(&mut self, document: Document) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry { document });

        if self.entries.len() > self.capacity {
            self.entries.remove(0);
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Move the cursor back one entry. Returns `false` (and stays put) at
    /// the earliest retained entry. Never touches the redo tail.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor forward one entry. Returns `false` at the latest
    /// entry.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 == self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of retained snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
