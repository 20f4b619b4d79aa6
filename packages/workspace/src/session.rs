//! # Edit Session Management
//!
//! One editing session over one page: explicit open, edits through the
//! store, explicit save. The in-memory document and history are the
//! source of truth until a save succeeds; a failed save changes nothing.

use crate::{ContentRepository, RepositoryError};
use softworks_content::{Document, IdGenerator};
use softworks_editor::{Edit, EditError, Editor};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Edit error: {0}")]
    Edit(#[from] EditError),
}

/// Single-owner editing session for one page.
pub struct EditSession {
    page_id: String,
    editor: Editor,
    dirty: bool,
}

impl EditSession {
    /// Start a session over a brand-new empty page.
    pub fn blank(page_id: impl Into<String>) -> Self {
        let page_id = page_id.into();
        let ids = IdGenerator::new(&page_id);
        Self {
            editor: Editor::new(Document::new(), ids),
            page_id,
            dirty: false,
        }
    }

    /// Start a session over the stored document for `page_id`.
    pub async fn open<R: ContentRepository>(
        repo: &R,
        page_id: impl Into<String>,
    ) -> Result<Self, SessionError> {
        let page_id = page_id.into();
        let document = repo.load(&page_id).await?;
        info!(page_id = %page_id, sections = document.sections.len(), "opened page");

        // The stored document already holds ids minted from this page's
        // seed; the generator must continue past them, not restart at 1
        let ids = IdGenerator::resume(&page_id, &document);
        Ok(Self {
            editor: Editor::new(document, ids),
            page_id,
            dirty: false,
        })
    }

    /// Like [`EditSession::open`], but a missing page starts blank.
    pub async fn open_or_blank<R: ContentRepository>(
        repo: &R,
        page_id: impl Into<String>,
    ) -> Result<Self, SessionError> {
        let page_id = page_id.into();
        match Self::open(repo, page_id.clone()).await {
            Ok(session) => Ok(session),
            Err(SessionError::Repository(RepositoryError::NotFound(_))) => {
                debug!(page_id = %page_id, "page not stored yet, starting blank");
                Ok(Self::blank(page_id))
            }
            Err(err) => Err(err),
        }
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    pub fn document(&self) -> &Document {
        self.editor.current()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Apply a structural edit. Rejected edits leave the session clean
    /// exactly as rejected edits leave the store unchanged.
    pub fn apply(&mut self, edit: Edit) -> Result<&Document, EditError> {
        debug!(page_id = %self.page_id, ?edit, "applying edit");
        self.editor.apply(edit)?;
        self.dirty = true;
        Ok(self.editor.current())
    }

    pub fn undo(&mut self) -> &Document {
        if self.editor.can_undo() {
            self.dirty = true;
        }
        self.editor.undo()
    }

    pub fn redo(&mut self) -> &Document {
        if self.editor.can_redo() {
            self.dirty = true;
        }
        self.editor.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.editor.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.editor.can_redo()
    }

    /// Persist the current document. On failure the session keeps its
    /// state, dirty flag included, and the error is surfaced to the
    /// caller.
    pub async fn save<R: ContentRepository>(&mut self, repo: &R) -> Result<(), SessionError> {
        match repo.save(&self.page_id, self.editor.current()).await {
            Ok(()) => {
                self.dirty = false;
                info!(page_id = %self.page_id, "saved page");
                Ok(())
            }
            Err(err) => {
                warn!(page_id = %self.page_id, error = %err, "save failed");
                Err(err.into())
            }
        }
    }
}
