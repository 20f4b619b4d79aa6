//! # Softworks Workspace
//!
//! Session and collaborator layer around the page editor.
//!
//! The editor core never performs I/O; everything that crosses a process
//! boundary lives here, behind async traits:
//!
//! - [`ContentRepository`] — load/save serialized page documents
//! - [`AssetHost`] — image uploads, with caller-side format and size
//!   checks before any network call
//! - [`NotificationSender`] — transactional email dispatch with typed
//!   per-kind payloads
//!
//! [`EditSession`] ties one [`softworks_editor::Editor`] to a page id for
//! the lifetime of an editing session: explicit open, explicit save, and
//! a dirty flag in between. A failed save leaves the in-memory document
//! and history untouched; the store is the source of truth until a save
//! succeeds.
//!
//! Memory-backed implementations of each trait are provided for tests and
//! local development.

mod assets;
mod notifications;
mod repository;
mod session;

pub use assets::{
    validate_upload, AssetError, AssetHost, ImageFormat, MemoryAssetHost, UploadedAsset,
    MAX_UPLOAD_BYTES,
};
pub use notifications::{MemorySender, Notification, NotificationError, NotificationSender};
pub use repository::{ContentRepository, FailingRepository, MemoryRepository, RepositoryError};
pub use session::{EditSession, SessionError};
