//! Content repository contract and memory-backed implementation.
//!
//! The repository owns the serialized form of a document; callers only
//! ever see [`Document`] values. Failures surface as errors and are never
//! retried here.

use softworks_content::Document;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Page not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Persists page documents keyed by page id.
pub trait ContentRepository {
    fn load(
        &self,
        page_id: &str,
    ) -> impl std::future::Future<Output = Result<Document, RepositoryError>> + Send;

    fn save(
        &self,
        page_id: &str,
        document: &Document,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}

/// In-memory repository storing JSON-serialized documents. Used in tests
/// and local development.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    pages: RwLock<HashMap<String, String>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentRepository for MemoryRepository {
    async fn load(&self, page_id: &str) -> Result<Document, RepositoryError> {
        let pages = self.pages.read().await;
        let json = pages
            .get(page_id)
            .ok_or_else(|| RepositoryError::NotFound(page_id.to_string()))?;
        Ok(serde_json::from_str(json)?)
    }

    async fn save(&self, page_id: &str, document: &Document) -> Result<(), RepositoryError> {
        let json = serde_json::to_string(document)?;
        self.pages.write().await.insert(page_id.to_string(), json);
        Ok(())
    }
}

/// Repository that rejects every save. Test double for backend outages.
#[derive(Debug, Default)]
pub struct FailingRepository;

impl ContentRepository for FailingRepository {
    async fn load(&self, page_id: &str) -> Result<Document, RepositoryError> {
        Err(RepositoryError::Backend(format!(
            "load unavailable for {}",
            page_id
        )))
    }

    async fn save(&self, _page_id: &str, _document: &Document) -> Result<(), RepositoryError> {
        Err(RepositoryError::Backend("save unavailable".to_string()))
    }
}
