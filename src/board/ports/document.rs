//! Port for the single remote JSON document holding the task collection.

use crate::board::domain::Task;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for document store operations.
pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;

/// Remote task document contract.
///
/// The document is read and written wholesale; there are no partial updates,
/// no retries, and no request cancellation. One implementation talks to the
/// fixed HTTP resource, another keeps the document in memory for tests and
/// embedding.
#[async_trait]
pub trait TaskDocumentStore: Send + Sync {
    /// Reads the full task collection.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError`] when the request fails or the response
    /// cannot be decoded as a task collection.
    async fn load(&self) -> DocumentStoreResult<Vec<Task>>;

    /// Overwrites the full task collection.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError`] when the request fails or the resource
    /// rejects the write.
    async fn save(&self, tasks: &[Task]) -> DocumentStoreResult<()>;
}

/// Errors returned by document store implementations.
///
/// Callers treat every variant as one generic failure; the distinction exists
/// only for the surfaced message.
#[derive(Debug, Clone, Error)]
pub enum DocumentStoreError {
    /// The request could not be sent or the connection failed.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The resource answered with a non-success status.
    #[error("remote resource answered with status {0}")]
    Status(u16),

    /// The response body could not be decoded as a task collection.
    #[error("response decode error: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl DocumentStoreError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a response decode error.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}
