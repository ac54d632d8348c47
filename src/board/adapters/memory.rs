//! In-memory document store for tests and embedding.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::Task,
    ports::{DocumentStoreError, DocumentStoreResult, TaskDocumentStore},
};

/// Thread-safe in-memory task document.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryDocumentStore {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document pre-seeded with a task collection.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(tasks)),
        }
    }
}

#[async_trait]
impl TaskDocumentStore for InMemoryDocumentStore {
    async fn load(&self) -> DocumentStoreResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(|err| {
            DocumentStoreError::transport(std::io::Error::other(err.to_string()))
        })?;
        Ok(tasks.clone())
    }

    async fn save(&self, tasks: &[Task]) -> DocumentStoreResult<()> {
        let mut stored = self.tasks.write().map_err(|err| {
            DocumentStoreError::transport(std::io::Error::other(err.to_string()))
        })?;
        *stored = tasks.to_vec();
        Ok(())
    }
}
