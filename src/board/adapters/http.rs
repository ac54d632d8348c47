//! HTTP document store issuing whole-document reads and writes.

use async_trait::async_trait;
use reqwest::Client;

use crate::board::{
    domain::Task,
    ports::{DocumentStoreError, DocumentStoreResult, TaskDocumentStore},
};

/// Document store backed by a fixed HTTP resource.
///
/// `load` issues an unconditional `GET` expecting a JSON `Task[]` body;
/// `save` issues a `POST` carrying the full collection as JSON. Any non-2xx
/// response is a generic failure.
#[derive(Debug, Clone)]
pub struct HttpDocumentStore {
    client: Client,
    url: String,
}

impl HttpDocumentStore {
    /// Creates a store for the given resource URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Returns the resource URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TaskDocumentStore for HttpDocumentStore {
    async fn load(&self) -> DocumentStoreResult<Vec<Task>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(DocumentStoreError::transport)?;
        if !response.status().is_success() {
            return Err(DocumentStoreError::Status(response.status().as_u16()));
        }
        response
            .json::<Vec<Task>>()
            .await
            .map_err(DocumentStoreError::decode)
    }

    async fn save(&self, tasks: &[Task]) -> DocumentStoreResult<()> {
        let response = self
            .client
            .post(&self.url)
            .json(&tasks)
            .send()
            .await
            .map_err(DocumentStoreError::transport)?;
        if !response.status().is_success() {
            return Err(DocumentStoreError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}
