//! Shared fixtures and document store doubles for board tests.

use async_trait::async_trait;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use crate::board::{
    domain::Task,
    ports::{DocumentStoreError, DocumentStoreResult, TaskDocumentStore},
};

/// Builds a valid task fixture keyed by title.
pub fn task(title: &str, status: &str) -> Task {
    Task::new(title, format!("{title} description"), status, "alice").expect("valid fixture task")
}

/// Document store double whose requests can be switched to fail.
#[derive(Debug, Default)]
pub struct FlakyDocumentStore {
    tasks: RwLock<Vec<Task>>,
    fail_load: AtomicBool,
    fail_save: AtomicBool,
}

impl FlakyDocumentStore {
    pub fn seeded(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RwLock::new(tasks),
            ..Self::default()
        }
    }

    pub fn set_fail_load(&self, fail: bool) {
        self.fail_load.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_save(&self, fail: bool) {
        self.fail_save.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl TaskDocumentStore for FlakyDocumentStore {
    async fn load(&self) -> DocumentStoreResult<Vec<Task>> {
        if self.fail_load.load(Ordering::SeqCst) {
            return Err(DocumentStoreError::Status(500));
        }
        Ok(self.tasks.read().expect("store lock").clone())
    }

    async fn save(&self, tasks: &[Task]) -> DocumentStoreResult<()> {
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(DocumentStoreError::Status(500));
        }
        *self.tasks.write().expect("store lock") = tasks.to_vec();
        Ok(())
    }
}

/// Document store double counting overwrite writes.
#[derive(Debug, Default)]
pub struct CountingDocumentStore {
    tasks: RwLock<Vec<Task>>,
    saves: AtomicUsize,
}

impl CountingDocumentStore {
    pub fn seeded(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RwLock::new(tasks),
            saves: AtomicUsize::new(0),
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskDocumentStore for CountingDocumentStore {
    async fn load(&self) -> DocumentStoreResult<Vec<Task>> {
        Ok(self.tasks.read().expect("store lock").clone())
    }

    async fn save(&self, tasks: &[Task]) -> DocumentStoreResult<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.tasks.write().expect("store lock") = tasks.to_vec();
        Ok(())
    }
}

/// Document store double whose writes park long enough to overlap another.
#[derive(Debug, Default)]
pub struct SlowSaveDocumentStore {
    delay: Duration,
}

impl SlowSaveDocumentStore {
    pub const fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl TaskDocumentStore for SlowSaveDocumentStore {
    async fn load(&self) -> DocumentStoreResult<Vec<Task>> {
        Ok(Vec::new())
    }

    async fn save(&self, _tasks: &[Task]) -> DocumentStoreResult<()> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
