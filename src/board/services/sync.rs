//! Owned board state synchronized against the remote task document.
//!
//! The service keeps one state container as the single source of truth for a
//! session and publishes every change through a watch channel, so observers
//! recompute derived views instead of holding their own copy. Mutations are
//! optimistic: local state changes first, then the full collection is written
//! to the document store. A failed write surfaces an error without rolling
//! the local change back, so local and remote state can observably diverge
//! until the next successful write.

use crate::board::{
    domain::{self, BulkIntakeError, Status, StatusGroups, Task, TaskDomainError},
    ports::{DocumentStoreError, TaskDocumentStore},
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, watch};

/// Failures surfaced by board operations.
#[derive(Debug, Clone, Error)]
pub enum BoardError {
    /// A document read failed; prior local data is left untouched.
    #[error("load failed: {0}")]
    Load(#[source] DocumentStoreError),

    /// A document overwrite failed after the local mutation was applied.
    #[error("save failed: {0}")]
    Save(#[source] DocumentStoreError),

    /// A save was requested while another save is still outstanding.
    #[error("a write is already in flight")]
    WriteInFlight,

    /// Single-task intake validation failed; the store is untouched.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// Bulk intake parsing or shape validation failed; the store is
    /// untouched.
    #[error(transparent)]
    Intake(#[from] BulkIntakeError),
}

/// Snapshot of the board published to subscribers.
///
/// Mirrors the fetch-result lifecycle: created with `loading` set and no
/// tasks, resolving to data or an error on the first load, and cycling
/// `loading` through every subsequent write.
#[derive(Debug, Clone)]
pub struct BoardState {
    tasks: Vec<Task>,
    loading: bool,
    error: Option<BoardError>,
}

impl BoardState {
    fn initial() -> Self {
        Self {
            tasks: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Returns the task collection, in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns `true` while a load or save is in flight.
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// Returns the most recent load or save failure, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&BoardError> {
        self.error.as_ref()
    }
}

/// Request payload for single-task intake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: String,
    status: String,
    assignee: String,
}

impl NewTask {
    /// Creates a request with all four required fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
        assignee: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: status.into(),
            assignee: assignee.into(),
        }
    }
}

/// Board orchestration service.
///
/// Owns the task collection for the session, seeds it from the document
/// store on [`load`](Self::load), and mirrors every mutation back through a
/// whole-document overwrite. Overlapping writes are rejected rather than
/// left to race: a save issued while another is outstanding fails with
/// [`BoardError::WriteInFlight`] before any local mutation is applied.
pub struct BoardService<S: TaskDocumentStore> {
    store: Arc<S>,
    state: watch::Sender<BoardState>,
    write_gate: Mutex<()>,
}

impl<S: TaskDocumentStore> BoardService<S> {
    /// Creates a board backed by the given document store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        let (state, _) = watch::channel(BoardState::initial());
        Self {
            store,
            state,
            write_gate: Mutex::new(()),
        }
    }

    /// Subscribes to board state changes.
    ///
    /// Every load and every successful or failed save publishes a new
    /// snapshot; subscribers recompute derived views on change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<BoardState> {
        self.state.subscribe()
    }

    /// Returns the current board state.
    #[must_use]
    pub fn state(&self) -> BoardState {
        self.state.borrow().clone()
    }

    /// Returns the current task collection, in insertion order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.state.borrow().tasks.clone()
    }

    /// Derives the status-grouped view of the current collection.
    #[must_use]
    pub fn groups(&self) -> StatusGroups {
        StatusGroups::from_tasks(&self.state.borrow().tasks)
    }

    /// Seeds the collection from the document store.
    ///
    /// On success the collection is replaced wholesale. On failure the error
    /// is recorded and prior local data is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Load`] when the read fails.
    pub async fn load(&self) -> Result<(), BoardError> {
        self.state.send_modify(|state| state.loading = true);
        match self.store.load().await {
            Ok(tasks) => {
                self.state.send_modify(|state| {
                    state.tasks = tasks;
                    state.loading = false;
                    state.error = None;
                });
                Ok(())
            }
            Err(err) => {
                let failure = BoardError::Load(err);
                self.state.send_modify(|state| {
                    state.loading = false;
                    state.error = Some(failure.clone());
                });
                Err(failure)
            }
        }
    }

    /// Validates and appends one task, then persists the full collection.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] when any required field is empty
    /// (store untouched), [`BoardError::WriteInFlight`] when a save is
    /// outstanding (store untouched), or [`BoardError::Save`] when the write
    /// fails after the local append.
    pub async fn add_task(&self, request: NewTask) -> Result<Task, BoardError> {
        let task = Task::new(
            request.title,
            request.description,
            request.status,
            request.assignee,
        )?;
        let mut next = self.tasks();
        next.push(task.clone());
        self.commit(next).await?;
        Ok(task)
    }

    /// Parses a bulk payload and appends all tasks in payload order, then
    /// persists the full resulting collection.
    ///
    /// Acceptance is all-or-nothing: any parse, shape, or required-field
    /// failure rejects the whole batch with the store untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Intake`] when the payload is rejected,
    /// [`BoardError::WriteInFlight`] when a save is outstanding, or
    /// [`BoardError::Save`] when the write fails after the local append.
    pub async fn add_bulk(&self, payload: &str) -> Result<usize, BoardError> {
        let parsed = domain::parse_tasks(payload)?;
        let count = parsed.len();
        let mut next = self.tasks();
        next.extend(parsed);
        self.commit(next).await?;
        Ok(count)
    }

    /// Moves every task matching the title to the new status and persists.
    ///
    /// Matching is by title equality. When no task matches, the move is a
    /// safe no-op: nothing is inserted and nothing is written. When the
    /// matched task already carries the target status, the persistence
    /// round-trip is skipped; the final collection is content-equal either
    /// way.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::WriteInFlight`] when a save is outstanding or
    /// [`BoardError::Save`] when the write fails after the local mutation.
    pub async fn move_task(&self, title: &str, new_status: &Status) -> Result<(), BoardError> {
        let tasks = self.tasks();
        let Some(current) = tasks.iter().find(|task| task.title() == title) else {
            return Ok(());
        };
        if current.status() == new_status {
            return Ok(());
        }
        let next = tasks
            .into_iter()
            .map(|mut task| {
                if task.title() == title {
                    task.set_status(new_status.clone());
                }
                task
            })
            .collect();
        self.commit(next).await
    }

    /// Applies a collection locally and overwrites the remote document.
    ///
    /// The local mutation is optimistic: it is published before the write
    /// completes and is not rolled back on failure. Loading is cleared on
    /// every path, including failure.
    async fn commit(&self, next: Vec<Task>) -> Result<(), BoardError> {
        let Ok(_guard) = self.write_gate.try_lock() else {
            return Err(BoardError::WriteInFlight);
        };
        self.state.send_modify(|state| {
            state.tasks = next.clone();
            state.loading = true;
        });
        match self.store.save(&next).await {
            Ok(()) => {
                self.state.send_modify(|state| {
                    state.loading = false;
                    state.error = None;
                });
                Ok(())
            }
            Err(err) => {
                let failure = BoardError::Save(err);
                self.state.send_modify(|state| {
                    state.loading = false;
                    state.error = Some(failure.clone());
                });
                Err(failure)
            }
        }
    }
}
