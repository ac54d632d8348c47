//! Drag-and-drop status-transition state machine.

use super::{BoardError, BoardService};
use crate::board::domain::{Status, Task};
use crate::board::ports::TaskDocumentStore;
use std::mem;
use std::sync::Arc;
use std::time::Duration;

/// Default synthetic delay between a drop and its commit.
///
/// Gives the busy indicator a perceptible duration; tests shrink it to
/// zero through [`DragController::with_commit_delay`].
pub const DEFAULT_COMMIT_DELAY: Duration = Duration::from_millis(500);

/// Phase of the drag-and-drop interaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No task is selected; initial and terminal phase.
    #[default]
    Idle,
    /// A task is being dragged; its title is retained until commit or
    /// abandonment.
    Dragging {
        /// Title of the dragged task.
        title: String,
    },
    /// The pointer is over a status column while dragging.
    Hovering {
        /// Title of the dragged task.
        title: String,
        /// Column currently hovered.
        column: Status,
    },
    /// A drop is being committed; the column shows a busy indicator.
    Committing {
        /// Title of the dropped task.
        title: String,
        /// Column receiving the task.
        column: Status,
    },
}

/// Mediates the drag-source/drop-target interaction for one board.
///
/// A drop enters the committing phase, waits out the commit delay, applies
/// the status mutation through the board, and returns to idle. A drop with
/// no active drag is a safe no-op.
pub struct DragController<S: TaskDocumentStore> {
    board: Arc<BoardService<S>>,
    commit_delay: Duration,
    phase: DragPhase,
}

impl<S: TaskDocumentStore> DragController<S> {
    /// Creates a controller for the given board with the default commit
    /// delay.
    #[must_use]
    pub fn new(board: Arc<BoardService<S>>) -> Self {
        Self {
            board,
            commit_delay: DEFAULT_COMMIT_DELAY,
            phase: DragPhase::Idle,
        }
    }

    /// Overrides the commit delay. Test seam.
    #[must_use]
    pub const fn with_commit_delay(mut self, delay: Duration) -> Self {
        self.commit_delay = delay;
        self
    }

    /// Returns the current interaction phase.
    #[must_use]
    pub const fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// Returns the column showing a busy indicator, if a commit is underway.
    #[must_use]
    pub const fn committing_column(&self) -> Option<&Status> {
        match &self.phase {
            DragPhase::Committing { column, .. } => Some(column),
            _ => None,
        }
    }

    /// Begins dragging a task.
    pub fn drag_start(&mut self, task: &Task) {
        self.phase = DragPhase::Dragging {
            title: task.title().to_owned(),
        };
    }

    /// Records the pointer entering a status column while dragging.
    pub fn drag_enter(&mut self, column: Status) {
        self.phase = match mem::take(&mut self.phase) {
            DragPhase::Dragging { title } | DragPhase::Hovering { title, .. } => {
                DragPhase::Hovering { title, column }
            }
            other => other,
        };
    }

    /// Records the pointer leaving the hovered column without dropping.
    pub fn drag_leave(&mut self) {
        self.phase = match mem::take(&mut self.phase) {
            DragPhase::Hovering { title, .. } => DragPhase::Dragging { title },
            other => other,
        };
    }

    /// Abandons the current drag.
    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
    }

    /// Drops the dragged task onto a status column.
    ///
    /// With no active drag this is a no-op. Otherwise the controller enters
    /// the committing phase, waits out the commit delay, moves the task
    /// through the board (itself a safe no-op when the task no longer
    /// exists), and returns to idle on every path.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when persisting the moved collection fails;
    /// the interaction still ends idle and can be retried by re-dragging.
    pub async fn drop_on(&mut self, column: Status) -> Result<(), BoardError> {
        let title = match mem::take(&mut self.phase) {
            DragPhase::Dragging { title } | DragPhase::Hovering { title, .. } => title,
            DragPhase::Idle | DragPhase::Committing { .. } => return Ok(()),
        };
        self.phase = DragPhase::Committing {
            title: title.clone(),
            column: column.clone(),
        };
        tokio::time::sleep(self.commit_delay).await;
        let result = self.board.move_task(&title, &column).await;
        self.phase = DragPhase::Idle;
        result
    }
}
