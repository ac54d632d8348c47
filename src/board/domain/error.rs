//! Error types for board domain validation.

use std::fmt;
use thiserror::Error;

/// Required task fields checked at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    /// The task title, doubling as the collection key.
    Title,
    /// The free-text task description.
    Description,
    /// The status value the task is grouped under.
    Status,
    /// The person the task is assigned to.
    Assignee,
}

impl TaskField {
    /// Returns the field name as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Status => "status",
            Self::Assignee => "assignee",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// A required field is empty after trimming.
    #[error("{0} must not be empty")]
    EmptyField(TaskField),
}
