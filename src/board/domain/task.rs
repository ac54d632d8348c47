//! Task record and required-field validation.

use super::{Status, TaskDomainError, TaskField};
use serde::{Deserialize, Serialize};

/// A single board task.
///
/// The title doubles as the unique key within a collection; there is no
/// separate id field. All four fields are required non-empty for a task to
/// enter the store through an intake path. A collection loaded wholesale
/// from the remote document is trusted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    title: String,
    description: String,
    status: Status,
    assignee: String,
}

impl Task {
    /// Creates a validated task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyField`] for the first required field
    /// that is empty after trimming.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<Status>,
        assignee: impl Into<String>,
    ) -> Result<Self, TaskDomainError> {
        let task = Self {
            title: title.into(),
            description: description.into(),
            status: status.into(),
            assignee: assignee.into(),
        };
        task.ensure_valid()?;
        Ok(task)
    }

    /// Checks the required-field invariant on an already-constructed record.
    ///
    /// Used for records arriving through deserialization, where construction
    /// bypasses [`Task::new`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyField`] for the first required field
    /// that is empty after trimming.
    pub fn ensure_valid(&self) -> Result<(), TaskDomainError> {
        require(TaskField::Title, &self.title)?;
        require(TaskField::Description, &self.description)?;
        require(TaskField::Status, self.status.as_str())?;
        require(TaskField::Assignee, &self.assignee)?;
        Ok(())
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }

    /// Returns the task assignee.
    #[must_use]
    pub fn assignee(&self) -> &str {
        &self.assignee
    }

    /// Replaces the task status.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

/// Rejects a required field that is empty after trimming.
fn require(field: TaskField, value: &str) -> Result<(), TaskDomainError> {
    if value.trim().is_empty() {
        return Err(TaskDomainError::EmptyField(field));
    }
    Ok(())
}
