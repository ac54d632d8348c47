//! Bulk task intake from a pasted JSON payload.
//!
//! The payload must parse as a JSON array of task-shaped objects, and every
//! element must satisfy the required-field invariant. Acceptance is
//! all-or-nothing: one bad element rejects the whole batch.

use super::{Task, TaskDomainError};
use std::sync::Arc;
use thiserror::Error;

/// Errors rejecting a bulk intake payload.
#[derive(Debug, Clone, Error)]
pub enum BulkIntakeError {
    /// The payload is not valid JSON.
    #[error("payload is not valid JSON: {0}")]
    Parse(Arc<serde_json::Error>),

    /// The payload parsed, but is not an array.
    #[error("payload must be a JSON array of tasks")]
    NotAnArray,

    /// An element is not task-shaped (missing or mistyped field).
    #[error("element {index} is not a valid task: {reason}")]
    InvalidElement {
        /// Position of the offending element in the payload array.
        index: usize,
        /// Description of the shape violation.
        reason: String,
    },

    /// An element has an empty required field.
    #[error("element {index}: {source}")]
    EmptyField {
        /// Position of the offending element in the payload array.
        index: usize,
        /// The underlying field validation failure.
        source: TaskDomainError,
    },
}

/// Parses a bulk intake payload into tasks, in payload order.
///
/// # Errors
///
/// Returns [`BulkIntakeError`] when the payload is not valid JSON, is not an
/// array, or any element fails the task-shape or required-field checks. No
/// partial batch is ever returned.
pub fn parse_tasks(payload: &str) -> Result<Vec<Task>, BulkIntakeError> {
    let value: serde_json::Value =
        serde_json::from_str(payload).map_err(|err| BulkIntakeError::Parse(Arc::new(err)))?;
    let serde_json::Value::Array(elements) = value else {
        return Err(BulkIntakeError::NotAnArray);
    };

    let mut tasks = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        let task: Task = serde_json::from_value(element).map_err(|err| {
            BulkIntakeError::InvalidElement {
                index,
                reason: err.to_string(),
            }
        })?;
        task.ensure_valid()
            .map_err(|source| BulkIntakeError::EmptyField { index, source })?;
        tasks.push(task);
    }
    Ok(tasks)
}
