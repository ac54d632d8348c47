//! Open-ended status value and its display classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status value of a task.
///
/// The status domain is an open set of strings: any value present on a task
/// becomes a grouping key, and there is no fixed status enum. Equality and
/// hashing are on the raw value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Status(String);

impl Status {
    /// Creates a status from the raw value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw status value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classifies the status for display styling.
    ///
    /// The match is case-insensitive and ignores whitespace, so `"To Do"`
    /// and `"todo"` share a tone. Classification is display-only: grouping
    /// always keys on the raw value, and two distinct raw values never share
    /// a column even when they share a tone.
    #[must_use]
    pub fn tone(&self) -> StatusTone {
        let normalized: String = self
            .0
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "todo" => StatusTone::Todo,
            "inprogress" => StatusTone::InProgress,
            "done" => StatusTone::Done,
            _ => StatusTone::Unknown,
        }
    }
}

impl From<&str> for Status {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display tone for well-known status values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Work has not started.
    Todo,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Done,
    /// Any status value without a dedicated styling.
    Unknown,
}
