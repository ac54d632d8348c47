//! Pure status-grouping view over a task collection.

use super::{Status, Task};

/// Ordered partition of a task collection by status.
///
/// Columns are discovered dynamically from the collection in first-occurrence
/// order; a column exists only for statuses actually present on some task.
/// Within a column, tasks keep collection order. Building the partition is a
/// pure function of the input: identical collections yield identical groups.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusGroups {
    columns: Vec<StatusColumn>,
}

/// One status column and the tasks grouped under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusColumn {
    status: Status,
    tasks: Vec<Task>,
}

impl StatusColumn {
    /// Returns the status this column groups.
    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }

    /// Returns the tasks in this column, in collection order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

impl StatusGroups {
    /// Partitions a task collection by status.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut columns: Vec<StatusColumn> = Vec::new();
        for task in tasks {
            match columns.iter_mut().find(|c| c.status == *task.status()) {
                Some(column) => column.tasks.push(task.clone()),
                None => columns.push(StatusColumn {
                    status: task.status().clone(),
                    tasks: vec![task.clone()],
                }),
            }
        }
        Self { columns }
    }

    /// Returns the columns in first-occurrence order.
    #[must_use]
    pub fn columns(&self) -> &[StatusColumn] {
        &self.columns
    }

    /// Returns the distinct statuses in first-occurrence order.
    pub fn statuses(&self) -> impl Iterator<Item = &Status> {
        self.columns.iter().map(StatusColumn::status)
    }

    /// Looks up the column for a status, if any task carries it.
    #[must_use]
    pub fn column(&self, status: &Status) -> Option<&StatusColumn> {
        self.columns.iter().find(|c| c.status == *status)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` when the collection had no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
