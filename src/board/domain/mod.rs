//! Domain model for the task board.
//!
//! The board domain models the task record, its open-ended status value,
//! field validation at intake, and the pure status-grouping view, keeping
//! all infrastructure concerns outside of the domain boundary.

mod error;
mod grouping;
mod intake;
mod status;
mod task;

pub use error::{TaskDomainError, TaskField};
pub use grouping::{StatusColumn, StatusGroups};
pub use intake::{BulkIntakeError, parse_tasks};
pub use status::{Status, StatusTone};
pub use task::Task;
