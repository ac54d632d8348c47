//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod document;

pub use document::{DocumentStoreError, DocumentStoreResult, TaskDocumentStore};
