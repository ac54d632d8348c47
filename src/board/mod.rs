//! Task board core: owned collection state, remote document mirroring,
//! status grouping, and the drag-and-drop transition state machine.
//!
//! The board keeps a single in-memory task collection as the source of truth
//! for a session, seeds it from a remote JSON document on load, and mirrors
//! every mutation back through a whole-document overwrite. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
