//! Taskboard: data-synchronization and status-transition core for a task
//! board.
//!
//! The crate owns an in-memory task collection mirrored to a single remote
//! JSON document through whole-document reads and writes, derives a
//! status-grouped view over that collection, and drives the drag-and-drop
//! interaction that moves tasks between status columns.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`board`]: task model, status grouping, remote mirroring, and
//!   drag-and-drop transitions

pub mod board;
