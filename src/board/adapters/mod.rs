//! Adapter implementations of the document store port.

pub mod http;
pub mod memory;

pub use http::HttpDocumentStore;
pub use memory::InMemoryDocumentStore;
