//! Infrastructure adapters for Coursegate.
//!
//! This crate implements the ports defined in `coursegate-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_messages;
pub mod catalog;

// Re-export commonly used adapters
pub use catalog::{CatalogLoader, InMemoryCatalog};
