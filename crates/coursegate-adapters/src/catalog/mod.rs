//! Message catalog adapters.

pub mod loader;
pub mod memory;

pub use loader::{CatalogLoader, LoadSummary, LoaderError};
pub use memory::InMemoryCatalog;
