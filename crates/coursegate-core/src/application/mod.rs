//! Application layer for Coursegate.
//!
//! This layer contains:
//! - **Registry**: request kind to validator dispatch, checked at build time
//! - **Services**: Use case orchestration (ValidationService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod registry;
pub mod services;

pub use registry::{KindInfo, RegistryBuilder, RequestValidator, ValidatorRegistry};
pub use services::{LocalizedError, ValidationReport, ValidationService};

// Re-export port traits (for adapter implementation)
pub use ports::MessageCatalog;

pub use error::ApplicationError;
