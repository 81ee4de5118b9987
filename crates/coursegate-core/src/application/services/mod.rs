//! Application services - orchestrate use cases.
//!
//! Services coordinate the registry and the message catalog port to answer
//! "is this request acceptable, and what should the caller be told".

pub mod validation_service;

pub use validation_service::{
    DEFAULT_FALLBACK_LOCALE, LocalizedError, ValidationReport, ValidationService,
};
