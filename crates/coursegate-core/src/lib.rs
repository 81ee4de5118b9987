//! Request validation for a learning management system.
//!
//! The `domain` layer declares request types and the rules they obey. It does
//! no I/O. The `application` layer looks up validators by request kind,
//! decodes JSON payloads and turns rule failures into localized messages
//! through the [`MessageCatalog`](application::MessageCatalog) port.
//!
//! ```text
//!   coursegate-cli ──► ValidationService ──► ValidatorRegistry ──► Validator<T>
//!                             │
//!                             ▼
//!                      MessageCatalog ◄── coursegate-adapters
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use coursegate_core::{
//!     application::{MessageCatalog, ValidationService, ValidatorRegistry},
//!     domain::RequestKind,
//! };
//!
//! # fn run(catalog: Arc<dyn MessageCatalog>) -> coursegate_core::error::CoreResult<()> {
//! let registry = Arc::new(ValidatorRegistry::standard()?);
//! let service = ValidationService::new(registry, catalog);
//!
//! let payload = serde_json::json!({ "type": "video", "name": "Intro" });
//! let report = service.check(RequestKind::Lesson, &payload, None, "en")?;
//! for error in report.errors() {
//!     println!("{}: {}", error.field, error.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// The types most callers need.
pub mod prelude {
    pub use crate::application::{
        LocalizedError, ValidationReport, ValidationService, ValidatorRegistry,
        ports::MessageCatalog,
    };
    pub use crate::domain::{
        Choice, Discriminant, FieldError, MessageKey, Request, RequestKind, ValidationResult,
        Validator, keys,
        rules::{Activation, Collection, DomainCheck, Field, Nested, RuleSet},
    };
    pub use crate::error::{CoreError, CoreResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
