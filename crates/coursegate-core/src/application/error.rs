//! Application layer errors.
//!
//! These errors represent failures in dispatch and localization, not rule
//! violations. Rule definition problems are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::domain::{DomainError, RequestKind};
use crate::error::ErrorCategory;

/// Errors that occur while dispatching or localizing a validation.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No validator was registered for a request kind.
    #[error("No validator registered for '{kind}'")]
    UnregisteredKind { kind: RequestKind },

    /// Two validators were registered for the same kind.
    #[error("Validator for '{kind}' registered more than once")]
    DuplicateRegistration { kind: RequestKind },

    /// A validator failed its definition check at build time.
    #[error("Malformed rule definition for '{kind}': {source}")]
    MalformedDefinition {
        kind: RequestKind,
        #[source]
        source: DomainError,
    },

    /// The payload was JSON `null`.
    #[error("'{kind}' payload is null")]
    NullPayload { kind: RequestKind },

    /// The payload could not be decoded as the request type.
    #[error("'{kind}' payload does not match the request shape: {reason}")]
    MalformedPayload { kind: RequestKind, reason: String },

    /// Typed dispatch found a validator for a different Rust type.
    #[error("Validator registered for '{kind}' does not accept this request type")]
    TypeMismatch { kind: RequestKind },

    /// The message catalog could not be read.
    #[error("Message catalog unavailable: {reason}")]
    CatalogUnavailable { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnregisteredKind { kind } => vec![
                format!("Register a validator for '{kind}' before building the registry"),
                "ValidatorRegistry::standard() registers every kind".into(),
            ],
            Self::NullPayload { .. } => vec!["Send a JSON object, not null".into()],
            Self::MalformedPayload { kind, .. } => vec![
                format!("Check the field names and types of the '{kind}' payload"),
                "Field names are camelCase; dates are RFC 3339 timestamps".into(),
                "Enum fields take a numeric code or a camelCase name".into(),
            ],
            Self::CatalogUnavailable { .. } => vec![
                "The message catalog is locked or corrupted".into(),
                "Try again in a moment".into(),
            ],
            Self::DuplicateRegistration { .. }
            | Self::MalformedDefinition { .. }
            | Self::TypeMismatch { .. } => vec![
                "This is a defect in the validator registration".into(),
                "Please report this issue".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NullPayload { .. } | Self::MalformedPayload { .. } => ErrorCategory::Payload,
            Self::UnregisteredKind { .. }
            | Self::DuplicateRegistration { .. }
            | Self::MalformedDefinition { .. } => ErrorCategory::Configuration,
            Self::TypeMismatch { .. } | Self::CatalogUnavailable { .. } => ErrorCategory::Internal,
        }
    }
}
