//! The crate-wide error type.
//!
//! A request failing its rules is *not* an error: that outcome is a
//! [`ValidationResult`](crate::domain::ValidationResult). These types cover
//! bad payloads and broken setup.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

#[derive(Debug, Error, Clone)]
pub enum CoreError {
    /// Rule definitions and rule set lookups.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Registry, payload decoding and catalogs.
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CoreError {
    /// Hints shown to the user under the message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Coursegate".into(),
                "Please report this issue with the payload that triggered it".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Broad class of a [`CoreError`], used by callers to pick an exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A rule set selection or discriminant the caller got wrong.
    Validation,
    /// The payload could not be read as the requested type.
    Payload,
    NotFound,
    /// Registry or catalog setup is broken.
    Configuration,
    Internal,
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Wrap a foreign error as [`CoreError::Internal`] with a message.
pub trait Context<T> {
    fn context(self, msg: impl Into<String>) -> CoreResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> CoreResult<T> {
        self.map_err(|e| CoreError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RequestKind;

    #[test]
    fn categories_follow_source() {
        let err: CoreError = DomainError::UnknownRequestKind("lessons".into()).into();
        assert_eq!(err.category(), ErrorCategory::NotFound);

        let err: CoreError = ApplicationError::NullPayload {
            kind: RequestKind::Lesson,
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Payload);
    }

    #[test]
    fn context_wraps_as_internal() {
        let parsed: Result<u8, _> = "300".parse::<u8>();
        let err = parsed.context("reading port").unwrap_err();
        assert!(matches!(err, CoreError::Internal { ref message } if message.starts_with("reading port")));
    }
}
