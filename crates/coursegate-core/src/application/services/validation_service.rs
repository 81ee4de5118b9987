//! Validation Service - the use case callers drive.
//!
//! Runs a payload through the registry, then turns message keys into text:
//! 1. Dispatch by request kind (and rule set)
//! 2. Resolve each key in the requested locale
//! 3. Fall back to the fallback locale, then to the key itself

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::{
    application::{ports::MessageCatalog, registry::ValidatorRegistry},
    domain::{FieldError, MessageKey, RequestKind, ValidationResult, keys},
    error::CoreResult,
};

/// Locale used when none is configured.
pub const DEFAULT_FALLBACK_LOCALE: &str = "en";

/// A field error with its message text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedError {
    pub field: String,
    pub key: MessageKey,
    pub message: String,
}

/// Outcome of [`ValidationService::check`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "errors", rename_all = "lowercase")]
pub enum ValidationReport {
    Accepted,
    Rejected(Vec<LocalizedError>),
}

impl ValidationReport {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn errors(&self) -> &[LocalizedError] {
        match self {
            Self::Accepted => &[],
            Self::Rejected(errors) => errors,
        }
    }
}

/// Validates payloads and localizes the outcome.
pub struct ValidationService {
    registry: Arc<ValidatorRegistry>,
    catalog: Arc<dyn MessageCatalog>,
    fallback_locale: String,
}

impl ValidationService {
    /// Create a service that falls back to [`DEFAULT_FALLBACK_LOCALE`].
    pub fn new(registry: Arc<ValidatorRegistry>, catalog: Arc<dyn MessageCatalog>) -> Self {
        Self {
            registry,
            catalog,
            fallback_locale: DEFAULT_FALLBACK_LOCALE.into(),
        }
    }

    pub fn with_fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = locale.into();
        self
    }

    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    /// Validate `payload` as a `kind` request and localize any errors.
    #[instrument(skip(self, payload), fields(kind = %kind, locale = %locale))]
    pub fn check(
        &self,
        kind: RequestKind,
        payload: &Value,
        rule_set: Option<&str>,
        locale: &str,
    ) -> CoreResult<ValidationReport> {
        match self.registry.validate_json(kind, payload, rule_set)? {
            ValidationResult::Valid => {
                info!("request accepted");
                Ok(ValidationReport::Accepted)
            }
            ValidationResult::Invalid(errors) => {
                info!(errors = errors.len(), "request rejected");
                Ok(ValidationReport::Rejected(self.localize(&errors, locale)?))
            }
        }
    }

    /// Attach message text to each error, keeping order.
    pub fn localize(&self, errors: &[FieldError], locale: &str) -> CoreResult<Vec<LocalizedError>> {
        errors
            .iter()
            .map(|e| {
                Ok(LocalizedError {
                    field: e.field.clone(),
                    key: e.key,
                    message: self.message(locale, e.key)?,
                })
            })
            .collect()
    }

    /// Text for `key`: requested locale, then fallback locale, then the key.
    pub fn message(&self, locale: &str, key: MessageKey) -> CoreResult<String> {
        if let Some(text) = self.catalog.resolve(locale, key)? {
            return Ok(text);
        }
        if locale != self.fallback_locale {
            if let Some(text) = self.catalog.resolve(&self.fallback_locale, key)? {
                return Ok(text);
            }
        }
        warn!(%key, locale, "no message for key; using the key itself");
        Ok(key.as_str().to_owned())
    }

    /// Keys with no text in `locale`, in declaration order.
    pub fn coverage(&self, locale: &str) -> CoreResult<Vec<MessageKey>> {
        let present = self.catalog.keys(locale)?;
        Ok(keys::ALL
            .iter()
            .copied()
            .filter(|k| !present.iter().any(|p| p == k.as_str()))
            .collect())
    }

    pub fn locales(&self) -> CoreResult<Vec<String>> {
        self.catalog.locales()
    }
}
