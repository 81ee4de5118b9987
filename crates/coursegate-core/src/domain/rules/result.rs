//! Validation outcomes.

use std::fmt;

use serde::Serialize;

use crate::domain::keys::MessageKey;

/// One violated rule: where, and which message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FieldError {
    /// Dotted path, e.g. `answers.1.option`. Whole-object checks use `_`.
    pub field: String,
    pub key: MessageKey,
}

impl FieldError {
    pub fn new(field: impl Into<String>, key: MessageKey) -> Self {
        Self {
            field: field.into(),
            key,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.key)
    }
}

/// Either the request passes, or it carries at least one error.
///
/// Errors are kept in rule-evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "errors", rename_all = "lowercase")]
pub enum ValidationResult {
    Valid,
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// `Valid` when `errors` is empty; there is no partial state.
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        match self {
            Self::Valid => Vec::new(),
            Self::Invalid(errors) => errors,
        }
    }

    /// Errors reported for exactly `field`.
    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors().iter().filter(move |e| e.field == field)
    }

    pub fn has_error(&self, field: &str, key: MessageKey) -> bool {
        self.errors().iter().any(|e| e.field == field && e.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keys;

    #[test]
    fn empty_errors_are_valid() {
        assert_eq!(ValidationResult::from_errors(vec![]), ValidationResult::Valid);
    }

    #[test]
    fn errors_keep_order() {
        let result = ValidationResult::from_errors(vec![
            FieldError::new("name", keys::NAME_REQUIRED),
            FieldError::new("type", keys::LESSON_TYPE_REQUIRED),
        ]);
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].field, "name");
        assert_eq!(result.errors()[1].field, "type");
        assert!(result.has_error("type", keys::LESSON_TYPE_REQUIRED));
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(ValidationResult::from_errors(vec![FieldError::new(
            "name",
            keys::NAME_REQUIRED,
        )]))
        .unwrap();
        assert_eq!(json["status"], "invalid");
        assert_eq!(json["errors"][0]["key"], "NameRequired");
    }
}
