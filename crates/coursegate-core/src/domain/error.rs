// ============================================================================
// domain/error.rs - RULE DEFINITION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Ordinary invalid input never produces one of these; it is reported as a
/// [`ValidationResult`](crate::domain::rules::ValidationResult). A
/// `DomainError` means a validator or a lookup was set up wrong.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Rule set selection
    // ========================================================================
    #[error("validator '{validator}' has no rule set '{rule_set}'")]
    UnknownRuleSet {
        validator: String,
        rule_set: String,
        available: Vec<String>,
    },

    // ========================================================================
    // Malformed definitions
    // ========================================================================
    #[error("validator '{validator}' defines rule set '{rule_set}' more than once")]
    DuplicateRuleSet { validator: String, rule_set: String },

    #[error("validator '{validator}' uses reserved rule set name '{rule_set}'")]
    ReservedRuleSet { validator: String, rule_set: String },

    #[error("rule set '{rule_set}' of validator '{validator}' has no rules")]
    EmptyRuleSet { validator: String, rule_set: String },

    #[error("validator '{validator}' has no rules")]
    EmptyValidator { validator: String },

    // ========================================================================
    // Lookups
    // ========================================================================
    #[error("unknown request kind: {0}")]
    UnknownRequestKind(String),

    #[error("'{value}' is not a valid {kind}")]
    UnknownDiscriminant { kind: &'static str, value: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownRuleSet { available, .. } => {
                let mut hints = vec!["Omit --rule-set to use the default rules".into()];
                if !available.is_empty() {
                    hints.push(format!("Available rule sets: {}", available.join(", ")));
                }
                hints
            }
            Self::UnknownRequestKind(_) => vec![
                "Request kinds are kebab-case, e.g. 'course-status'".into(),
                "Try: coursegate kinds".into(),
            ],
            Self::UnknownDiscriminant { kind, .. } => vec![format!(
                "Use the numeric code or the camelCase name of a {kind}"
            )],
            Self::DuplicateRuleSet { .. }
            | Self::ReservedRuleSet { .. }
            | Self::EmptyRuleSet { .. }
            | Self::EmptyValidator { .. } => vec![
                "This is a defect in the validator definitions".into(),
                "Please report this issue".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownRuleSet { .. } | Self::UnknownDiscriminant { .. } => {
                ErrorCategory::Validation
            }
            Self::UnknownRequestKind(_) => ErrorCategory::NotFound,
            Self::DuplicateRuleSet { .. }
            | Self::ReservedRuleSet { .. }
            | Self::EmptyRuleSet { .. }
            | Self::EmptyValidator { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    NotFound,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_rule_set_lists_alternatives() {
        let err = DomainError::UnknownRuleSet {
            validator: "user".into(),
            rule_set: "remove".into(),
            available: vec!["add".into(), "update".into()],
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("add, update")));
    }

    #[test]
    fn definition_defects_are_configuration() {
        let err = DomainError::EmptyValidator {
            validator: "course".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
