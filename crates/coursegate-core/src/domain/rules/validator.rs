//! Validators as values.

use std::collections::HashSet;

use tracing::trace;

use crate::domain::{
    error::DomainError,
    rules::{FieldError, Rule, Scope, ValidationResult},
};

/// Name that selects only the default rules.
pub const DEFAULT_RULE_SET: &str = "default";

/// A named group of rules layered on top of a validator's default rules.
pub struct RuleSet<T> {
    name: &'static str,
    rules: Vec<Box<dyn Rule<T>>>,
}

impl<T> RuleSet<T> {
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: impl Rule<T> + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// An ordered list of rules for one request type, plus optional rule sets.
///
/// Selecting a named rule set runs the default rules first, then the set's
/// own rules. A set rule on a path that already failed is skipped, so the
/// set extends that field's chain and a field still reports one error.
pub struct Validator<T> {
    name: &'static str,
    rules: Vec<Box<dyn Rule<T>>>,
    rule_sets: Vec<RuleSet<T>>,
}

impl<T> Validator<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rules: Vec::new(),
            rule_sets: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: impl Rule<T> + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_set(mut self, set: RuleSet<T>) -> Self {
        self.rule_sets.push(set);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rule_set_names(&self) -> Vec<&'static str> {
        self.rule_sets.iter().map(RuleSet::name).collect()
    }

    /// Field paths covered by the default rules, in definition order.
    pub fn paths(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.path()).collect()
    }

    /// Validate `request` with the default rules, or with the default rules
    /// plus the named set.
    ///
    /// Rule set names match case-insensitively. An unknown name is an error,
    /// never a silent fallback to the default rules.
    pub fn validate(&self, request: &T, rule_set: Option<&str>) -> Result<ValidationResult, DomainError> {
        let extra = match rule_set {
            None => None,
            Some(name) if name.eq_ignore_ascii_case(DEFAULT_RULE_SET) => None,
            Some(name) => Some(self.find(name)?),
        };

        let scope = Scope::root();
        let mut errors = Vec::new();
        self.evaluate_default(request, &scope, &mut errors);
        if let Some(set) = extra {
            for rule in &set.rules {
                let path = scope.path(rule.path());
                if errors.iter().any(|e| e.field == path) {
                    continue;
                }
                rule.evaluate(request, &scope, &mut errors);
            }
        }

        trace!(
            validator = self.name,
            rule_set = rule_set.unwrap_or(DEFAULT_RULE_SET),
            errors = errors.len(),
            "validated"
        );
        Ok(ValidationResult::from_errors(errors))
    }

    /// Run the default rules under `scope`, appending to `errors`.
    pub fn evaluate_default(&self, request: &T, scope: &Scope, errors: &mut Vec<FieldError>) {
        for rule in &self.rules {
            rule.evaluate(request, scope, errors);
        }
    }

    /// Reject definitions that can't be dispatched unambiguously.
    pub fn check_definition(&self) -> Result<(), DomainError> {
        if self.rules.is_empty() && self.rule_sets.is_empty() {
            return Err(DomainError::EmptyValidator {
                validator: self.name.into(),
            });
        }

        let mut seen = HashSet::new();
        for set in &self.rule_sets {
            let name = set.name.to_ascii_lowercase();
            if name.is_empty() || name == DEFAULT_RULE_SET {
                return Err(DomainError::ReservedRuleSet {
                    validator: self.name.into(),
                    rule_set: set.name.into(),
                });
            }
            if set.is_empty() {
                return Err(DomainError::EmptyRuleSet {
                    validator: self.name.into(),
                    rule_set: set.name.into(),
                });
            }
            if !seen.insert(name) {
                return Err(DomainError::DuplicateRuleSet {
                    validator: self.name.into(),
                    rule_set: set.name.into(),
                });
            }
        }
        Ok(())
    }

    fn find(&self, name: &str) -> Result<&RuleSet<T>, DomainError> {
        self.rule_sets
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| DomainError::UnknownRuleSet {
                validator: self.name.into(),
                rule_set: name.into(),
                available: self.rule_set_names().into_iter().map(String::from).collect(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{keys, rules::Field};

    struct Account {
        name: Option<String>,
        email: Option<String>,
        id: Option<String>,
    }

    fn validator() -> Validator<Account> {
        Validator::new("account")
            .rule(Field::of("name", |a: &Account| &a.name).required(keys::NAME_REQUIRED))
            .rule_set(
                RuleSet::named("add")
                    .rule(Field::of("email", |a: &Account| &a.email).required(keys::EMAIL_REQUIRED)),
            )
            .rule_set(
                RuleSet::named("update")
                    .rule(Field::of("identity", |a: &Account| &a.id).required(keys::IDENTITY_REQUIRED)),
            )
    }

    fn empty() -> Account {
        Account {
            name: None,
            email: None,
            id: None,
        }
    }

    #[test]
    fn default_rules_only_without_selection() {
        let result = validator().validate(&empty(), None).unwrap();
        assert_eq!(result.errors(), [FieldError::new("name", keys::NAME_REQUIRED)]);
        assert_eq!(validator().validate(&empty(), Some("Default")).unwrap(), result);
    }

    #[test]
    fn named_set_adds_to_default() {
        let result = validator().validate(&empty(), Some("add")).unwrap();
        assert_eq!(
            result.errors(),
            [
                FieldError::new("name", keys::NAME_REQUIRED),
                FieldError::new("email", keys::EMAIL_REQUIRED),
            ]
        );

        let result = validator().validate(&empty(), Some("UPDATE")).unwrap();
        assert!(result.has_error("identity", keys::IDENTITY_REQUIRED));
        assert!(!result.has_error("email", keys::EMAIL_REQUIRED));
    }

    #[test]
    fn set_rule_on_failed_field_is_skipped() {
        let v = Validator::new("account")
            .rule(Field::of("email", |a: &Account| &a.email).email(keys::INVALID_EMAIL))
            .rule_set(
                RuleSet::named("add")
                    .rule(Field::of("email", |a: &Account| &a.email).required(keys::EMAIL_REQUIRED)),
            );

        let blank = Account {
            email: Some(String::new()),
            ..empty()
        };
        let result = v.validate(&blank, Some("add")).unwrap();
        assert_eq!(result.errors(), [FieldError::new("email", keys::INVALID_EMAIL)]);

        let result = v.validate(&empty(), Some("add")).unwrap();
        assert_eq!(result.errors(), [FieldError::new("email", keys::EMAIL_REQUIRED)]);
    }

    #[test]
    fn unknown_set_is_an_error() {
        let err = validator().validate(&empty(), Some("delete")).unwrap_err();
        assert!(matches!(err, DomainError::UnknownRuleSet { ref available, .. } if available.len() == 2));
    }

    #[test]
    fn paths_list_default_rules_only() {
        assert_eq!(validator().paths(), ["name"]);
    }

    #[test]
    fn repeated_validation_is_identical() {
        let v = validator();
        let request = empty();
        assert_eq!(
            v.validate(&request, Some("add")).unwrap(),
            v.validate(&request, Some("add")).unwrap()
        );
    }

    #[test]
    fn malformed_definitions_are_rejected() {
        assert!(validator().check_definition().is_ok());

        let duplicate = validator().rule_set(
            RuleSet::named("ADD").rule(Field::of("name", |a: &Account| &a.name).required(keys::NAME_REQUIRED)),
        );
        assert!(matches!(
            duplicate.check_definition(),
            Err(DomainError::DuplicateRuleSet { .. })
        ));

        let reserved = validator().rule_set(
            RuleSet::named("default").rule(Field::of("name", |a: &Account| &a.name).required(keys::NAME_REQUIRED)),
        );
        assert!(matches!(
            reserved.check_definition(),
            Err(DomainError::ReservedRuleSet { .. })
        ));

        let hollow = validator().rule_set(RuleSet::named("archive"));
        assert!(matches!(
            hollow.check_definition(),
            Err(DomainError::EmptyRuleSet { .. })
        ));

        assert!(matches!(
            Validator::<Account>::new("nothing").check_definition(),
            Err(DomainError::EmptyValidator { .. })
        ));
    }
}
