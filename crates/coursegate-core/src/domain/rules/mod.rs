//! The declarative rule engine.
//!
//! A [`Validator`] is a value: an ordered list of [`Rule`]s plus named rule
//! sets. Rules come in four shapes:
//!
//! - [`Field`]: a chain of checks on one field, stopping at the first failure
//! - [`Nested`]: an optional child object validated by its own validator
//! - [`Collection`]: list-level checks, then one validator per element
//! - [`DomainCheck`]: a multi-field invariant keyed to a synthetic path
//!
//! Evaluation is a pure function of the request. Every independent rule
//! runs, and errors are collected in definition order.

pub mod activation;
pub mod collection;
pub mod domain_check;
pub mod field;
pub mod markup;
pub mod nested;
pub mod primitive;
pub mod result;
pub mod validator;
pub mod value;

pub use activation::Activation;
pub use collection::{Collection, Quantity};
pub use domain_check::DomainCheck;
pub use field::Field;
pub use nested::Nested;
pub use primitive::{Bound, Constraint};
pub use result::{FieldError, ValidationResult};
pub use validator::{RuleSet, Validator};
pub use value::{AsFieldValue, FieldValue};

/// Path prefix under which a rule reports its errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope(String);

impl Scope {
    pub fn root() -> Self {
        Self::default()
    }

    /// Full path of `field` inside this scope.
    pub fn path(&self, field: &str) -> String {
        if self.0.is_empty() {
            field.to_owned()
        } else if field.is_empty() {
            self.0.clone()
        } else {
            format!("{}.{}", self.0, field)
        }
    }

    pub fn child(&self, field: &str) -> Self {
        Self(self.path(field))
    }

    /// Scope of the `index`-th element of list `field`.
    pub fn element(&self, field: &str, index: usize) -> Self {
        Self(format!("{}.{index}", self.path(field)))
    }
}

/// One unit of validation over a request of type `T`.
pub trait Rule<T>: Send + Sync {
    /// Append any violations to `errors`.
    fn evaluate(&self, request: &T, scope: &Scope, errors: &mut Vec<FieldError>);

    /// The field path this rule reports under, relative to its scope.
    fn path(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_paths() {
        let root = Scope::root();
        assert_eq!(root.path("name"), "name");

        let answers = root.element("answers", 2);
        assert_eq!(answers.path("option"), "answers.2.option");

        let meeting = root.child("meeting");
        assert_eq!(meeting.path("startDate"), "meeting.startDate");
        assert_eq!(meeting.path(""), "meeting");
    }
}
