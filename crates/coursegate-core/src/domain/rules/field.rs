//! Single-field rule chains.

use std::sync::Arc;

use crate::domain::{
    keys::MessageKey,
    rules::{
        Activation, FieldError, Rule, Scope,
        primitive::{self, Constraint},
        value::{AsFieldValue, FieldValue},
    },
};

type Selector<T> = Arc<dyn for<'a> Fn(&'a T) -> FieldValue<'a> + Send + Sync>;
type Predicate<T> = Arc<dyn for<'a> Fn(&'a T, FieldValue<'a>) -> bool + Send + Sync>;

fn selector<T, F>(f: F) -> F
where
    F: for<'a> Fn(&'a T) -> FieldValue<'a>,
{
    f
}

enum Test<T> {
    Primitive(Constraint),
    EqualTo(Selector<T>),
    NotEqualTo(Selector<T>),
    After(Selector<T>),
    Must(Predicate<T>),
}

struct Check<T> {
    test: Test<T>,
    key: MessageKey,
    when: Option<Activation<T>>,
}

/// An ordered chain of checks on one field.
///
/// The chain stops at the first failing check, so a field yields at most
/// one error per evaluation.
pub struct Field<T> {
    path: &'static str,
    select: Selector<T>,
    checks: Vec<Check<T>>,
    when: Option<Activation<T>>,
}

impl<T: 'static> Field<T> {
    /// Start a chain on the field returned by `select`.
    pub fn of<V, F>(path: &'static str, select: F) -> Self
    where
        V: AsFieldValue + ?Sized + 'static,
        F: Fn(&T) -> &V + Send + Sync + 'static,
    {
        Self {
            path,
            select: Arc::new(selector(move |r: &T| select(r).as_field_value())),
            checks: Vec::new(),
            when: None,
        }
    }

    /// Apply the whole chain only when `activation` holds.
    pub fn when(mut self, activation: Activation<T>) -> Self {
        self.when = Some(activation);
        self
    }

    pub fn check(self, constraint: Constraint, key: MessageKey) -> Self {
        self.push(Test::Primitive(constraint), key, None)
    }

    /// A single check that only applies when `activation` holds.
    pub fn check_when(self, constraint: Constraint, key: MessageKey, activation: Activation<T>) -> Self {
        self.push(Test::Primitive(constraint), key, Some(activation))
    }

    pub fn required(self, key: MessageKey) -> Self {
        self.check(Constraint::Required, key)
    }

    pub fn required_when(self, key: MessageKey, activation: Activation<T>) -> Self {
        self.check_when(Constraint::Required, key, activation)
    }

    pub fn max_length(self, max: usize, key: MessageKey) -> Self {
        self.check(Constraint::MaxLength(max), key)
    }

    /// Length limit on rich text, counted after stripping markup.
    pub fn max_visible_length(self, max: usize, key: MessageKey) -> Self {
        self.check(Constraint::MaxVisibleLength(max), key)
    }

    pub fn in_enum(self, key: MessageKey) -> Self {
        self.check(Constraint::InEnum, key)
    }

    pub fn one_of(self, names: &'static [&'static str], key: MessageKey) -> Self {
        self.check(Constraint::OneOf(names), key)
    }

    pub fn greater_than(self, min: f64, key: MessageKey) -> Self {
        self.check(Constraint::greater_than(min), key)
    }

    pub fn at_least(self, min: f64, key: MessageKey) -> Self {
        self.check(Constraint::at_least(min), key)
    }

    pub fn between(self, min: f64, max: f64, key: MessageKey) -> Self {
        self.check(Constraint::between(min, max), key)
    }

    pub fn email(self, key: MessageKey) -> Self {
        self.check(Constraint::Email, key)
    }

    pub fn password(self, key: MessageKey) -> Self {
        self.check(Constraint::Password, key)
    }

    /// The field must equal a sibling field.
    pub fn equal_to<V, F>(self, other: F, key: MessageKey) -> Self
    where
        V: AsFieldValue + ?Sized + 'static,
        F: Fn(&T) -> &V + Send + Sync + 'static,
    {
        self.push(Test::EqualTo(sibling(other)), key, None)
    }

    /// The field must differ from a sibling field.
    pub fn not_equal_to<V, F>(self, other: F, key: MessageKey) -> Self
    where
        V: AsFieldValue + ?Sized + 'static,
        F: Fn(&T) -> &V + Send + Sync + 'static,
    {
        self.push(Test::NotEqualTo(sibling(other)), key, None)
    }

    /// The field must be strictly after a sibling field.
    pub fn after<V, F>(self, other: F, key: MessageKey) -> Self
    where
        V: AsFieldValue + ?Sized + 'static,
        F: Fn(&T) -> &V + Send + Sync + 'static,
    {
        self.push(Test::After(sibling(other)), key, None)
    }

    pub fn after_when<V, F>(self, other: F, key: MessageKey, activation: Activation<T>) -> Self
    where
        V: AsFieldValue + ?Sized + 'static,
        F: Fn(&T) -> &V + Send + Sync + 'static,
    {
        self.push(Test::After(sibling(other)), key, Some(activation))
    }

    /// Free-form predicate over the request and this field's value.
    pub fn must<P>(self, predicate: P, key: MessageKey) -> Self
    where
        P: for<'a> Fn(&'a T, FieldValue<'a>) -> bool + Send + Sync + 'static,
    {
        self.push(Test::Must(Arc::new(predicate)), key, None)
    }

    fn push(mut self, test: Test<T>, key: MessageKey, when: Option<Activation<T>>) -> Self {
        self.checks.push(Check { test, key, when });
        self
    }

    fn first_failure(&self, request: &T) -> Option<MessageKey> {
        let value = (self.select)(request);

        self.checks
            .iter()
            .filter(|c| c.when.as_ref().is_none_or(|w| w.holds(request)))
            .find(|c| {
                let passed = match &c.test {
                    Test::Primitive(constraint) => constraint.is_satisfied(&value),
                    Test::EqualTo(other) => primitive::values_equal(&value, &other(request)),
                    Test::NotEqualTo(other) => {
                        value.is_missing() || !primitive::values_equal(&value, &other(request))
                    }
                    Test::After(other) => primitive::is_after(&value, &other(request)),
                    Test::Must(predicate) => predicate(request, value),
                };
                !passed
            })
            .map(|c| c.key)
    }
}

fn sibling<T, V, F>(other: F) -> Selector<T>
where
    T: 'static,
    V: AsFieldValue + ?Sized + 'static,
    F: Fn(&T) -> &V + Send + Sync + 'static,
{
    Arc::new(selector(move |r: &T| other(r).as_field_value()))
}

impl<T: 'static> Rule<T> for Field<T> {
    fn evaluate(&self, request: &T, scope: &Scope, errors: &mut Vec<FieldError>) {
        if self.when.as_ref().is_some_and(|w| !w.holds(request)) {
            return;
        }
        if let Some(key) = self.first_failure(request) {
            errors.push(FieldError::new(scope.path(self.path), key));
        }
    }

    fn path(&self) -> &'static str {
        self.path
    }
}
