//! List-valued fields.
//!
//! List-level checks run first and stop at the first failure. If any of them
//! fails, the elements are not validated, so a too-short option list yields
//! one clear error instead of per-element noise.

use std::sync::Arc;

use crate::domain::{
    keys::MessageKey,
    rules::{Activation, FieldError, Rule, Scope, Validator},
};

type ListSelector<T, C> = Arc<dyn for<'a> Fn(&'a T) -> &'a [C] + Send + Sync>;

/// How many elements must match a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Exactly(usize),
    AtLeast(usize),
    AtMost(usize),
}

impl Quantity {
    pub const fn admits(self, n: usize) -> bool {
        match self {
            Self::Exactly(k) => n == k,
            Self::AtLeast(k) => n >= k,
            Self::AtMost(k) => n <= k,
        }
    }
}

enum ListTest<C> {
    Count(Quantity),
    Matching {
        predicate: fn(&C) -> bool,
        quantity: Quantity,
    },
    Must(Arc<dyn Fn(&[C]) -> bool + Send + Sync>),
}

impl<C> ListTest<C> {
    fn passes(&self, items: &[C]) -> bool {
        match self {
            Self::Count(q) => q.admits(items.len()),
            Self::Matching {
                predicate,
                quantity,
            } => quantity.admits(items.iter().filter(|c| predicate(c)).count()),
            Self::Must(f) => f(items),
        }
    }
}

struct ListCheck<T, C> {
    test: ListTest<C>,
    key: MessageKey,
    when: Option<Activation<T>>,
}

/// Validates a list field: list-level checks, then each element.
pub struct Collection<T, C> {
    path: &'static str,
    select: ListSelector<T, C>,
    checks: Vec<ListCheck<T, C>>,
    element: Option<Arc<Validator<C>>>,
    when: Option<Activation<T>>,
}

impl<T: 'static, C: 'static> Collection<T, C> {
    pub fn of<F>(path: &'static str, select: F) -> Self
    where
        F: Fn(&T) -> &[C] + Send + Sync + 'static,
    {
        Self {
            path,
            select: Arc::new(select),
            checks: Vec::new(),
            element: None,
            when: None,
        }
    }

    /// Validate every element with `validator`.
    pub fn each(mut self, validator: Validator<C>) -> Self {
        self.element = Some(Arc::new(validator));
        self
    }

    pub fn when(mut self, activation: Activation<T>) -> Self {
        self.when = Some(activation);
        self
    }

    pub fn min_count(self, min: usize, key: MessageKey) -> Self {
        self.push(ListTest::Count(Quantity::AtLeast(min)), key, None)
    }

    pub fn min_count_when(self, min: usize, key: MessageKey, activation: Activation<T>) -> Self {
        self.push(ListTest::Count(Quantity::AtLeast(min)), key, Some(activation))
    }

    /// The number of elements satisfying `predicate` must match `quantity`.
    pub fn matching(
        self,
        predicate: fn(&C) -> bool,
        quantity: Quantity,
        key: MessageKey,
        activation: Option<Activation<T>>,
    ) -> Self {
        self.push(
            ListTest::Matching {
                predicate,
                quantity,
            },
            key,
            activation,
        )
    }

    pub fn must<F>(self, predicate: F, key: MessageKey) -> Self
    where
        F: Fn(&[C]) -> bool + Send + Sync + 'static,
    {
        self.push(ListTest::Must(Arc::new(predicate)), key, None)
    }

    fn push(mut self, test: ListTest<C>, key: MessageKey, when: Option<Activation<T>>) -> Self {
        self.checks.push(ListCheck { test, key, when });
        self
    }
}

impl<T: 'static, C: 'static> Rule<T> for Collection<T, C> {
    fn evaluate(&self, request: &T, scope: &Scope, errors: &mut Vec<FieldError>) {
        if self.when.as_ref().is_some_and(|w| !w.holds(request)) {
            return;
        }

        let items = (self.select)(request);

        let failed = self
            .checks
            .iter()
            .filter(|c| c.when.as_ref().is_none_or(|w| w.holds(request)))
            .find(|c| !c.test.passes(items));

        if let Some(check) = failed {
            errors.push(FieldError::new(scope.path(self.path), check.key));
            return;
        }

        if let Some(validator) = &self.element {
            for (index, item) in items.iter().enumerate() {
                validator.evaluate_default(item, &scope.element(self.path, index), errors);
            }
        }
    }

    fn path(&self) -> &'static str {
        self.path
    }
}
