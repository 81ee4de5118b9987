//! Multi-field invariants that don't fit a single field chain.

use std::sync::Arc;

use crate::domain::{
    keys::MessageKey,
    rules::{Activation, FieldError, Rule, Scope},
};

/// Path used for errors about the request as a whole.
pub const WHOLE_OBJECT: &str = "_";

/// A predicate over the whole request, reported under a synthetic path.
pub struct DomainCheck<T> {
    path: &'static str,
    key: MessageKey,
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
    when: Option<Activation<T>>,
}

impl<T: 'static> DomainCheck<T> {
    /// `predicate` returns `true` when the invariant holds.
    pub fn new<F>(path: &'static str, key: MessageKey, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            path,
            key,
            predicate: Arc::new(predicate),
            when: None,
        }
    }

    /// A check reported under [`WHOLE_OBJECT`].
    pub fn whole<F>(key: MessageKey, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::new(WHOLE_OBJECT, key, predicate)
    }

    pub fn when(mut self, activation: Activation<T>) -> Self {
        self.when = Some(activation);
        self
    }
}

impl<T: 'static> Rule<T> for DomainCheck<T> {
    fn evaluate(&self, request: &T, scope: &Scope, errors: &mut Vec<FieldError>) {
        if self.when.as_ref().is_some_and(|w| !w.holds(request)) {
            return;
        }
        if !(self.predicate)(request) {
            errors.push(FieldError::new(scope.path(self.path), self.key));
        }
    }

    fn path(&self) -> &'static str {
        self.path
    }
}
