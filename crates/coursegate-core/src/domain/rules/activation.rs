//! Conditional rule activation.
//!
//! An [`Activation`] decides whether a rule applies to a given request.
//! Discriminant-based activations only fire for a *known* discriminant: when
//! the field is absent or carries a value outside its enum, every rule keyed
//! on it stays inactive, and the discriminant's own `Required`/`InEnum` rule
//! reports the problem.

use std::fmt;
use std::sync::Arc;

use crate::domain::value_objects::Discriminant;

/// A shared predicate over the whole request.
pub struct Activation<T: ?Sized>(Arc<dyn Fn(&T) -> bool + Send + Sync>);

impl<T: ?Sized> Clone for Activation<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> fmt::Debug for Activation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Activation(..)")
    }
}

impl<T: ?Sized + 'static> Activation<T> {
    pub fn always() -> Self {
        Self::when(|_| true)
    }

    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    /// Active when the discriminant is known and satisfies `predicate`.
    pub fn discriminant<E, S, P>(selector: S, predicate: P) -> Self
    where
        E: Discriminant,
        S: Fn(&T) -> Option<E> + Send + Sync + 'static,
        P: Fn(E) -> bool + Send + Sync + 'static,
    {
        Self::when(move |request| selector(request).is_some_and(&predicate))
    }

    /// Active when the discriminant is known and equals `value`.
    pub fn is<E, S>(selector: S, value: E) -> Self
    where
        E: Discriminant,
        S: Fn(&T) -> Option<E> + Send + Sync + 'static,
    {
        Self::discriminant(selector, move |e| e == value)
    }

    /// Active when the discriminant is known and one of `values`.
    pub fn is_any<E, S>(selector: S, values: &'static [E]) -> Self
    where
        E: Discriminant,
        S: Fn(&T) -> Option<E> + Send + Sync + 'static,
    {
        Self::discriminant(selector, move |e| values.contains(&e))
    }

    /// Active when the optional field returned by `selector` is set.
    pub fn present<V, S>(selector: S) -> Self
    where
        V: ?Sized + 'static,
        S: Fn(&T) -> Option<&V> + Send + Sync + 'static,
    {
        Self::when(move |request| selector(request).is_some())
    }

    pub fn and(self, other: Self) -> Self {
        Self::when(move |request| self.holds(request) && other.holds(request))
    }

    pub fn or(self, other: Self) -> Self {
        Self::when(move |request| self.holds(request) || other.holds(request))
    }

    pub fn not(self) -> Self {
        Self::when(move |request| !self.holds(request))
    }

    pub fn holds(&self, request: &T) -> bool {
        (self.0)(request)
    }
}
