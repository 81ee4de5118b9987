//! Atomic predicates over a single field value.
//!
//! A [`Constraint`] answers one question about one [`FieldValue`] and never
//! fails loudly: a violated constraint is just `false`. The caller attaches a
//! message key and turns `false` into exactly one field error.
//!
//! Every constraint except [`Constraint::Required`] is satisfied by a missing
//! value. Optional fields are therefore only checked when present, and
//! "must be present" is always its own rule.
//!
//! A constraint applied to a value of the wrong shape (a length limit on a
//! number, say) rejects it. A mis-declared rule must surface as an error, not
//! pass quietly.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::rules::{markup, value::FieldValue};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"));

// The `regex` crate has no look-around, so complexity is one class per pattern.
static LOWERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]").expect("lowercase"));
static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").expect("uppercase"));
static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").expect("digit"));
static SYMBOL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9a-zA-Z]").expect("symbol"));

/// Minimum password length accepted by [`Constraint::Password`].
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// One side of a numeric range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Unbounded,
    Inclusive(f64),
    Exclusive(f64),
}

impl Bound {
    fn admits_above(self, n: f64) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Inclusive(min) => n >= min,
            Self::Exclusive(min) => n > min,
        }
    }

    fn admits_below(self, n: f64) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Inclusive(max) => n <= max,
            Self::Exclusive(max) => n < max,
        }
    }
}

/// A single-field predicate.
#[derive(Clone)]
pub enum Constraint {
    /// Present and not blank. Blank means whitespace-only text, an empty
    /// list or a nil id.
    Required,
    MinLength(usize),
    MaxLength(usize),
    /// Like [`Constraint::MaxLength`] but measured on text with markup stripped.
    MaxVisibleLength(usize),
    Range { min: Bound, max: Bound },
    /// The discriminant is a known member of its enum.
    InEnum,
    /// The discriminant (or text) is one of the listed wire names.
    OneOf(&'static [&'static str]),
    Pattern(Regex),
    Email,
    /// At least [`PASSWORD_MIN_LENGTH`] characters with a lowercase letter,
    /// an uppercase letter, a digit and a symbol.
    Password,
}

impl Constraint {
    /// `value > min`
    pub const fn greater_than(min: f64) -> Self {
        Self::Range {
            min: Bound::Exclusive(min),
            max: Bound::Unbounded,
        }
    }

    /// `value >= min`
    pub const fn at_least(min: f64) -> Self {
        Self::Range {
            min: Bound::Inclusive(min),
            max: Bound::Unbounded,
        }
    }

    /// `min <= value <= max`
    pub const fn between(min: f64, max: f64) -> Self {
        Self::Range {
            min: Bound::Inclusive(min),
            max: Bound::Inclusive(max),
        }
    }

    pub fn is_satisfied(&self, value: &FieldValue<'_>) -> bool {
        if value.is_missing() {
            return !matches!(self, Self::Required);
        }

        match self {
            Self::Required => match *value {
                FieldValue::Text(s) => !s.trim().is_empty(),
                FieldValue::Count(n) => n > 0,
                FieldValue::Id(id) => !id.is_nil(),
                _ => true,
            },
            Self::MinLength(min) => text(value).is_some_and(|s| s.chars().count() >= *min),
            Self::MaxLength(max) => text(value).is_some_and(|s| s.chars().count() <= *max),
            Self::MaxVisibleLength(max) => {
                text(value).is_some_and(|s| markup::visible_len(s) <= *max)
            }
            Self::Range { min, max } => value
                .as_number()
                .is_some_and(|n| min.admits_above(n) && max.admits_below(n)),
            Self::InEnum => matches!(value, FieldValue::Choice(Some(_))),
            Self::OneOf(names) => match *value {
                FieldValue::Choice(Some(name)) => names.contains(&name),
                FieldValue::Text(s) => names.iter().any(|n| *n == s),
                _ => false,
            },
            Self::Pattern(re) => text(value).is_some_and(|s| re.is_match(s)),
            Self::Email => text(value).is_some_and(|s| EMAIL.is_match(s.trim())),
            Self::Password => text(value).is_some_and(is_complex_password),
        }
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("Required"),
            Self::MinLength(n) => write!(f, "MinLength({n})"),
            Self::MaxLength(n) => write!(f, "MaxLength({n})"),
            Self::MaxVisibleLength(n) => write!(f, "MaxVisibleLength({n})"),
            Self::Range { min, max } => write!(f, "Range({min:?}, {max:?})"),
            Self::InEnum => f.write_str("InEnum"),
            Self::OneOf(names) => write!(f, "OneOf({names:?})"),
            Self::Pattern(re) => write!(f, "Pattern({})", re.as_str()),
            Self::Email => f.write_str("Email"),
            Self::Password => f.write_str("Password"),
        }
    }
}

fn text<'a>(value: &FieldValue<'a>) -> Option<&'a str> {
    match *value {
        FieldValue::Text(s) => Some(s),
        _ => None,
    }
}

fn is_complex_password(s: &str) -> bool {
    s.chars().count() >= PASSWORD_MIN_LENGTH
        && LOWERCASE.is_match(s)
        && UPPERCASE.is_match(s)
        && DIGIT.is_match(s)
        && SYMBOL.is_match(s)
}

/// Cross-field equality (e.g. confirm password equals new password).
///
/// Two missing values are equal. Text is compared exactly.
pub fn values_equal(a: &FieldValue<'_>, b: &FieldValue<'_>) -> bool {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

/// Cross-field ordering: `later` is strictly after `earlier`.
///
/// Satisfied when either side is missing; presence is a separate rule.
pub fn is_after(later: &FieldValue<'_>, earlier: &FieldValue<'_>) -> bool {
    if later.is_missing() || earlier.is_missing() {
        return true;
    }
    match (later, earlier) {
        (FieldValue::Time(l), FieldValue::Time(e)) => l > e,
        _ => match (later.as_number(), earlier.as_number()) {
            (Some(l), Some(e)) => l > e,
            _ => false,
        },
    }
}
