//! Borrowed views over request fields.
//!
//! Rules never see concrete request field types. A selector turns a field
//! into a [`FieldValue`] through [`AsFieldValue`], and every constraint is
//! written against that view. Adding a new field type means adding one
//! `AsFieldValue` impl here; nothing in the rule engine changes.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_objects::{Choice, Discriminant};

/// A read-only view of a single field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// The field was absent (`null` or omitted).
    Missing,
    Text(&'a str),
    Integer(i64),
    Number(f64),
    Flag(bool),
    Time(DateTime<Utc>),
    Id(Uuid),
    /// A discriminant. `None` means the payload carried a value outside the enum.
    Choice(Option<&'static str>),
    /// Number of elements in a list field.
    Count(usize),
}

impl FieldValue<'_> {
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Numeric view used by range and ordering checks.
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Self::Integer(i) => Some(i as f64),
            Self::Number(n) => Some(n),
            Self::Count(c) => Some(c as f64),
            _ => None,
        }
    }
}

/// Conversion from a request field into a [`FieldValue`].
pub trait AsFieldValue {
    fn as_field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_str())
    }
}

impl AsFieldValue for str {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl<V: AsFieldValue> AsFieldValue for Option<V> {
    fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            Some(v) => v.as_field_value(),
            None => FieldValue::Missing,
        }
    }
}

impl<V> AsFieldValue for Vec<V> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Count(self.len())
    }
}

macro_rules! integer_field {
    ($($ty:ty),*) => {
        $(
            impl AsFieldValue for $ty {
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Integer(i64::from(*self))
                }
            }
        )*
    };
}

integer_field!(i16, i32, i64, u8, u16, u32);

impl AsFieldValue for f32 {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Number(f64::from(*self))
    }
}

impl AsFieldValue for f64 {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Number(*self)
    }
}

impl AsFieldValue for bool {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Flag(*self)
    }
}

impl AsFieldValue for DateTime<Utc> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Time(*self)
    }
}

impl AsFieldValue for Uuid {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Id(*self)
    }
}

impl<E: Discriminant> AsFieldValue for Choice<E> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Choice(self.known().map(Discriminant::name))
    }
}
