//! Argument values and field values.
//!
//! [`Value`] is a single bound argument of a built clause. [`FieldValue`] is the value of one
//! parameter field together with the shape that decides whether the field is omitted:
//!
//! - [`FieldValue::Scalar`]: empty text and [`UNSET_TIMESTAMP`] are omitted, numbers never are
//! - [`FieldValue::Nullable`]: omitted when not valid (`None`)
//! - [`FieldValue::List`]: omitted when empty
//! - [`FieldValue::Unsupported`]: always omitted

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Timestamp meaning "no filter" on a non-nullable timestamp field.
///
/// Any other instant, the Unix epoch included, is a real filter value. Prefer
/// `Option<DateTime<Utc>>` for optional timestamps.
pub const UNSET_TIMESTAMP: DateTime<Utc> = DateTime::<Utc>::MIN_UTC;

/// A bound argument, position-matched to a `?` placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Int32(i32),
    Int64(i64),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Timestamp(DateTime<Utc>),
}

impl Value {
    /// Returns the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as `i64`, if this is an integer value that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int32(v) => Some(i64::from(*v)),
            Value::Int64(v) => Some(*v),
            Value::UInt64(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Whether a non-nullable field holding this value is left out of the clause.
    fn is_unset(&self) -> bool {
        match self {
            Value::Text(s) => s.is_empty(),
            Value::Timestamp(t) => *t == UNSET_TIMESTAMP,
            Value::Int32(_)
            | Value::Int64(_)
            | Value::UInt64(_)
            | Value::Float32(_)
            | Value::Float64(_) => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Int32(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::UInt64(v) => write!(f, "{v}"),
            Value::Float32(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Timestamp(t) => write!(f, "{}", t.to_rfc3339()),
        }
    }
}

macro_rules! impl_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }

            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::$variant(self.clone())
                }
            }

            impl ToFieldValue for $ty {
                fn to_field_value(&self) -> FieldValue {
                    FieldValue::Scalar(self.to_value())
                }
            }
        )*
    };
}

impl_value_from! {
    String => Text,
    i32 => Int32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    DateTime<Utc> => Timestamp,
}

// Narrower integers widen losslessly into the 64-bit variants.
macro_rules! impl_value_widen {
    ($($ty:ty => $variant:ident as $wide:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v as $wide)
                }
            }

            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::from(*self)
                }
            }

            impl ToFieldValue for $ty {
                fn to_field_value(&self) -> FieldValue {
                    FieldValue::Scalar(self.to_value())
                }
            }
        )*
    };
}

impl_value_widen! {
    i8 => Int64 as i64,
    i16 => Int64 as i64,
    isize => Int64 as i64,
    u8 => Int64 as i64,
    u16 => Int64 as i64,
    u32 => Int64 as i64,
    usize => UInt64 as u64,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

/// Borrowing conversion into a [`Value`].
///
/// Implemented for the scalar types a parameter field may hold.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

/// The value of one parameter field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A plain value; empty text and the unset timestamp mean "no filter".
    Scalar(Value),
    /// A value + validity pair; `None` means "no filter".
    Nullable(Option<Value>),
    /// A homogeneous collection for membership tests; empty means "no filter".
    List(Vec<Value>),
    /// A type the translator does not handle. Never produces a clause.
    Unsupported,
}

impl FieldValue {
    /// Whether this value contributes nothing to the clause.
    pub fn is_skipped(&self) -> bool {
        match self {
            FieldValue::Scalar(v) => v.is_unset(),
            FieldValue::Nullable(v) => v.is_none(),
            FieldValue::List(vs) => vs.is_empty(),
            FieldValue::Unsupported => true,
        }
    }
}

/// Conversion of a parameter field into a [`FieldValue`].
///
/// `#[derive(QueryParams)]` calls this on every tagged field, so a field type must implement
/// it. Types with no clause translation (such as `bool`) map to [`FieldValue::Unsupported`].
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue;
}

impl ToFieldValue for FieldValue {
    fn to_field_value(&self) -> FieldValue {
        self.clone()
    }
}

impl ToFieldValue for Value {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Scalar(self.clone())
    }
}

impl ToFieldValue for str {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Scalar(self.to_value())
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Unsupported
    }
}

impl<T: ToValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Nullable(self.as_ref().map(ToValue::to_value))
    }
}

impl<T: ToValue> ToFieldValue for Vec<T> {
    fn to_field_value(&self) -> FieldValue {
        self.as_slice().to_field_value()
    }
}

impl<T: ToValue> ToFieldValue for [T] {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToFieldValue + ?Sized> ToFieldValue for &T {
    fn to_field_value(&self) -> FieldValue {
        (**self).to_field_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn scalar_skip_rules() {
        assert!(String::new().to_field_value().is_skipped());
        assert!(!"a".to_field_value().is_skipped());
        assert!(!0_i64.to_field_value().is_skipped());
        assert!(!0.0_f64.to_field_value().is_skipped());
        assert!(UNSET_TIMESTAMP.to_field_value().is_skipped());
        assert!(!DateTime::<Utc>::UNIX_EPOCH.to_field_value().is_skipped());

        let t = Utc.with_ymd_and_hms(2022, 6, 19, 10, 0, 0).unwrap();
        assert!(!t.to_field_value().is_skipped());
    }

    #[test]
    fn nullable_skips_only_when_invalid() {
        assert!(None::<i64>.to_field_value().is_skipped());
        assert!(!Some(String::new()).to_field_value().is_skipped());
        assert!(!Some(UNSET_TIMESTAMP).to_field_value().is_skipped());
    }

    #[test]
    fn list_and_unsupported() {
        assert!(Vec::<i32>::new().to_field_value().is_skipped());
        assert_eq!(
            vec!["a", "b"].to_field_value(),
            FieldValue::List(vec![Value::from("a"), Value::from("b")])
        );
        assert_eq!(true.to_field_value(), FieldValue::Unsupported);
        assert!(true.to_field_value().is_skipped());
    }

    #[test]
    fn integer_widths() {
        assert_eq!(7_u32.to_value(), Value::Int64(7));
        assert_eq!((-3_i8).to_value(), Value::Int64(-3));
        assert_eq!(u16::MAX.to_value(), Value::Int64(65535));
        assert_eq!(5_usize.to_value(), Value::UInt64(5));
        assert_eq!(Value::from(u64::MAX).as_i64(), None);
        assert_eq!(Value::from(20_usize).as_i64(), Some(20));
        assert_eq!(
            Some(4_u32).to_field_value(),
            FieldValue::Nullable(Some(Value::Int64(4)))
        );
    }

    #[test]
    fn values_serialize_untagged() {
        let t = Utc.with_ymd_and_hms(2022, 6, 19, 10, 0, 0).unwrap();
        let args = vec![Value::from("x"), Value::from(3_i32), Value::from(t)];
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            serde_json::json!(["x", 3, "2022-06-19T10:00:00Z"])
        );
    }
}
