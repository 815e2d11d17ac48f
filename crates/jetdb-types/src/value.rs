//! Expression values - runtime representation of evaluated scalars
//!
//! This module defines the [`Value`] enum and its type tags. Values are
//! immutable: every operation over them produces a new value. The legacy
//! application has no boolean kind; boolean results are `LongInt` with
//! `true = -1` and `false = 0`, and that convention is preserved here.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An evaluated scalar value.
///
/// The temporal variants carry a point in time whose variant tag records
/// which calendar components are significant (date-only, time-only, or
/// combined).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    /// Null value (missing/unknown)
    Null,
    /// String value
    Text(String),
    /// 32-bit signed integer; also carries boolean results (-1/0)
    LongInt(i32),
    /// Double-precision floating point
    Double(f64),
    /// Arbitrary precision decimal, always normalized
    Decimal(Decimal),
    /// Date (no time component)
    Date(NaiveDate),
    /// Time of day (no date component)
    Time(NaiveTime),
    /// Combined date and time
    DateTime(NaiveDateTime),
}

/// Type tag for a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    Null,
    Text,
    LongInt,
    Double,
    Decimal,
    Date,
    Time,
    DateTime,
}

impl ValueType {
    /// Whether this tag is one of the numeric kinds
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::LongInt | Self::Double | Self::Decimal)
    }

    /// Whether this tag is one of the temporal kinds
    pub fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::Time | Self::DateTime)
    }

    /// Whether this tag is the string kind
    pub fn is_string(self) -> bool {
        matches!(self, Self::Text)
    }

    /// Display name for diagnostics
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Text => "Text",
            Self::LongInt => "LongInt",
            Self::Double => "Double",
            Self::Decimal => "Decimal",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::DateTime => "DateTime",
        }
    }
}

impl Value {
    /// Canonical null value
    pub const NULL: Value = Value::Null;
    /// Canonical true value (legacy -1 encoding)
    pub const TRUE: Value = Value::LongInt(-1);
    /// Canonical false value
    pub const FALSE: Value = Value::LongInt(0);
    /// Canonical zero; identical to [`Value::FALSE`]
    pub const ZERO: Value = Value::LongInt(0);
    /// Canonical one
    pub const ONE: Value = Value::LongInt(1);
    /// Canonical negative one; identical to [`Value::TRUE`]
    pub const NEG_ONE: Value = Value::LongInt(-1);

    /// Canonical empty string value (an empty `String` does not allocate)
    pub fn empty_text() -> Value {
        Value::Text(String::new())
    }

    /// The type tag of this value
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Null => ValueType::Null,
            Self::Text(_) => ValueType::Text,
            Self::LongInt(_) => ValueType::LongInt,
            Self::Double(_) => ValueType::Double,
            Self::Decimal(_) => ValueType::Decimal,
            Self::Date(_) => ValueType::Date,
            Self::Time(_) => ValueType::Time,
            Self::DateTime(_) => ValueType::DateTime,
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Peek at the string payload without coercion
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Peek at the integer payload without coercion
    pub fn as_long_int(&self) -> Option<i32> {
        match self {
            Self::LongInt(i) => Some(*i),
            _ => None,
        }
    }

    /// Peek at the double payload without coercion
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Peek at the decimal payload without coercion
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b { Value::TRUE } else { Value::FALSE }
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::LongInt(i)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Double(f64::from(f))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(normalize_decimal(d))
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<NaiveTime> for Value {
    fn from(t: NaiveTime) -> Self {
        Value::Time(t)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

/// Reduce a decimal to its minimal non-negative scale.
///
/// Trailing fractional zeros are stripped. An exact zero always collapses
/// to scale 0: decimal-stripping routines commonly leave `0.00` at scale
/// 2, so zero is special-cased before stripping.
pub fn normalize_decimal(d: Decimal) -> Decimal {
    if d.scale() == 0 {
        return d;
    }
    if d.is_zero() {
        return Decimal::ZERO;
    }
    d.normalize()
}
