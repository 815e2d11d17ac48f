//! On-demand type coercion for expression values
//!
//! [`CoerceValue`] is the context-aware counterpart to the peek accessors
//! on [`Value`]: each method converts to the demanded type per the legacy
//! coercion rules or fails with a typed error. Nothing is ever silently
//! truncated or defaulted.
//!
//! Booleans follow the legacy integer encoding: zero is false, any other
//! number is true. Strings only become numbers when they lexically parse
//! as one, and only become temporal values when they match a configured
//! date/time format. Temporal values coerce to numbers through their
//! serialized day-count form.

use jetdb_types::{Value, normalize_decimal};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use crate::context::EvalContext;
use crate::error::{EvalError, EvalResult};
use crate::temporal;

/// Coercing accessors over [`Value`], parameterized by the evaluation
/// context for locale-aware lexical conversion.
pub trait CoerceValue {
    /// Coerce to a boolean
    fn to_boolean(&self, ctx: &dyn EvalContext) -> EvalResult<bool>;
    /// Coerce to an integer of the native (32-bit) width
    fn to_long_int(&self, ctx: &dyn EvalContext) -> EvalResult<i32>;
    /// Coerce to a double
    fn to_double(&self, ctx: &dyn EvalContext) -> EvalResult<f64>;
    /// Coerce to a normalized decimal
    fn to_decimal(&self, ctx: &dyn EvalContext) -> EvalResult<Decimal>;
    /// Coerce to the lossless string rendering
    fn to_text(&self, ctx: &dyn EvalContext) -> EvalResult<String>;
    /// Coerce to a temporal value (`Date`, `Time` or `DateTime`)
    fn to_date_time(&self, ctx: &dyn EvalContext) -> EvalResult<Value>;
}

impl CoerceValue for Value {
    fn to_boolean(&self, ctx: &dyn EvalContext) -> EvalResult<bool> {
        match self {
            Value::LongInt(i) => Ok(*i != 0),
            Value::Double(d) => Ok(*d != 0.0),
            Value::Decimal(d) => Ok(!d.is_zero()),
            Value::Text(s) => parse_text_decimal(s, ctx).map(|d| !d.is_zero()),
            Value::Date(_) | Value::Time(_) | Value::DateTime(_) => {
                Ok(self.to_double(ctx)? != 0.0)
            }
            Value::Null => Err(conversion_error(self, "Boolean")),
        }
    }

    fn to_long_int(&self, ctx: &dyn EvalContext) -> EvalResult<i32> {
        match self {
            Value::LongInt(i) => Ok(*i),
            Value::Double(d) => round_to_long_int(*d),
            Value::Decimal(d) => decimal_to_long_int(*d),
            Value::Text(s) => decimal_to_long_int(parse_text_decimal(s, ctx)?),
            Value::Date(_) | Value::Time(_) | Value::DateTime(_) => {
                round_to_long_int(self.to_double(ctx)?)
            }
            Value::Null => Err(conversion_error(self, "LongInt")),
        }
    }

    fn to_double(&self, ctx: &dyn EvalContext) -> EvalResult<f64> {
        match self {
            Value::LongInt(i) => Ok(f64::from(*i)),
            Value::Double(d) => Ok(*d),
            Value::Decimal(d) => d
                .to_f64()
                .ok_or_else(|| conversion_error(self, "Double")),
            Value::Text(s) => {
                let d = parse_text_decimal(s, ctx)?;
                d.to_f64()
                    .ok_or_else(|| conversion_error(self, "Double"))
            }
            Value::Date(_) | Value::Time(_) | Value::DateTime(_) => temporal::to_date_double(self)
                .ok_or_else(|| conversion_error(self, "Double")),
            Value::Null => Err(conversion_error(self, "Double")),
        }
    }

    fn to_decimal(&self, ctx: &dyn EvalContext) -> EvalResult<Decimal> {
        match self {
            Value::LongInt(i) => Ok(Decimal::from(*i)),
            Value::Double(d) => Decimal::from_f64(*d)
                .map(normalize_decimal)
                .ok_or_else(|| conversion_error(self, "Decimal")),
            Value::Decimal(d) => Ok(*d),
            Value::Text(s) => parse_text_decimal(s, ctx),
            Value::Date(_) | Value::Time(_) | Value::DateTime(_) => {
                let dd = self.to_double(ctx)?;
                Decimal::from_f64(dd)
                    .map(normalize_decimal)
                    .ok_or_else(|| conversion_error(self, "Decimal"))
            }
            Value::Null => Err(conversion_error(self, "Decimal")),
        }
    }

    fn to_text(&self, ctx: &dyn EvalContext) -> EvalResult<String> {
        match self {
            Value::Text(s) => Ok(s.clone()),
            Value::LongInt(i) => Ok(i.to_string()),
            Value::Double(d) => Ok(d.to_string()),
            Value::Decimal(d) => Ok(d.to_string()),
            Value::Date(_) | Value::Time(_) | Value::DateTime(_) => {
                temporal::format_temporal(self, ctx)
            }
            Value::Null => Err(conversion_error(self, "Text")),
        }
    }

    fn to_date_time(&self, ctx: &dyn EvalContext) -> EvalResult<Value> {
        match self {
            Value::Date(_) | Value::Time(_) | Value::DateTime(_) => Ok(self.clone()),
            Value::Text(s) => temporal::parse_temporal(s, ctx),
            Value::LongInt(_) | Value::Double(_) | Value::Decimal(_) => {
                temporal::number_to_temporal(self.to_double(ctx)?)
            }
            Value::Null => Err(conversion_error(self, "DateTime")),
        }
    }
}

fn conversion_error(value: &Value, to: &str) -> EvalError {
    EvalError::conversion(value.value_type().name(), to, format!("{value:?}"))
}

/// Round a double to the native integer width, half to even.
///
/// NaN compares false against every bound, so non-finite inputs must be
/// rejected before the range check or `NaN as i32` would silently yield 0.
fn round_to_long_int(d: f64) -> EvalResult<i32> {
    if !d.is_finite() {
        return Err(EvalError::conversion("Double", "LongInt", d.to_string()));
    }
    let rounded = d.round_ties_even();
    if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
        return Err(EvalError::range("LongInt", d, i32::MIN, i32::MAX));
    }
    Ok(rounded as i32)
}

/// Round a decimal to the native integer width, half to even
fn decimal_to_long_int(d: Decimal) -> EvalResult<i32> {
    d.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_i32()
        .ok_or_else(|| EvalError::range("LongInt", d, i32::MIN, i32::MAX))
}

fn parse_text_decimal(s: &str, ctx: &dyn EvalContext) -> EvalResult<Decimal> {
    ctx.parse_decimal(s)
        .map(normalize_decimal)
        .ok_or_else(|| EvalError::conversion("Text", "Decimal", s))
}
