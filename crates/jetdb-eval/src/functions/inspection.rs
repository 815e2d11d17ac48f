//! Type introspection functions
//!
//! Implements: IsNull, IsDate, IsNumeric, VarType, TypeName
//!
//! IsDate and IsNumeric probe strings with independent lexical parses.
//! A numeric-looking string is never a date, even though casting it to a
//! date works in general; a temporal-looking string is never numeric.

use jetdb_types::{Value, ValueType};
use std::sync::Arc;

use crate::coerce::CoerceValue;
use crate::context::EvalContext;
use crate::error::EvalResult;
use crate::registry::{Func1, FunctionRegistry};

pub(crate) fn register(registry: &mut FunctionRegistry) -> EvalResult<()> {
    registry.register(Arc::new(Func1::new("IsNull", is_null)))?;
    registry.register(Arc::new(Func1::new("IsDate", is_date)))?;
    registry.register(Arc::new(Func1::new("IsNumeric", is_numeric)))?;
    registry.register(Arc::new(Func1::new("VarType", var_type)))?;
    registry.register(Arc::new(Func1::new("TypeName", type_name)))?;
    Ok(())
}

fn is_null(_ctx: &dyn EvalContext, arg: &Value) -> EvalResult<Value> {
    Ok(Value::from(arg.is_null()))
}

fn is_date(ctx: &dyn EvalContext, arg: &Value) -> EvalResult<Value> {
    if arg.value_type().is_temporal() {
        return Ok(Value::TRUE);
    }

    // a string literal only counts when it is explicitly a date/time, not
    // when it is just a number, even though casting a number string to a
    // date/time works in general
    if arg.value_type().is_string() && !string_is_numeric(ctx, arg) && string_is_temporal(ctx, arg)
    {
        return Ok(Value::TRUE);
    }

    Ok(Value::FALSE)
}

fn is_numeric(ctx: &dyn EvalContext, arg: &Value) -> EvalResult<Value> {
    if arg.value_type().is_numeric() {
        return Ok(Value::TRUE);
    }

    // only a string can be considered numeric here, even though a
    // date/time can be cast to a number in general
    if arg.value_type().is_string() && string_is_numeric(ctx, arg) {
        return Ok(Value::TRUE);
    }

    Ok(Value::FALSE)
}

/// Legacy numeric type code for the value's tag
fn var_type(_ctx: &dyn EvalContext, arg: &Value) -> EvalResult<Value> {
    let code = match arg.value_type() {
        ValueType::Null => 1,
        ValueType::LongInt => 3,
        ValueType::Double => 5,
        ValueType::Date | ValueType::Time | ValueType::DateTime => 7,
        ValueType::Text => 8,
        ValueType::Decimal => 14,
    };
    Ok(Value::LongInt(code))
}

/// Legacy display name for the value's tag
fn type_name(_ctx: &dyn EvalContext, arg: &Value) -> EvalResult<Value> {
    let name = match arg.value_type() {
        ValueType::Null => "Null",
        ValueType::Text => "String",
        ValueType::Date | ValueType::Time | ValueType::DateTime => "Date",
        ValueType::LongInt => "Long",
        ValueType::Double => "Double",
        ValueType::Decimal => "Decimal",
    };
    Ok(Value::Text(name.to_string()))
}

fn string_is_numeric(ctx: &dyn EvalContext, arg: &Value) -> bool {
    arg.to_decimal(ctx).is_ok()
}

fn string_is_temporal(ctx: &dyn EvalContext, arg: &Value) -> bool {
    arg.to_date_time(ctx).is_ok()
}
