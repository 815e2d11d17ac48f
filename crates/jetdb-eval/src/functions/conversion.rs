//! Cast functions
//!
//! Implements: CBool, CByte, CCur, CDate (and the CVDate alias), CDbl,
//! CDec, CInt, CLng, CSng, CStr, CVar, Hex, Oct (the latter two also
//! under their `$` string-call names)
//!
//! Each integer cast applies its own target range check; out-of-range is
//! an explicit range error, never wraparound. Hex and Oct propagate null
//! unconditionally; the other casts fail on null inputs through the
//! coercion rules.

use jetdb_types::Value;
use rust_decimal::RoundingStrategy;
use std::sync::Arc;

use crate::coerce::CoerceValue;
use crate::context::EvalContext;
use crate::error::{EvalError, EvalResult};
use crate::registry::{Func1, Func1NullIsNull, FunctionRegistry};

/// Fractional digits of the currency type
const CURRENCY_SCALE: u32 = 4;

pub(crate) fn register(registry: &mut FunctionRegistry) -> EvalResult<()> {
    registry.register(Arc::new(Func1::new("CBool", cbool)))?;
    registry.register(Arc::new(Func1::new("CByte", cbyte)))?;
    registry.register(Arc::new(Func1::new("CCur", ccur)))?;
    let cdate_func: Arc<Func1> = Arc::new(Func1::new("CDate", cdate));
    registry.register(cdate_func.clone())?;
    registry.register_as("CVDate", cdate_func)?;
    registry.register(Arc::new(Func1::new("CDbl", cdbl)))?;
    registry.register(Arc::new(Func1::new("CDec", cdec)))?;
    registry.register(Arc::new(Func1::new("CInt", cint)))?;
    registry.register(Arc::new(Func1::new("CLng", clng)))?;
    registry.register(Arc::new(Func1::new("CSng", csng)))?;
    registry.register(Arc::new(Func1::new("CStr", cstr)))?;
    registry.register(Arc::new(Func1::new("CVar", cvar)))?;
    registry.register_string_func(Arc::new(Func1NullIsNull::new("Hex", hex)))?;
    registry.register_string_func(Arc::new(Func1NullIsNull::new("Oct", oct)))?;
    Ok(())
}

fn cbool(ctx: &dyn EvalContext, arg: &Value) -> EvalResult<Value> {
    Ok(Value::from(arg.to_boolean(ctx)?))
}

fn cbyte(ctx: &dyn EvalContext, arg: &Value) -> EvalResult<Value> {
    let lv = arg.to_long_int(ctx)?;
    if !(0..=255).contains(&lv) {
        return Err(EvalError::range("CByte", lv, 0, 255));
    }
    Ok(Value::LongInt(lv))
}

/// Decimal cast rescaled to the currency width, half-even
fn ccur(ctx: &dyn EvalContext, arg: &Value) -> EvalResult<Value> {
    let d = arg.to_decimal(ctx)?;
    let scaled = d.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointNearestEven);
    Ok(Value::from(scaled))
}

fn cdate(ctx: &dyn EvalContext, arg: &Value) -> EvalResult<Value> {
    arg.to_date_time(ctx)
}

fn cdbl(ctx: &dyn EvalContext, arg: &Value) -> EvalResult<Value> {
    Ok(Value::Double(arg.to_double(ctx)?))
}

fn cdec(ctx: &dyn EvalContext, arg: &Value) -> EvalResult<Value> {
    Ok(Value::from(arg.to_decimal(ctx)?))
}

fn cint(ctx: &dyn EvalContext, arg: &Value) -> EvalResult<Value> {
    let lv = arg.to_long_int(ctx)?;
    if lv < i32::from(i16::MIN) || lv > i32::from(i16::MAX) {
        return Err(EvalError::range("CInt", lv, i16::MIN, i16::MAX));
    }
    Ok(Value::LongInt(lv))
}

/// Integer cast; only the native width applies
fn clng(ctx: &dyn EvalContext, arg: &Value) -> EvalResult<Value> {
    Ok(Value::LongInt(arg.to_long_int(ctx)?))
}

fn csng(ctx: &dyn EvalContext, arg: &Value) -> EvalResult<Value> {
    let dv = arg.to_double(ctx)?;
    if dv.is_finite() && dv.abs() > f64::from(f32::MAX) {
        return Err(EvalError::range("CSng", dv, f32::MIN, f32::MAX));
    }
    // round through single precision
    Ok(Value::Double(f64::from(dv as f32)))
}

fn cstr(ctx: &dyn EvalContext, arg: &Value) -> EvalResult<Value> {
    Ok(Value::Text(arg.to_text(ctx)?))
}

fn cvar(_ctx: &dyn EvalContext, arg: &Value) -> EvalResult<Value> {
    Ok(arg.clone())
}

/// Base-16 rendering at the native integer width, uppercase
fn hex(ctx: &dyn EvalContext, arg: &Value) -> EvalResult<Value> {
    if arg.as_text().is_some_and(str::is_empty) {
        return Ok(Value::Text("0".to_string()));
    }
    let lv = arg.to_long_int(ctx)?;
    Ok(Value::Text(format!("{lv:X}")))
}

/// Base-8 rendering at the native integer width
fn oct(ctx: &dyn EvalContext, arg: &Value) -> EvalResult<Value> {
    if arg.as_text().is_some_and(str::is_empty) {
        return Ok(Value::Text("0".to_string()));
    }
    let lv = arg.to_long_int(ctx)?;
    Ok(Value::Text(format!("{lv:o}")))
}
