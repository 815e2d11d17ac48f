//! Conditional functions
//!
//! Implements: IIf, Nz, Choose, Switch
//!
//! Arguments arrive already evaluated, so unlike the interactive legacy
//! application there is no lazy branch evaluation here; selection picks
//! among the evaluated values.

use jetdb_types::{Value, ValueType};
use std::sync::Arc;

use crate::coerce::CoerceValue;
use crate::context::EvalContext;
use crate::error::{EvalError, EvalResult};
use crate::registry::{Func3, FuncVar, FunctionRegistry};

pub(crate) fn register(registry: &mut FunctionRegistry) -> EvalResult<()> {
    registry.register(Arc::new(Func3::new("IIf", iif)))?;
    registry.register(Arc::new(FuncVar::new("Nz", 1, Some(2), nz)))?;
    registry.register(Arc::new(FuncVar::new("Choose", 1, None, choose)))?;
    registry.register(Arc::new(FuncVar::new("Switch", 1, None, switch)))?;
    Ok(())
}

/// Returns the second argument if the first is non-null and true, else
/// the third. A null condition selects the false branch.
fn iif(ctx: &dyn EvalContext, cond: &Value, if_true: &Value, if_false: &Value) -> EvalResult<Value> {
    if !cond.is_null() && cond.to_boolean(ctx)? {
        Ok(if_true.clone())
    } else {
        Ok(if_false.clone())
    }
}

/// Returns the first argument unless it is null, then the explicit
/// default, then an empty string or zero depending on the expected
/// result type.
fn nz(ctx: &dyn EvalContext, args: &[Value]) -> EvalResult<Value> {
    let first = &args[0];
    if !first.is_null() {
        return Ok(first.clone());
    }
    if args.len() > 1 {
        return Ok(args[1].clone());
    }
    match ctx.result_type() {
        None | Some(ValueType::Text) => Ok(Value::empty_text()),
        Some(_) => Ok(Value::ZERO),
    }
}

/// 1-based selection among the trailing arguments; an index outside the
/// choice list yields null.
fn choose(ctx: &dyn EvalContext, args: &[Value]) -> EvalResult<Value> {
    let idx = args[0].to_long_int(ctx)?;
    if idx < 1 || (idx as usize) >= args.len() {
        return Ok(Value::Null);
    }
    Ok(args[idx as usize].clone())
}

/// Scans (condition, value) pairs left to right and returns the value of
/// the first true condition, else null. An odd argument count is a call
/// error.
fn switch(ctx: &dyn EvalContext, args: &[Value]) -> EvalResult<Value> {
    if args.len() % 2 != 0 {
        return Err(EvalError::invalid_call("Switch", "odd number of parameters"));
    }
    for pair in args.chunks_exact(2) {
        if pair[0].to_boolean(ctx)? {
            return Ok(pair[1].clone());
        }
    }
    Ok(Value::Null)
}
