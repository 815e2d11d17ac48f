//! Conditional Function Tests
//!
//! Tests for: IIf, Nz, Choose, Switch
//!
//! These functions declare their own null policies: IIf treats a null
//! condition as false, Choose yields null for an out-of-range index,
//! Switch yields null when no condition matches.

use jetdb_eval::{EvalError, EvalResult, EvaluationContext, Function, default_registry};
use jetdb_types::{Value, ValueType};
use pretty_assertions::assert_eq;

// ============================================================================
// Test Helpers
// ============================================================================

fn call(name: &str, args: &[Value]) -> EvalResult<Value> {
    let ctx = EvaluationContext::new();
    call_with(&ctx, name, args)
}

fn call_with(ctx: &EvaluationContext, name: &str, args: &[Value]) -> EvalResult<Value> {
    let func = default_registry()
        .lookup(name)
        .unwrap_or_else(|| panic!("missing builtin {name}"));
    func.eval(ctx, args)
}

fn text(s: &str) -> Value {
    Value::from(s)
}

// ============================================================================
// IIf
// ============================================================================

#[test]
fn test_iif_true_selects_second_argument() {
    let result = call("IIf", &[Value::TRUE, text("yes"), text("no")]).unwrap();
    assert_eq!(result, text("yes"));
}

#[test]
fn test_iif_false_selects_third_argument() {
    let result = call("IIf", &[Value::FALSE, text("yes"), text("no")]).unwrap();
    assert_eq!(result, text("no"));
}

#[test]
fn test_iif_null_condition_is_false() {
    let result = call("IIf", &[Value::Null, text("yes"), text("no")]).unwrap();
    assert_eq!(result, text("no"));
}

#[test]
fn test_iif_nonzero_numeric_condition_is_true() {
    let result = call("IIf", &[Value::LongInt(42), text("yes"), text("no")]).unwrap();
    assert_eq!(result, text("yes"));
    let result = call("IIf", &[Value::Double(0.0), text("yes"), text("no")]).unwrap();
    assert_eq!(result, text("no"));
}

#[test]
fn test_iif_wrong_arity() {
    let err = call("IIf", &[Value::TRUE, text("yes")]).unwrap_err();
    assert!(matches!(err, EvalError::Arity { .. }));
    let err = call("IIf", &[Value::TRUE, text("a"), text("b"), text("c")]).unwrap_err();
    assert!(matches!(err, EvalError::Arity { .. }));
}

#[test]
fn test_iif_branches_preserve_value_identity() {
    let a = Value::Decimal("1.25".parse().unwrap());
    let b = Value::LongInt(9);
    assert_eq!(call("IIf", &[Value::TRUE, a.clone(), b.clone()]).unwrap(), a);
    assert_eq!(call("IIf", &[Value::FALSE, a, b.clone()]).unwrap(), b);
}

// ============================================================================
// Nz
// ============================================================================

#[test]
fn test_nz_passes_non_null_through() {
    let result = call("Nz", &[Value::LongInt(7)]).unwrap();
    assert_eq!(result, Value::LongInt(7));
}

#[test]
fn test_nz_null_with_explicit_default() {
    let result = call("Nz", &[Value::Null, text("fallback")]).unwrap();
    assert_eq!(result, text("fallback"));
}

#[test]
fn test_nz_null_without_default_uses_result_type_hint() {
    // no hint: empty string
    assert_eq!(call("Nz", &[Value::Null]).unwrap(), Value::empty_text());

    // string hint: empty string
    let ctx = EvaluationContext::new().with_result_type(ValueType::Text);
    assert_eq!(call_with(&ctx, "Nz", &[Value::Null]).unwrap(), Value::empty_text());

    // numeric hint: zero
    let ctx = EvaluationContext::new().with_result_type(ValueType::LongInt);
    assert_eq!(call_with(&ctx, "Nz", &[Value::Null]).unwrap(), Value::ZERO);
}

#[test]
fn test_nz_wrong_arity() {
    let err = call("Nz", &[]).unwrap_err();
    assert!(matches!(err, EvalError::Arity { .. }));
    let err = call("Nz", &[Value::Null, Value::ZERO, Value::ONE]).unwrap_err();
    assert!(matches!(err, EvalError::Arity { .. }));
}

// ============================================================================
// Choose
// ============================================================================

#[test]
fn test_choose_one_based_index() {
    let choices = [Value::LongInt(1), text("a"), text("b"), text("c")];
    assert_eq!(call("Choose", &choices).unwrap(), text("a"));

    let choices = [Value::LongInt(3), text("a"), text("b"), text("c")];
    assert_eq!(call("Choose", &choices).unwrap(), text("c"));
}

#[test]
fn test_choose_out_of_range_is_null() {
    let choices = [Value::LongInt(0), text("a"), text("b"), text("c")];
    assert_eq!(call("Choose", &choices).unwrap(), Value::Null);

    let choices = [Value::LongInt(4), text("a"), text("b"), text("c")];
    assert_eq!(call("Choose", &choices).unwrap(), Value::Null);

    let choices = [Value::LongInt(-2), text("a"), text("b"), text("c")];
    assert_eq!(call("Choose", &choices).unwrap(), Value::Null);
}

#[test]
fn test_choose_index_coerces_from_string() {
    let choices = [text("2"), text("a"), text("b")];
    assert_eq!(call("Choose", &choices).unwrap(), text("b"));
}

#[test]
fn test_choose_null_index_is_an_error() {
    let err = call("Choose", &[Value::Null, text("a")]).unwrap_err();
    assert!(matches!(err, EvalError::Conversion { .. }));
}

// ============================================================================
// Switch
// ============================================================================

#[test]
fn test_switch_returns_first_true_pair() {
    let args = [Value::FALSE, text("a"), Value::TRUE, text("b")];
    assert_eq!(call("Switch", &args).unwrap(), text("b"));

    let args = [Value::TRUE, text("a"), Value::TRUE, text("b")];
    assert_eq!(call("Switch", &args).unwrap(), text("a"));
}

#[test]
fn test_switch_no_match_is_null() {
    let args = [Value::FALSE, text("a"), Value::FALSE, text("b")];
    assert_eq!(call("Switch", &args).unwrap(), Value::Null);
}

#[test]
fn test_switch_odd_argument_count_is_a_call_error() {
    let args = [Value::TRUE, text("a"), Value::FALSE];
    let err = call("Switch", &args).unwrap_err();
    assert!(matches!(err, EvalError::InvalidFunctionCall { .. }));
}

#[test]
fn test_switch_requires_at_least_one_argument() {
    let err = call("Switch", &[]).unwrap_err();
    assert!(matches!(err, EvalError::Arity { .. }));
}
