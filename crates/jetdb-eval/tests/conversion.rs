//! Cast Function Tests
//!
//! Tests for: CBool, CByte, CCur, CDate/CVDate, CDbl, CDec, CInt, CLng,
//! CSng, CStr, CVar, Hex, Oct (and the Hex$/Oct$ string call forms)
//!
//! Range checks are per cast target and always explicit: out-of-range
//! never wraps or truncates silently.

use chrono::{NaiveDate, NaiveTime};
use jetdb_eval::{EvalError, EvalResult, EvaluationContext, Function, default_registry};
use jetdb_types::Value;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use std::str::FromStr;

// ============================================================================
// Test Helpers
// ============================================================================

fn call(name: &str, args: &[Value]) -> EvalResult<Value> {
    let ctx = EvaluationContext::new();
    let func = default_registry()
        .lookup(name)
        .unwrap_or_else(|| panic!("missing builtin {name}"));
    func.eval(&ctx, args)
}

fn call1(name: &str, arg: Value) -> EvalResult<Value> {
    call(name, &[arg])
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ============================================================================
// CBool
// ============================================================================

#[test]
fn test_cbool_zero_and_nonzero() {
    assert_eq!(call1("CBool", Value::LongInt(0)).unwrap(), Value::FALSE);
    assert_eq!(call1("CBool", Value::LongInt(1)).unwrap(), Value::TRUE);
    assert_eq!(call1("CBool", Value::LongInt(-5)).unwrap(), Value::TRUE);
    assert_eq!(call1("CBool", Value::Double(0.25)).unwrap(), Value::TRUE);
    assert_eq!(call1("CBool", Value::from(dec("0.00"))).unwrap(), Value::FALSE);
}

#[test]
fn test_cbool_string_goes_through_numeric_parse() {
    assert_eq!(call1("CBool", Value::from("0")).unwrap(), Value::FALSE);
    assert_eq!(call1("CBool", Value::from("2.5")).unwrap(), Value::TRUE);
    assert!(matches!(
        call1("CBool", Value::from("yes")).unwrap_err(),
        EvalError::Conversion { .. }
    ));
}

#[test]
fn test_cbool_null_is_an_error() {
    assert!(matches!(
        call1("CBool", Value::Null).unwrap_err(),
        EvalError::Conversion { .. }
    ));
}

// ============================================================================
// Integer casts with range checks
// ============================================================================

#[test]
fn test_cbyte_range() {
    assert_eq!(call1("CByte", Value::LongInt(0)).unwrap(), Value::LongInt(0));
    assert_eq!(call1("CByte", Value::LongInt(255)).unwrap(), Value::LongInt(255));
    assert!(matches!(
        call1("CByte", Value::LongInt(256)).unwrap_err(),
        EvalError::Range { .. }
    ));
    assert!(matches!(
        call1("CByte", Value::LongInt(-1)).unwrap_err(),
        EvalError::Range { .. }
    ));
}

#[test]
fn test_cbyte_rounds_half_even() {
    assert_eq!(call1("CByte", Value::Double(12.5)).unwrap(), Value::LongInt(12));
    assert_eq!(call1("CByte", Value::Double(13.5)).unwrap(), Value::LongInt(14));
}

#[test]
fn test_cint_sixteen_bit_range() {
    assert_eq!(
        call1("CInt", Value::LongInt(32767)).unwrap(),
        Value::LongInt(32767)
    );
    assert_eq!(
        call1("CInt", Value::LongInt(-32768)).unwrap(),
        Value::LongInt(-32768)
    );
    assert!(matches!(
        call1("CInt", Value::LongInt(32768)).unwrap_err(),
        EvalError::Range { .. }
    ));
    assert!(matches!(
        call1("CInt", Value::LongInt(-32769)).unwrap_err(),
        EvalError::Range { .. }
    ));
}

#[test]
fn test_clng_native_width_only() {
    assert_eq!(
        call1("CLng", Value::LongInt(i32::MAX)).unwrap(),
        Value::LongInt(i32::MAX)
    );
    assert_eq!(
        call1("CLng", Value::from("123456")).unwrap(),
        Value::LongInt(123456)
    );
    assert!(matches!(
        call1("CLng", Value::Double(3e9)).unwrap_err(),
        EvalError::Range { .. }
    ));
}

#[test]
fn test_integer_casts_reject_nan() {
    for name in ["CByte", "CInt", "CLng"] {
        let err = call1(name, Value::Double(f64::NAN)).unwrap_err();
        assert!(
            matches!(err, EvalError::Conversion { .. }),
            "{name}(NaN) must not yield zero"
        );
    }
}

#[test]
fn test_csng_single_precision_range() {
    assert_eq!(call1("CSng", Value::Double(1.5)).unwrap(), Value::Double(1.5));
    assert!(matches!(
        call1("CSng", Value::Double(1e39)).unwrap_err(),
        EvalError::Range { .. }
    ));
    assert!(matches!(
        call1("CSng", Value::Double(-1e39)).unwrap_err(),
        EvalError::Range { .. }
    ));
}

#[test]
fn test_csng_rounds_through_single_precision() {
    let result = call1("CSng", Value::Double(1.1)).unwrap();
    assert_eq!(result, Value::Double(f64::from(1.1f32)));
}

// ============================================================================
// Decimal casts
// ============================================================================

#[test]
fn test_ccur_rescales_to_four_digits() {
    assert_eq!(
        call1("CCur", Value::from(dec("1.23456"))).unwrap(),
        Value::from(dec("1.2346"))
    );
    assert_eq!(
        call1("CCur", Value::from("2.5")).unwrap(),
        Value::from(dec("2.5"))
    );
}

#[test]
fn test_ccur_half_even_rounding() {
    assert_eq!(
        call1("CCur", Value::from(dec("1.00005"))).unwrap(),
        Value::from(dec("1"))
    );
    assert_eq!(
        call1("CCur", Value::from(dec("1.00015"))).unwrap(),
        Value::from(dec("1.0002"))
    );
}

#[test]
fn test_cdec_normalizes() {
    match call1("CDec", Value::from("5.000")).unwrap() {
        Value::Decimal(d) => {
            assert_eq!(d, dec("5"));
            assert_eq!(d.scale(), 0);
        }
        other => panic!("expected Decimal, got {other:?}"),
    }
}

// ============================================================================
// CDbl / CStr / CVar
// ============================================================================

#[test]
fn test_cdbl() {
    assert_eq!(call1("CDbl", Value::from("1.5")).unwrap(), Value::Double(1.5));
    assert_eq!(call1("CDbl", Value::LongInt(4)).unwrap(), Value::Double(4.0));
    assert!(call1("CDbl", Value::Null).is_err());
}

#[test]
fn test_cstr() {
    assert_eq!(call1("CStr", Value::LongInt(123)).unwrap(), Value::from("123"));
    assert_eq!(call1("CStr", Value::Double(3.0)).unwrap(), Value::from("3"));
    assert_eq!(
        call1("CStr", Value::from(dec("1.50"))).unwrap(),
        Value::from("1.5")
    );
    assert!(call1("CStr", Value::Null).is_err());
}

#[test]
fn test_cvar_passes_through() {
    assert_eq!(call1("CVar", Value::Null).unwrap(), Value::Null);
    assert_eq!(
        call1("CVar", Value::from("keep")).unwrap(),
        Value::from("keep")
    );
}

// ============================================================================
// CDate / CVDate
// ============================================================================

#[test]
fn test_cdate_from_string() {
    let result = call1("CDate", Value::from("1/5/2024")).unwrap();
    assert_eq!(
        result,
        Value::Date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
    );
}

#[test]
fn test_cdate_from_serialized_number() {
    // day 2.5 of the legacy encoding: 1900-01-01 noon
    let result = call1("CDate", Value::Double(2.5)).unwrap();
    assert_eq!(
        result,
        Value::DateTime(
            NaiveDate::from_ymd_opt(1900, 1, 1)
                .unwrap()
                .and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap())
        )
    );
}

#[test]
fn test_cvdate_is_an_alias() {
    let a = call1("CDate", Value::from("1/5/2024")).unwrap();
    let b = call1("CVDate", Value::from("1/5/2024")).unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// Hex / Oct
// ============================================================================

#[test]
fn test_hex_renders_uppercase() {
    assert_eq!(call1("Hex", Value::LongInt(255)).unwrap(), Value::from("FF"));
    assert_eq!(call1("Hex", Value::LongInt(0)).unwrap(), Value::from("0"));
    assert_eq!(call1("Hex", Value::from("255")).unwrap(), Value::from("FF"));
}

#[test]
fn test_hex_negative_uses_full_native_width() {
    assert_eq!(
        call1("Hex", Value::LongInt(-1)).unwrap(),
        Value::from("FFFFFFFF")
    );
}

#[test]
fn test_hex_empty_string_is_zero() {
    assert_eq!(call1("Hex", Value::from("")).unwrap(), Value::from("0"));
}

#[test]
fn test_hex_null_is_null() {
    assert_eq!(call1("Hex", Value::Null).unwrap(), Value::Null);
}

#[test]
fn test_oct() {
    assert_eq!(call1("Oct", Value::LongInt(8)).unwrap(), Value::from("10"));
    assert_eq!(call1("Oct", Value::from("")).unwrap(), Value::from("0"));
    assert_eq!(call1("Oct", Value::Null).unwrap(), Value::Null);
    assert_eq!(
        call1("Oct", Value::LongInt(-1)).unwrap(),
        Value::from("37777777777")
    );
}

#[test]
fn test_hex_string_form_rejects_null() {
    assert!(call1("Hex$", Value::Null).is_err());
    assert_eq!(call1("Hex$", Value::LongInt(255)).unwrap(), Value::from("FF"));
    assert!(call1("Oct$", Value::Null).is_err());
}

// ============================================================================
// Cast fixed points
// ============================================================================

#[test]
fn test_in_range_casts_are_stable_fixed_points() {
    // casting an already in-range value twice equals casting it once
    for (name, value) in [
        ("CByte", Value::LongInt(200)),
        ("CInt", Value::LongInt(-300)),
        ("CLng", Value::LongInt(1_000_000)),
        ("CSng", Value::Double(0.25)),
        ("CCur", Value::from(dec("9.1234"))),
        ("CBool", Value::LongInt(7)),
        ("CDbl", Value::Double(6.5)),
        ("CDec", Value::from(dec("3.14"))),
    ] {
        let once = call1(name, value).unwrap();
        let twice = call1(name, once.clone()).unwrap();
        assert_eq!(once, twice, "{name} is not a fixed point");
    }
}
