//! Serialized date bridge and lexical date/time handling
//!
//! The legacy storage layer encodes every temporal value as a floating
//! point day count relative to the 1899-12-30 epoch: the integral part is
//! days, the fraction is time of day. The functions here are the only
//! bridge between that encoding and the temporal [`Value`] kinds, plus the
//! locale-configured parsing and formatting used by string coercion.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use jetdb_types::{TemporalConfig, TemporalType, Value, ValueType};
use once_cell::sync::Lazy;

use crate::context::LocaleContext;
use crate::error::{EvalError, EvalResult};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Day-count zero of the on-disk date encoding
static DATE_EPOCH: Lazy<NaiveDateTime> = Lazy::new(|| {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .expect("fixed epoch date")
        .and_time(NaiveTime::MIN)
});

/// Convert a serialized day count into a temporal value of the given kind.
///
/// Conversion is millisecond-rounded straight multiplication; negative day
/// counts fall before the epoch. Requesting a non-temporal kind is a
/// contract violation, not a data error.
pub fn from_serialized_date(value_type: ValueType, day_count: f64) -> EvalResult<Value> {
    let instant = instant_from_day_count(day_count)?;
    match value_type {
        ValueType::Date => Ok(Value::Date(instant.date())),
        ValueType::Time => Ok(Value::Time(instant.time())),
        ValueType::DateTime => Ok(Value::DateTime(instant)),
        other => Err(EvalError::unsupported_temporal(other)),
    }
}

/// Convert a serialized day count into a temporal value whose kind is
/// inferred from the number itself: whole numbers are dates, pure
/// fractions are times, anything else is a combined date-time.
pub fn number_to_temporal(day_count: f64) -> EvalResult<Value> {
    let value_type = if day_count.fract() == 0.0 {
        ValueType::Date
    } else if day_count.trunc() == 0.0 {
        ValueType::Time
    } else {
        ValueType::DateTime
    };
    from_serialized_date(value_type, day_count)
}

/// The serialized day count of a temporal value; `None` for other kinds
pub fn to_date_double(value: &Value) -> Option<f64> {
    match value {
        Value::Date(d) => {
            let millis = d.and_time(NaiveTime::MIN).signed_duration_since(*DATE_EPOCH);
            Some(millis.num_milliseconds() as f64 / MILLIS_PER_DAY)
        }
        Value::Time(t) => {
            let millis = t.signed_duration_since(NaiveTime::MIN);
            Some(millis.num_milliseconds() as f64 / MILLIS_PER_DAY)
        }
        Value::DateTime(dt) => {
            let millis = dt.signed_duration_since(*DATE_EPOCH);
            Some(millis.num_milliseconds() as f64 / MILLIS_PER_DAY)
        }
        _ => None,
    }
}

fn instant_from_day_count(day_count: f64) -> EvalResult<NaiveDateTime> {
    if !day_count.is_finite() {
        return Err(EvalError::conversion(
            "Double",
            "DateTime",
            day_count.to_string(),
        ));
    }
    let millis = (day_count * MILLIS_PER_DAY).round() as i64;
    DATE_EPOCH
        .checked_add_signed(TimeDelta::milliseconds(millis))
        .ok_or_else(|| EvalError::conversion("Double", "DateTime", day_count.to_string()))
}

/// Resolve the default pattern for a temporal value kind.
///
/// Non-temporal kinds have no pattern; asking for one signals an internal
/// contract violation by the caller.
pub fn date_format_for_type(
    config: &TemporalConfig,
    value_type: ValueType,
) -> EvalResult<&str> {
    match value_type {
        ValueType::Date => Ok(config.default_date_format()),
        ValueType::Time => Ok(config.default_time_format()),
        ValueType::DateTime => Ok(config.default_date_time_format()),
        other => Err(EvalError::unsupported_temporal(other)),
    }
}

/// Render a temporal value with the pattern configured for its kind.
///
/// chrono renders name-bearing tokens (`%p`, `%b`, ...) with fixed
/// English names; the configured symbols are substituted afterwards.
pub fn format_temporal(value: &Value, ctx: &dyn LocaleContext) -> EvalResult<String> {
    let config = ctx.temporal_config();
    let pattern = date_format_for_type(config, value.value_type())?;
    let rendered = match value {
        Value::Date(d) => d.format(pattern).to_string(),
        Value::Time(t) => t.format(pattern).to_string(),
        Value::DateTime(dt) => dt.format(pattern).to_string(),
        other => return Err(EvalError::unsupported_temporal(other.value_type())),
    };
    Ok(config.symbols().localize(&rendered))
}

/// Lexically parse a string into a temporal value.
///
/// The string is classified by the configured separator characters and
/// symbol names: a date separator or a month/weekday name selects the
/// date patterns, a time separator the time patterns, both select the
/// combined patterns. 12-hour patterns are tried before 24-hour ones,
/// and date-bearing shapes fall back to the implicit-year pattern with
/// the year taken from the context calendar. A string matching none of
/// the patterns fails with a conversion error.
pub fn parse_temporal(text: &str, ctx: &dyn LocaleContext) -> EvalResult<Value> {
    let config = ctx.temporal_config();
    let trimmed = text.trim();
    // chrono only parses the English names; rewrite the locale's names
    // before any pattern is tried
    let canonical = config.symbols().canonicalize(trimmed);
    let has_date = canonical.contains(config.date_separator())
        || config.symbols().contains_name(trimmed);
    let has_time = canonical.contains(config.time_separator());
    let implicit_year = ctx.now().year();

    let parsed = match (has_date, has_time) {
        (true, false) => parse_date(&canonical, config, implicit_year).map(Value::Date),
        (false, true) => parse_time(&canonical, config).map(Value::Time),
        (true, true) => parse_date_time(&canonical, config, implicit_year).map(Value::DateTime),
        (false, false) => None,
    };
    parsed.ok_or_else(|| EvalError::conversion("Text", "DateTime", trimmed))
}

fn parse_date(text: &str, config: &TemporalConfig, implicit_year: i32) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, config.date_format())
        .ok()
        .or_else(|| {
            // no year in the text; append the calendar's current year so
            // the full pattern machinery still applies
            let sep = config.date_separator();
            let pattern = config.implicit_year_format_for(TemporalType::Date)?;
            NaiveDate::parse_from_str(
                &format!("{text}{sep}{implicit_year}"),
                &format!("{pattern}{sep}%Y"),
            )
            .ok()
        })
}

fn parse_time(text: &str, config: &TemporalConfig) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(text, config.time_format_12())
        .ok()
        .or_else(|| NaiveTime::parse_from_str(text, config.time_format_24()).ok())
}

fn parse_date_time(
    text: &str,
    config: &TemporalConfig,
    implicit_year: i32,
) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, config.date_time_format_12())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(text, config.date_time_format_24()).ok())
        .or_else(|| {
            let (date_part, time_part) = text.split_once(' ')?;
            let date = parse_date(date_part.trim(), config, implicit_year)?;
            let time = parse_time(time_part.trim(), config)?;
            Some(date.and_time(time))
        })
}
