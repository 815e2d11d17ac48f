//! Evaluation context for expression execution
//!
//! The engine never owns a context: the host database supplies one per
//! evaluation, carrying the calendar, the locale's temporal configuration
//! and an optional expected-result type hint. [`EvaluationContext`] is a
//! ready-made implementation over the US defaults for embedders and tests.

use chrono::NaiveDateTime;
use jetdb_types::{TemporalConfig, ValueType, us_temporal_config};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Locale-scoped collaborators needed for coercion: calendar, temporal
/// configuration and lexical decimal parsing.
pub trait LocaleContext {
    /// The locale's date/time formatting configuration
    fn temporal_config(&self) -> &TemporalConfig;

    /// The current calendar instant; supplies the implicit year when
    /// parsing dates rendered without one
    fn now(&self) -> NaiveDateTime;

    /// The locale's decimal separator
    fn decimal_separator(&self) -> char {
        '.'
    }

    /// Lexically parse a decimal number, honoring the locale separator.
    ///
    /// Returns `None` when the text is not purely numeric; callers decide
    /// whether that is an error or merely a failed detection probe.
    fn parse_decimal(&self, text: &str) -> Option<Decimal> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let sep = self.decimal_separator();
        let canonical = if sep == '.' {
            trimmed.to_string()
        } else if trimmed.contains('.') {
            // the canonical separator is some other locale's grouping char
            return None;
        } else {
            trimmed.replace(sep, ".")
        };
        Decimal::from_str(&canonical)
            .ok()
            .or_else(|| Decimal::from_scientific(&canonical).ok())
    }
}

/// Full evaluation context: locale collaborators plus the expected result
/// type of the enclosing expression, when the host knows it.
pub trait EvalContext: LocaleContext {
    /// Expected type of the top-level result, used by functions such as
    /// `Nz` to pick a default when none is given
    fn result_type(&self) -> Option<ValueType>;
}

/// Default evaluation context over the US temporal configuration.
pub struct EvaluationContext {
    temporal_config: TemporalConfig,
    result_type: Option<ValueType>,
}

impl Default for EvaluationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationContext {
    /// Create a context with the US configuration and no result hint
    pub fn new() -> Self {
        Self {
            temporal_config: us_temporal_config().clone(),
            result_type: None,
        }
    }

    /// Replace the temporal configuration
    pub fn with_temporal_config(mut self, config: TemporalConfig) -> Self {
        self.temporal_config = config;
        self
    }

    /// Set the expected result type hint
    pub fn with_result_type(mut self, result_type: ValueType) -> Self {
        self.result_type = Some(result_type);
        self
    }
}

impl LocaleContext for EvaluationContext {
    fn temporal_config(&self) -> &TemporalConfig {
        &self.temporal_config
    }

    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

impl EvalContext for EvaluationContext {
    fn result_type(&self) -> Option<ValueType> {
        self.result_type
    }
}
