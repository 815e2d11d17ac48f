//! Locale-scoped date/time formatting configuration
//!
//! A [`TemporalConfig`] bundles the format patterns and symbol tables used
//! to render and lexically detect date/time values during expression
//! evaluation. Databases built for other locales supply their own
//! configuration; [`us_temporal_config`] is the process-wide default.
//!
//! Patterns are chrono strftime strings. The combined date-time patterns
//! are always derived as `<date> <time>` with a single space, matching the
//! legacy application.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// US date pattern, e.g. `1/5/2024`
pub const US_DATE_FORMAT: &str = "%-m/%-d/%Y";
/// US date pattern with no year, e.g. `1/5`
pub const US_DATE_IMPLICIT_YEAR_FORMAT: &str = "%-m/%-d";
/// US 12-hour time pattern, e.g. `1:05:09 PM`
pub const US_TIME_FORMAT_12: &str = "%-I:%M:%S %p";
/// US 24-hour time pattern, e.g. `13:05:09`
pub const US_TIME_FORMAT_24: &str = "%-H:%M:%S";

/// The seven date/time formatting shapes.
///
/// `Time` and `DateTime` select the locale's default (12-hour) variants;
/// the suffixed shapes force a specific clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemporalType {
    Date,
    Time,
    DateTime,
    Time12,
    Time24,
    DateTime12,
    DateTime24,
}

impl TemporalType {
    /// Collapse a forced-clock shape to its default shape
    pub fn default_type(self) -> TemporalType {
        match self {
            Self::Date => Self::Date,
            Self::Time | Self::Time12 | Self::Time24 => Self::Time,
            Self::DateTime | Self::DateTime12 | Self::DateTime24 => Self::DateTime,
        }
    }

    /// The value type tag produced by this shape
    pub fn value_type(self) -> crate::ValueType {
        match self {
            Self::Date => crate::ValueType::Date,
            Self::Time | Self::Time12 | Self::Time24 => crate::ValueType::Time,
            Self::DateTime | Self::DateTime12 | Self::DateTime24 => crate::ValueType::DateTime,
        }
    }

    /// Whether this shape carries a date component
    pub fn includes_date(self) -> bool {
        matches!(
            self,
            Self::Date | Self::DateTime | Self::DateTime12 | Self::DateTime24
        )
    }

    /// Whether this shape carries a time component
    pub fn includes_time(self) -> bool {
        self != Self::Date
    }

    /// Whether this shape is time-only
    pub fn is_time_only(self) -> bool {
        matches!(self, Self::Time | Self::Time12 | Self::Time24)
    }
}

/// Month/weekday names and day-period markers for one locale.
///
/// Used both for formatting and for lexical date detection (a string
/// containing a month name may be a date even without digits in the
/// expected positions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFormatSymbols {
    pub months: Vec<String>,
    pub short_months: Vec<String>,
    pub weekdays: Vec<String>,
    pub short_weekdays: Vec<String>,
    pub am_pm: [String; 2],
}

impl DateFormatSymbols {
    /// English symbols (the US locale)
    pub fn english() -> Self {
        fn strs(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| (*s).to_string()).collect()
        }
        Self {
            months: strs(&[
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            short_months: strs(&[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                "Dec",
            ]),
            weekdays: strs(&[
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]),
            short_weekdays: strs(&["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
            am_pm: ["AM".to_string(), "PM".to_string()],
        }
    }

    /// Whether the text contains any month or weekday name, ignoring case
    pub fn contains_name(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.months
            .iter()
            .chain(self.short_months.iter())
            .chain(self.weekdays.iter())
            .chain(self.short_weekdays.iter())
            .any(|name| lower.contains(&name.to_lowercase()))
    }

    /// Rewrite this locale's names in `text` to the fixed English names
    /// that chrono's `%p`/`%b`/`%B`/`%a`/`%A` tokens understand. Used on
    /// input text before lexical date/time parsing.
    pub fn canonicalize(&self, text: &str) -> String {
        replace_names(text, &self.name_pairs(false))
    }

    /// Rewrite the fixed English names chrono renders into this locale's
    /// names. Used on formatter output.
    pub fn localize(&self, text: &str) -> String {
        replace_names(text, &self.name_pairs(true))
    }

    /// Name substitution table against the English reference, longest
    /// search name first so a full month never loses to its abbreviation.
    fn name_pairs(&self, from_english: bool) -> Vec<(&str, &str)> {
        let english = english_symbols();
        let mut pairs: Vec<(&str, &str)> = self
            .months
            .iter()
            .zip(english.months.iter())
            .chain(self.weekdays.iter().zip(english.weekdays.iter()))
            .chain(self.short_months.iter().zip(english.short_months.iter()))
            .chain(self.short_weekdays.iter().zip(english.short_weekdays.iter()))
            .chain(self.am_pm.iter().zip(english.am_pm.iter()))
            .map(|(locale, english)| {
                if from_english {
                    (english.as_str(), locale.as_str())
                } else {
                    (locale.as_str(), english.as_str())
                }
            })
            .collect();
        pairs.sort_by_key(|(from, _)| std::cmp::Reverse(from.len()));
        pairs
    }
}

/// Single left-to-right pass replacing whole name occurrences, ASCII
/// case-insensitive. A single pass keeps replacement output from being
/// matched again (English `May` -> `Mayo` must not then match `may`).
fn replace_names(text: &str, pairs: &[(&str, &str)]) -> String {
    let lower = text.to_ascii_lowercase();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < text.len() {
        let matched = pairs.iter().find(|(from, _)| {
            !from.is_empty() && lower[i..].starts_with(&from.to_ascii_lowercase())
        });
        if let Some((from, to)) = matched {
            out.push_str(to);
            i += from.len();
        } else {
            let ch_len = text[i..].chars().next().map_or(1, char::len_utf8);
            out.push_str(&text[i..i + ch_len]);
            i += ch_len;
        }
    }
    out
}

static ENGLISH_SYMBOLS: Lazy<DateFormatSymbols> = Lazy::new(DateFormatSymbols::english);

fn english_symbols() -> &'static DateFormatSymbols {
    &ENGLISH_SYMBOLS
}

/// Immutable per-locale date/time formatting options.
///
/// Constructed once per locale and shared read-only; see
/// [`us_temporal_config`] for the default instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalConfig {
    date_format: String,
    date_implicit_year_format: String,
    time_format_12: String,
    time_format_24: String,
    date_separator: char,
    time_separator: char,
    date_time_format_12: String,
    date_time_format_24: String,
    symbols: DateFormatSymbols,
}

impl TemporalConfig {
    /// Create a new configuration.
    ///
    /// The combined date-time patterns are derived by joining the date
    /// pattern and each time pattern with a single space. The date and
    /// time separators identify the components of a date/time string and
    /// should differ from each other.
    pub fn new(
        date_format: impl Into<String>,
        date_implicit_year_format: impl Into<String>,
        time_format_12: impl Into<String>,
        time_format_24: impl Into<String>,
        date_separator: char,
        time_separator: char,
        symbols: DateFormatSymbols,
    ) -> Self {
        let date_format = date_format.into();
        let time_format_12 = time_format_12.into();
        let time_format_24 = time_format_24.into();
        let date_time_format_12 = join_date_time(&date_format, &time_format_12);
        let date_time_format_24 = join_date_time(&date_format, &time_format_24);
        Self {
            date_format,
            date_implicit_year_format: date_implicit_year_format.into(),
            time_format_12,
            time_format_24,
            date_separator,
            time_separator,
            date_time_format_12,
            date_time_format_24,
            symbols,
        }
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn time_format_12(&self) -> &str {
        &self.time_format_12
    }

    pub fn time_format_24(&self) -> &str {
        &self.time_format_24
    }

    pub fn date_time_format_12(&self) -> &str {
        &self.date_time_format_12
    }

    pub fn date_time_format_24(&self) -> &str {
        &self.date_time_format_24
    }

    /// The default date pattern
    pub fn default_date_format(&self) -> &str {
        self.date_format()
    }

    /// The default time pattern (12-hour)
    pub fn default_time_format(&self) -> &str {
        self.time_format_12()
    }

    /// The default combined pattern (12-hour)
    pub fn default_date_time_format(&self) -> &str {
        self.date_time_format_12()
    }

    pub fn date_separator(&self) -> char {
        self.date_separator
    }

    pub fn time_separator(&self) -> char {
        self.time_separator
    }

    /// Resolve the pattern for any of the seven shapes
    pub fn format_for(&self, shape: TemporalType) -> &str {
        match shape {
            TemporalType::Date => self.default_date_format(),
            TemporalType::Time => self.default_time_format(),
            TemporalType::DateTime => self.default_date_time_format(),
            TemporalType::Time12 => self.time_format_12(),
            TemporalType::Time24 => self.time_format_24(),
            TemporalType::DateTime12 => self.date_time_format_12(),
            TemporalType::DateTime24 => self.date_time_format_24(),
        }
    }

    /// Resolve the implicit-year pattern for a date-bearing shape.
    ///
    /// Returns `None` for the time-only shapes, which have no date to
    /// render without a year.
    pub fn implicit_year_format_for(&self, shape: TemporalType) -> Option<String> {
        match shape {
            TemporalType::Date => Some(self.date_implicit_year_format.clone()),
            TemporalType::DateTime => Some(join_date_time(
                &self.date_implicit_year_format,
                self.default_time_format(),
            )),
            TemporalType::DateTime12 => Some(join_date_time(
                &self.date_implicit_year_format,
                self.time_format_12(),
            )),
            TemporalType::DateTime24 => Some(join_date_time(
                &self.date_implicit_year_format,
                self.time_format_24(),
            )),
            TemporalType::Time | TemporalType::Time12 | TemporalType::Time24 => None,
        }
    }

    pub fn symbols(&self) -> &DateFormatSymbols {
        &self.symbols
    }
}

fn join_date_time(date_format: &str, time_format: &str) -> String {
    format!("{date_format} {time_format}")
}

static US_TEMPORAL_CONFIG: Lazy<TemporalConfig> = Lazy::new(|| {
    TemporalConfig::new(
        US_DATE_FORMAT,
        US_DATE_IMPLICIT_YEAR_FORMAT,
        US_TIME_FORMAT_12,
        US_TIME_FORMAT_24,
        '/',
        ':',
        DateFormatSymbols::english(),
    )
});

/// The process-wide US locale configuration
pub fn us_temporal_config() -> &'static TemporalConfig {
    &US_TEMPORAL_CONFIG
}
