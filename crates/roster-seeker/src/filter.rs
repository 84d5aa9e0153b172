//! Field filters.
//!
//! A [`FilterValue`] is the value a list screen's filter control holds for
//! one field. The [`FilterValue::All`] sentinel means "no constraint".

use std::cmp::Ordering;
use std::fmt;

use crate::value::{Number, Timestamp, Value};

/// Accepted value for one filter field.
///
/// # Example
///
/// ```
/// use roster_seeker::{FilterValue, Value};
///
/// let status = FilterValue::parse("active");
/// assert!(status.matches(&Value::String("active")));
/// assert!(!status.matches(&Value::String("closed")));
///
/// assert!(FilterValue::parse("all").matches(&Value::String("closed")));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterValue {
    /// No constraint.
    #[default]
    All,
    /// Exact text (also matches a list field holding this element).
    Text(String),
    /// Exact number.
    Number(Number),
    /// Exact boolean.
    Bool(bool),
}

impl FilterValue {
    /// The text a select control uses for "no constraint".
    pub const ALL: &'static str = "all";

    /// Reads a filter value from control text.
    ///
    /// `"all"` (any case) and blank text mean [`FilterValue::All`]; anything
    /// else is kept as text and compared against the field's own type when
    /// matching.
    pub fn parse(text: &str) -> FilterValue {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(Self::ALL) {
            FilterValue::All
        } else {
            FilterValue::Text(trimmed.to_string())
        }
    }

    /// Returns `true` for the "no constraint" sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }

    /// Equality test against a field value.
    ///
    /// Text compares against numbers and booleans by parsing, since filter
    /// controls hand everything over as text. A missing field never matches
    /// a real constraint.
    pub fn matches(&self, field: &Value<'_>) -> bool {
        match (self, field) {
            (FilterValue::All, _) => true,
            (_, Value::None) => false,

            (FilterValue::Text(want), Value::String(have)) => want == have,
            (FilterValue::Text(want), Value::List(items)) => items.iter().any(|s| s == want),
            (FilterValue::Text(want), Value::Number(have)) => want
                .parse::<f64>()
                .map(|n| Number::F64(n).compare(*have) == Some(Ordering::Equal))
                .unwrap_or(false),
            (FilterValue::Text(want), Value::Bool(have)) => want.parse::<bool>() == Ok(*have),
            (FilterValue::Text(want), Value::Timestamp(_)) => {
                Timestamp::parse(want) == field.as_timestamp()
            }

            (FilterValue::Number(want), Value::Number(have)) => {
                want.compare(*have) == Some(Ordering::Equal)
            }
            (FilterValue::Bool(want), Value::Bool(have)) => want == have,

            // Type mismatch
            _ => false,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::All => f.write_str(Self::ALL),
            FilterValue::Text(s) => f.write_str(s),
            FilterValue::Number(n) => match n {
                Number::I64(n) => write!(f, "{n}"),
                Number::U64(n) => write!(f, "{n}"),
                Number::F64(n) => write!(f, "{n}"),
            },
            FilterValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::parse(s)
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::parse(&s)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        FilterValue::Bool(b)
    }
}

impl From<Number> for FilterValue {
    fn from(n: Number) -> Self {
        FilterValue::Number(n)
    }
}
