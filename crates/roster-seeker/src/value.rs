//! Runtime value types for field access.
//!
//! A [`Value`] is what a record hands back when the engine asks for one of its
//! fields. It borrows from the record, so reading a field never allocates.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Field value borrowed from a record.
///
/// # Example
///
/// ```
/// use roster_seeker::{Number, Value};
///
/// struct Engineer {
///     name: String,
///     skills: Vec<String>,
///     rating: f64,
/// }
///
/// fn accessor<'a>(e: &'a Engineer, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(&e.name),
///         "skills" => Value::List(&e.skills),
///         "rating" => Value::Number(Number::F64(e.rating)),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Scalar string field.
    String(&'a str),
    /// Array-of-string field (tags, skills, ...).
    List(&'a [String]),
    /// Numeric field.
    Number(Number),
    /// Point in time (milliseconds since Unix epoch).
    Timestamp(Timestamp),
    /// Boolean field.
    Bool(bool),
    /// Field not present, null, or not exposed.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the list value, if present.
    pub fn as_list(&self) -> Option<&'a [String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts a timestamp.
    ///
    /// String values are parsed with [`Timestamp::parse`], so date-like text
    /// fields can be used wherever a timestamp is expected.
    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Value::Timestamp(t) => Some(*t),
            Value::String(s) => Timestamp::parse(s),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Numeric value.
///
/// Integers keep their precision; comparisons across variants go through `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types.
    ///
    /// Returns `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Number {
                fn from(n: $source) -> Self {
                    Number::$variant(n as $target)
                }
            }
        )+
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);

/// Milliseconds since the Unix epoch.
///
/// ```
/// use roster_seeker::Timestamp;
///
/// let start = Timestamp::parse("2024-04-01").unwrap();
/// let end = Timestamp::parse("2024-09-30T18:00:00+09:00").unwrap();
/// assert!(start < end);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a new timestamp from milliseconds since Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Creates a new timestamp from seconds since Unix epoch.
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs * 1000)
    }

    /// Returns the timestamp as milliseconds since Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Parses a date-like string.
    ///
    /// Accepted shapes, tried in order:
    /// - RFC 3339 (`2024-04-01T09:00:00Z`, `2024-04-01T09:00:00+09:00`)
    /// - naive date-time (`2024-04-01T09:00:00` or `2024-04-01 09:00:00`), read as UTC
    /// - plain date (`2024-04-01`), read as UTC midnight
    ///
    /// Returns `None` for anything else.
    pub fn parse(text: &str) -> Option<Timestamp> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(Timestamp(dt.timestamp_millis()));
        }

        for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
                return Some(Timestamp(naive.and_utc().timestamp_millis()));
            }
        }

        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Timestamp(naive.and_utc().timestamp_millis()))
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Timestamp(millis)
    }
}
