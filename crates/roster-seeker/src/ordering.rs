//! Sort direction and comparator primitives.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::collate::collate;
use crate::error::SeekerError;
use crate::value::{Number, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// The opposite direction.
    pub fn flip(self) -> Dir {
        match self {
            Dir::Asc => Dir::Desc,
            Dir::Desc => Dir::Asc,
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dir {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Dir::Asc),
            "desc" | "descending" => Ok(Dir::Desc),
            _ => Err(SeekerError::InvalidDirection(s.to_string())),
        }
    }
}

/// How a sortable field is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKind {
    /// Locale-aware text ordering (see [`collate`]).
    #[default]
    Text,
    /// Numeric ordering.
    Number,
    /// Chronological ordering; string fields are parsed as dates.
    Date,
    /// The value's own ordering, whatever its type.
    Natural,
}

/// Compares two field values under `kind`, ascending.
///
/// Values that cannot be read as `kind` (missing fields, unparseable dates,
/// NaN) sort after readable ones. Reversing this result moves them first;
/// use [`compare_directed`] to keep them last in both directions.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>, kind: SortKind) -> Ordering {
    match kind {
        SortKind::Text => match (a.as_str(), b.as_str()) {
            (Some(a), Some(b)) => collate(a, b),
            (a, b) => presence(a.is_some(), b.is_some()),
        },
        SortKind::Number => match (finite(a), finite(b)) {
            (Some(a), Some(b)) => a.compare(b).unwrap_or(Ordering::Equal),
            (a, b) => presence(a.is_some(), b.is_some()),
        },
        SortKind::Date => match (a.as_timestamp(), b.as_timestamp()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (a, b) => presence(a.is_some(), b.is_some()),
        },
        SortKind::Natural => compare_natural(a, b),
    }
}

/// Compares two field values under `kind` and `dir`, keeping unreadable
/// values last in both directions.
pub fn compare_directed(a: &Value<'_>, b: &Value<'_>, kind: SortKind, dir: Dir) -> Ordering {
    let readable_a = readable(a, kind);
    let readable_b = readable(b, kind);
    match (readable_a, readable_b) {
        (true, true) => dir.apply(compare_values(a, b, kind)),
        (a, b) => presence(a, b),
    }
}

fn readable(value: &Value<'_>, kind: SortKind) -> bool {
    match kind {
        SortKind::Text => value.as_str().is_some(),
        SortKind::Number => finite(value).is_some(),
        SortKind::Date => value.as_timestamp().is_some(),
        SortKind::Natural => !value.is_none(),
    }
}

// NaN reads as missing so the comparator stays a total order.
fn finite(value: &Value<'_>) -> Option<Number> {
    value.as_number().filter(|n| !n.to_f64().is_nan())
}

// Present values sort before missing ones.
fn presence(a: bool, b: bool) -> Ordering {
    b.cmp(&a)
}

fn compare_natural(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => collate(a, b),
        (Value::Number(_), Value::Number(_)) => compare_values(a, b, SortKind::Number),
        (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::List(a), Value::List(b)) => a.len().cmp(&b.len()),
        // Mismatched types group by type
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(value: &Value<'_>) -> u8 {
    match value {
        Value::String(_) => 0,
        Value::Number(_) => 1,
        Value::Timestamp(_) => 2,
        Value::Bool(_) => 3,
        Value::List(_) => 4,
        Value::None => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Timestamp;

    #[test]
    fn dir_apply_and_flip() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(Dir::Asc.flip(), Dir::Desc);
        assert_eq!(Dir::Desc.flip(), Dir::Asc);
    }

    #[test]
    fn dir_parse() {
        assert_eq!("asc".parse::<Dir>().unwrap(), Dir::Asc);
        assert_eq!("DESC".parse::<Dir>().unwrap(), Dir::Desc);
        assert_eq!(" descending ".parse::<Dir>().unwrap(), Dir::Desc);
        assert!("sideways".parse::<Dir>().is_err());
    }

    #[test]
    fn text_compare_is_case_insensitive_first() {
        assert_eq!(
            compare_values(&Value::String("beta"), &Value::String("Zeta"), SortKind::Text),
            Ordering::Less
        );
    }

    #[test]
    fn number_compare() {
        assert_eq!(
            compare_values(
                &Value::Number(Number::F64(3.0)),
                &Value::Number(Number::F64(4.8)),
                SortKind::Number
            ),
            Ordering::Less
        );
        assert_eq!(
            compare_directed(
                &Value::Number(Number::F64(f64::NAN)),
                &Value::Number(Number::F64(1.0)),
                SortKind::Number,
                Dir::Desc
            ),
            Ordering::Greater
        );
    }

    #[test]
    fn date_compare_parses_strings() {
        assert_eq!(
            compare_values(
                &Value::String("2024-10-01"),
                &Value::String("2024-09-30"),
                SortKind::Date
            ),
            Ordering::Greater
        );
        assert_eq!(
            compare_values(
                &Value::String("2024-10-01"),
                &Value::Timestamp(Timestamp::parse("2024-10-01").unwrap()),
                SortKind::Date
            ),
            Ordering::Equal
        );
    }

    #[test]
    fn unreadable_values_sort_last_in_both_directions() {
        let dated = Value::String("2024-01-01");
        let undated = Value::String("TBD");

        for dir in [Dir::Asc, Dir::Desc] {
            assert_eq!(
                compare_directed(&dated, &undated, SortKind::Date, dir),
                Ordering::Less
            );
            assert_eq!(
                compare_directed(&Value::None, &dated, SortKind::Date, dir),
                Ordering::Greater
            );
        }
    }

    #[test]
    fn natural_compare_groups_mixed_types() {
        assert_eq!(
            compare_values(
                &Value::String("a"),
                &Value::Number(Number::I64(1)),
                SortKind::Natural
            ),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&Value::None, &Value::Bool(true), SortKind::Natural),
            Ordering::Greater
        );
    }
}
