//! Free-text search over configured fields.

use crate::traits::Seekable;
use crate::value::Value;

/// Returns `true` if `value` contains `needle`, which must already be
/// lower-cased.
///
/// Strings match on a case-insensitive substring test; lists match if any
/// element does. Other value types are never searched.
pub fn value_contains(value: &Value<'_>, needle: &str) -> bool {
    match value {
        Value::String(s) => s.to_lowercase().contains(needle),
        Value::List(items) => items.iter().any(|s| s.to_lowercase().contains(needle)),
        _ => false,
    }
}

/// Returns `true` if `item` matches the search `term` on any of `fields`.
///
/// An empty term matches everything.
///
/// ```
/// use roster_seeker::{matches_search, Seekable, Value};
///
/// struct Project { name: String, skills: Vec<String> }
///
/// impl Seekable for Project {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::String(&self.name),
///             "skills" => Value::List(&self.skills),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let p = Project { name: "Billing revamp".into(), skills: vec!["TypeScript".into()] };
/// let fields = ["name".to_string(), "skills".to_string()];
/// assert!(matches_search(&p, "script", &fields));
/// assert!(matches_search(&p, "BILLING", &fields));
/// assert!(!matches_search(&p, "java", &fields));
/// ```
pub fn matches_search<T: Seekable + ?Sized>(item: &T, term: &str, fields: &[String]) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    matches_lowered(item, &needle, fields)
}

pub(crate) fn matches_lowered<T: Seekable + ?Sized>(
    item: &T,
    needle: &str,
    fields: &[String],
) -> bool {
    fields
        .iter()
        .any(|field| value_contains(&item.field_value(field), needle))
}
