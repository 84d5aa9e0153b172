//! Locale-aware string ordering.
//!
//! List screens sort names the way a reader expects: case and accents do not
//! split otherwise-equal names apart. Strings are compared on a folded key
//! (transliterated to ASCII, then lower-cased) and only fall back to the raw
//! text when the keys tie, which keeps the order total.

use std::cmp::Ordering;

use deunicode::deunicode;

/// Folds a string into its collation key.
pub fn collation_key(s: &str) -> String {
    deunicode(s).to_lowercase()
}

/// Compares two strings for display ordering.
///
/// ```
/// use std::cmp::Ordering;
/// use roster_seeker::collate;
///
/// assert_eq!(collate("apple", "Banana"), Ordering::Less);
/// assert_eq!(collate("Émile", "Eric"), Ordering::Less);
/// ```
pub fn collate(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}
