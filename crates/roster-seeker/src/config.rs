//! Per-screen query configuration.
//!
//! Each list screen declares, once, which fields can be searched, filtered
//! and sorted, and how many rows fit on a page. Keys a screen did not declare
//! are ignored at query time.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::filter::FilterValue;
use crate::ordering::{compare_directed, Dir, SortKind};
use crate::page::Pagination;
use crate::traits::Seekable;

/// Custom filter predicate: `(record, accepted value) -> passes`.
pub type Predicate<T> = Arc<dyn Fn(&T, &FilterValue) -> bool + Send + Sync>;

/// Custom ascending comparator between two records.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

enum FilterSpec<T> {
    /// Equality against the record's own field value.
    Field,
    Custom(Predicate<T>),
}

enum SortSpec<T> {
    Field(SortKind),
    Custom(Comparator<T>),
}

impl<T> Clone for FilterSpec<T> {
    fn clone(&self) -> Self {
        match self {
            FilterSpec::Field => FilterSpec::Field,
            FilterSpec::Custom(p) => FilterSpec::Custom(Arc::clone(p)),
        }
    }
}

impl<T> Clone for SortSpec<T> {
    fn clone(&self) -> Self {
        match self {
            SortSpec::Field(kind) => SortSpec::Field(*kind),
            SortSpec::Custom(c) => SortSpec::Custom(Arc::clone(c)),
        }
    }
}

/// What a list screen lets its user search, filter and sort by.
///
/// # Example
///
/// ```
/// use roster_seeker::{QueryConfig, SortKind};
/// # struct Engineer;
///
/// let config: QueryConfig<Engineer> = QueryConfig::new()
///     .searchable("name")
///     .searchable("skills")
///     .filterable("status")
///     .sortable("name", SortKind::Text)
///     .sortable("rating", SortKind::Number)
///     .page_size(10)
///     .build();
///
/// assert!(config.is_sortable("rating"));
/// assert!(!config.is_filterable("rating"));
/// ```
pub struct QueryConfig<T> {
    searchable: Vec<String>,
    filterable: BTreeMap<String, FilterSpec<T>>,
    sortable: BTreeMap<String, SortSpec<T>>,
    pagination: Pagination,
}

impl<T> QueryConfig<T> {
    /// Creates an empty configuration: nothing searchable, filterable or
    /// sortable, pagination disabled.
    pub fn new() -> Self {
        QueryConfig {
            searchable: Vec::new(),
            filterable: BTreeMap::new(),
            sortable: BTreeMap::new(),
            pagination: Pagination::default(),
        }
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Adds a field to free-text search. Declaration order is kept.
    pub fn searchable(mut self, field: &str) -> Self {
        if !self.searchable.iter().any(|f| f == field) {
            self.searchable.push(field.to_string());
        }
        self
    }

    /// Adds an equality filter on the record's own field value.
    pub fn filterable(mut self, field: &str) -> Self {
        self.filterable.insert(field.to_string(), FilterSpec::Field);
        self
    }

    /// Adds a filter key backed by a custom predicate.
    ///
    /// The key need not be a record field (e.g. `"min_rating"`).
    pub fn filterable_with<F>(mut self, key: &str, predicate: F) -> Self
    where
        F: Fn(&T, &FilterValue) -> bool + Send + Sync + 'static,
    {
        self.filterable
            .insert(key.to_string(), FilterSpec::Custom(Arc::new(predicate)));
        self
    }

    /// Adds a sortable field compared under `kind`.
    pub fn sortable(mut self, field: &str, kind: SortKind) -> Self {
        self.sortable.insert(field.to_string(), SortSpec::Field(kind));
        self
    }

    /// Adds a sort key backed by a custom ascending comparator.
    pub fn sortable_with<F>(mut self, key: &str, comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.sortable
            .insert(key.to_string(), SortSpec::Custom(Arc::new(comparator)));
        self
    }

    /// Sets the page size; 0 disables pagination.
    pub fn page_size(mut self, size: usize) -> Self {
        self.pagination = Pagination::new(size);
        self
    }

    /// Finalizes the configuration.
    ///
    /// This is a no-op that returns self, provided for builder-pattern clarity.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Searchable fields, in declaration order.
    pub fn searchable_fields(&self) -> &[String] {
        &self.searchable
    }

    /// Filter keys, sorted.
    pub fn filter_keys(&self) -> impl Iterator<Item = &str> {
        self.filterable.keys().map(String::as_str)
    }

    /// Sort keys, sorted.
    pub fn sort_keys(&self) -> impl Iterator<Item = &str> {
        self.sortable.keys().map(String::as_str)
    }

    /// Returns `true` if `key` is a declared filter.
    pub fn is_filterable(&self, key: &str) -> bool {
        self.filterable.contains_key(key)
    }

    /// Returns `true` if `key` is a declared sort.
    pub fn is_sortable(&self, key: &str) -> bool {
        self.sortable.contains_key(key)
    }

    /// The screen's pagination.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }
}

impl<T: Seekable> QueryConfig<T> {
    /// Evaluates the filter `key` against `item`.
    ///
    /// Unknown keys and the [`FilterValue::All`] sentinel pass.
    pub fn filter_passes(&self, item: &T, key: &str, value: &FilterValue) -> bool {
        if value.is_all() {
            return true;
        }
        match self.filterable.get(key) {
            Some(FilterSpec::Field) => value.matches(&item.field_value(key)),
            Some(FilterSpec::Custom(predicate)) => predicate(item, value),
            None => true,
        }
    }

    /// Comparator for sort `key` in direction `dir`, or `None` if the key
    /// is not declared.
    pub fn comparator(&self, key: &str, dir: Dir) -> Option<impl Fn(&T, &T) -> Ordering + '_> {
        let spec = self.sortable.get(key)?;
        let key = key.to_string();
        Some(move |a: &T, b: &T| match spec {
            SortSpec::Field(kind) => {
                compare_directed(&a.field_value(&key), &b.field_value(&key), *kind, dir)
            }
            SortSpec::Custom(cmp) => dir.apply(cmp(a, b)),
        })
    }
}

impl<T> Default for QueryConfig<T> {
    fn default() -> Self {
        QueryConfig::new()
    }
}

impl<T> Clone for QueryConfig<T> {
    fn clone(&self) -> Self {
        QueryConfig {
            searchable: self.searchable.clone(),
            filterable: self.filterable.clone(),
            sortable: self.sortable.clone(),
            pagination: self.pagination,
        }
    }
}

impl<T> fmt::Debug for QueryConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryConfig")
            .field("searchable", &self.searchable)
            .field("filterable", &self.filterable.keys().collect::<Vec<_>>())
            .field("sortable", &self.sortable.keys().collect::<Vec<_>>())
            .field("page_size", &self.pagination.page_size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Number, Value};

    struct Client {
        name: String,
        rating: f64,
    }

    impl Seekable for Client {
        fn field_value(&self, field: &str) -> Value<'_> {
            match field {
                "name" => Value::String(&self.name),
                "rating" => Value::Number(Number::F64(self.rating)),
                _ => Value::None,
            }
        }
    }

    fn client(name: &str, rating: f64) -> Client {
        Client {
            name: name.to_string(),
            rating,
        }
    }

    #[test]
    fn searchable_keeps_order_and_dedups() {
        let config: QueryConfig<Client> = QueryConfig::new()
            .searchable("name")
            .searchable("industry")
            .searchable("name")
            .build();
        assert_eq!(config.searchable_fields(), ["name", "industry"]);
    }

    #[test]
    fn unknown_filter_key_passes() {
        let config: QueryConfig<Client> = QueryConfig::new().filterable("name").build();
        let c = client("Acme", 4.0);
        assert!(config.filter_passes(&c, "region", &FilterValue::parse("kanto")));
        assert!(config.filter_passes(&c, "name", &FilterValue::parse("Acme")));
        assert!(!config.filter_passes(&c, "name", &FilterValue::parse("Zeta")));
        assert!(config.filter_passes(&c, "name", &FilterValue::All));
    }

    #[test]
    fn custom_filter_predicate() {
        let config: QueryConfig<Client> = QueryConfig::new()
            .filterable_with("min_rating", |c: &Client, v: &FilterValue| {
                v.to_string()
                    .parse::<f64>()
                    .map(|min| c.rating >= min)
                    .unwrap_or(true)
            })
            .build();

        assert!(config.filter_passes(&client("A", 4.5), "min_rating", &"4".into()));
        assert!(!config.filter_passes(&client("B", 3.5), "min_rating", &"4".into()));
    }

    #[test]
    fn comparator_applies_direction() {
        let config: QueryConfig<Client> = QueryConfig::new()
            .sortable("rating", SortKind::Number)
            .sortable_with("name_len", |a: &Client, b: &Client| {
                a.name.len().cmp(&b.name.len())
            })
            .build();

        let low = client("Beta", 3.0);
        let high = client("Acme Holdings", 4.8);

        let asc = config.comparator("rating", Dir::Asc).unwrap();
        assert_eq!(asc(&low, &high), Ordering::Less);
        let desc = config.comparator("rating", Dir::Desc).unwrap();
        assert_eq!(desc(&low, &high), Ordering::Greater);

        let by_len = config.comparator("name_len", Dir::Desc).unwrap();
        assert_eq!(by_len(&low, &high), Ordering::Greater);

        assert!(config.comparator("founded", Dir::Asc).is_none());
    }

    #[test]
    fn debug_lists_keys() {
        let config: QueryConfig<Client> = QueryConfig::new()
            .sortable("name", SortKind::Text)
            .page_size(10)
            .build();
        let debug = format!("{config:?}");
        assert!(debug.contains("\"name\""));
        assert!(debug.contains("page_size: 10"));
    }
}
