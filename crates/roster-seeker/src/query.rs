//! Query execution: search, filter, sort, paginate.

use tracing::trace;

use crate::config::QueryConfig;
use crate::search::matches_lowered;
use crate::state::QueryState;
use crate::traits::Seekable;

/// One page of a query result plus the numbers a pager needs.
#[derive(Debug)]
pub struct QueryResult<'a, T> {
    /// Records on the returned page, in sorted order.
    pub items: Vec<&'a T>,
    /// Matches after search and filters, across all pages.
    pub total_matches: usize,
    /// Page count; at least 1 even when nothing matches.
    pub total_pages: usize,
    /// The page actually returned (the request clamped into range).
    pub page: usize,
    /// Page size used (0 when pagination is disabled).
    pub page_size: usize,
}

impl<'a, T> QueryResult<'a, T> {
    /// Returns `true` if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }

    /// Returns `true` if there is a page before this one.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Returns `true` if there is a page after this one.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based, inclusive positions of this page within all matches, for
    /// "showing X-Y of Z". `None` when the page is empty.
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let start = if self.page_size == 0 {
            1
        } else {
            (self.page - 1) * self.page_size + 1
        };
        Some((start, start + self.items.len() - 1))
    }
}

/// Runs the full pipeline over `records`.
///
/// 1. Keep records matching the search term on any searchable field
///    (case-insensitive substring; list fields match on any element).
/// 2. Keep records passing every active filter. Undeclared filter keys and
///    filters set to "all" are ignored.
/// 3. Sort by the declared sort key, if any. The sort is stable, so ties
///    keep their input order in both directions. An undeclared sort key
///    leaves the order untouched.
/// 4. Clamp the requested page and slice it out.
///
/// Never fails and never panics.
///
/// # Example
///
/// ```
/// use roster_seeker::{query, Number, QueryConfig, QueryState, Seekable, Sort, SortKind, Value};
///
/// struct Client { name: &'static str, rating: f64 }
///
/// impl Seekable for Client {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::String(self.name),
///             "rating" => Value::Number(Number::F64(self.rating)),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let clients = [
///     Client { name: "Acme", rating: 4.8 },
///     Client { name: "Zeta", rating: 4.8 },
///     Client { name: "Beta", rating: 3.0 },
/// ];
/// let config = QueryConfig::new().sortable("rating", SortKind::Number).build();
/// let state = QueryState::new().with_sort(Sort::desc("rating"));
///
/// let result = query(&clients, &state, &config);
/// let names: Vec<_> = result.items.iter().map(|c| c.name).collect();
/// assert_eq!(names, ["Acme", "Zeta", "Beta"]);
/// ```
pub fn query<'a, T: Seekable>(
    records: &'a [T],
    state: &QueryState,
    config: &QueryConfig<T>,
) -> QueryResult<'a, T> {
    let matches = select(records, state, config);

    let pagination = config.pagination();
    let total_matches = matches.len();
    let total_pages = pagination.total_pages(total_matches);
    let page = pagination.clamp(state.page(), total_matches);
    let items = matches[pagination.bounds(page, total_matches)].to_vec();

    trace!(
        total = records.len(),
        matches = total_matches,
        page,
        total_pages,
        "list query"
    );

    QueryResult {
        items,
        total_matches,
        total_pages,
        page,
        page_size: pagination.page_size(),
    }
}

/// Steps 1-3 of [`query`]: every match, sorted, without pagination.
pub fn select<'a, T: Seekable>(
    records: &'a [T],
    state: &QueryState,
    config: &QueryConfig<T>,
) -> Vec<&'a T> {
    let needle = state.search_term().to_lowercase();
    let fields = config.searchable_fields();

    let mut matches: Vec<&T> = records
        .iter()
        .filter(|item| needle.is_empty() || matches_lowered(*item, &needle, fields))
        .filter(|item| matches_filters(*item, state, config))
        .collect();

    if let Some(sort) = state.sort() {
        if let Some(compare) = config.comparator(&sort.field, sort.dir) {
            // sort_by is stable
            matches.sort_by(|a, b| compare(*a, *b));
        }
    }

    matches
}

/// Returns `true` if `item` passes every active filter in `state`.
pub fn matches_filters<T: Seekable>(item: &T, state: &QueryState, config: &QueryConfig<T>) -> bool {
    state
        .active_filters()
        .all(|(key, value)| config.filter_passes(item, key, value))
}

impl<T: Seekable> QueryConfig<T> {
    /// Runs [`query`] with this configuration.
    pub fn query<'a>(&self, records: &'a [T], state: &QueryState) -> QueryResult<'a, T> {
        query(records, state, self)
    }

    /// Runs [`select`] with this configuration.
    pub fn select<'a>(&self, records: &'a [T], state: &QueryState) -> Vec<&'a T> {
        select(records, state, self)
    }

    /// Counts matches without sorting or paginating.
    pub fn count(&self, records: &[T], state: &QueryState) -> usize {
        let needle = state.search_term().to_lowercase();
        records
            .iter()
            .filter(|item| {
                (needle.is_empty() || matches_lowered(*item, &needle, self.searchable_fields()))
                    && matches_filters(*item, state, self)
            })
            .count()
    }
}
