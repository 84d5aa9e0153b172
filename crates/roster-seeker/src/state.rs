//! User-controlled query state for a list screen.
//!
//! [`QueryState`] holds what the search box, filter selects, sortable column
//! headers and pager currently say. Its setters carry the screen contract:
//! changing what matches (search term or any filter) sends the user back to
//! page 1, while re-sorting or paging does not.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Result, SeekerError};
use crate::filter::FilterValue;
use crate::ordering::Dir;

/// Active sort: a field and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    /// The sort key.
    pub field: String,
    /// The sort direction.
    pub dir: Dir,
}

impl Sort {
    /// Creates a new ascending sort on the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        Sort::new(field, Dir::Asc)
    }

    /// Creates a new descending sort on the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        Sort::new(field, Dir::Desc)
    }

    /// Creates a new sort with the given direction.
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        Sort {
            field: field.into(),
            dir,
        }
    }

    /// Parses `field` or `field:dir`.
    pub fn parse(text: &str) -> Result<Sort> {
        let (field, dir) = match text.split_once(':') {
            Some((field, dir)) => (field.trim(), dir.parse()?),
            None => (text.trim(), Dir::Asc),
        };
        if field.is_empty() {
            return Err(SeekerError::InvalidSort(text.to_string()));
        }
        Ok(Sort::new(field, dir))
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.dir)
    }
}

/// Search, filter, sort and page selection of one list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    search_term: String,
    filters: BTreeMap<String, FilterValue>,
    sort: Option<Sort>,
    page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        QueryState {
            search_term: String::new(),
            filters: BTreeMap::new(),
            sort: None,
            page: 1,
        }
    }
}

impl QueryState {
    /// Fresh state: no search, no filters, unsorted, page 1.
    pub fn new() -> Self {
        QueryState::default()
    }

    /// Builder-style search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.set_search_term(term);
        self
    }

    /// Builder-style filter.
    pub fn with_filter(mut self, key: &str, value: impl Into<FilterValue>) -> Self {
        self.set_filter(key, value);
        self
    }

    /// Builder-style sort.
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.set_sort(sort);
        self
    }

    /// Builder-style page.
    pub fn with_page(mut self, page: usize) -> Self {
        self.set_page(page);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current filters, including any set to [`FilterValue::All`].
    pub fn filters(&self) -> &BTreeMap<String, FilterValue> {
        &self.filters
    }

    /// Filters that actually constrain (not set to [`FilterValue::All`]).
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.filters
            .iter()
            .filter(|(_, v)| !v.is_all())
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Current sort.
    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    /// Requested page (1-based, not yet clamped against a result).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns `true` when search or any filter narrows the result.
    pub fn is_narrowed(&self) -> bool {
        !self.search_term.is_empty() || self.active_filters().next().is_some()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Sets the search term and returns to page 1.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    /// Sets one filter and returns to page 1.
    pub fn set_filter(&mut self, key: &str, value: impl Into<FilterValue>) {
        self.filters.insert(key.to_string(), value.into());
        self.page = 1;
    }

    /// Removes one filter and returns to page 1.
    pub fn clear_filter(&mut self, key: &str) {
        self.filters.remove(key);
        self.page = 1;
    }

    /// Removes every filter and the search term, and returns to page 1.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.search_term.clear();
        self.page = 1;
    }

    /// Sets the sort. The page is kept.
    pub fn set_sort(&mut self, sort: Sort) {
        self.sort = Some(sort);
    }

    /// Removes the sort. The page is kept.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Column-header behavior: clicking the sorted column flips its
    /// direction, clicking another column sorts it ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = Some(match self.sort.take() {
            Some(current) if current.field == field => Sort::new(field, current.dir.flip()),
            _ => Sort::asc(field),
        });
    }

    /// Requests a page. Values below 1 become 1; the upper bound is applied
    /// when a query runs.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    // ========================================================================
    // URL parameters
    // ========================================================================

    /// Reads state from URL-style parameters.
    ///
    /// `q` is the search term, `sort` is `field` or `field:dir`, `page` is a
    /// positive integer, and every other key is a filter. A leading `?` is
    /// ignored and `+` reads as a space.
    ///
    /// ```
    /// use roster_seeker::{Dir, FilterValue, QueryState};
    ///
    /// let state = QueryState::from_params("?q=java&status=active&sort=rating:desc&page=2").unwrap();
    /// assert_eq!(state.search_term(), "java");
    /// assert_eq!(state.filters()["status"], FilterValue::Text("active".into()));
    /// assert_eq!(state.sort().unwrap().dir, Dir::Desc);
    /// assert_eq!(state.page(), 2);
    /// ```
    pub fn from_params(params: &str) -> Result<QueryState> {
        let mut state = QueryState::new();
        let mut page = None;

        let params = params.strip_prefix('?').unwrap_or(params);
        for pair in params.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = value.replace('+', " ");
            match key {
                "q" => state.set_search_term(value),
                "sort" => state.set_sort(Sort::parse(&value)?),
                "page" => {
                    let n = value
                        .trim()
                        .parse::<usize>()
                        .ok()
                        .filter(|n| *n >= 1)
                        .ok_or_else(|| SeekerError::InvalidPage(value.clone()))?;
                    page = Some(n);
                }
                key => state.set_filter(key, FilterValue::parse(&value)),
            }
        }

        // Filters reset the page while parsing; apply it last.
        if let Some(page) = page {
            state.set_page(page);
        }
        Ok(state)
    }

    /// Writes state as URL-style parameters, the inverse of
    /// [`QueryState::from_params`]. Defaults are omitted.
    pub fn to_params(&self) -> String {
        let mut parts = Vec::new();
        if !self.search_term.is_empty() {
            parts.push(format!("q={}", self.search_term.replace(' ', "+")));
        }
        for (key, value) in self.active_filters() {
            parts.push(format!("{}={}", key, value.to_string().replace(' ', "+")));
        }
        if let Some(sort) = &self.sort {
            parts.push(format!("sort={sort}"));
        }
        if self.page > 1 {
            parts.push(format!("page={}", self.page));
        }
        parts.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_and_filters_reset_page() {
        let mut state = QueryState::new().with_page(4);
        state.set_search_term("rust");
        assert_eq!(state.page(), 1);

        state.set_page(3);
        state.set_filter("status", "active");
        assert_eq!(state.page(), 1);

        state.set_page(3);
        state.clear_filter("status");
        assert_eq!(state.page(), 1);

        state.set_page(3);
        state.clear_filters();
        assert_eq!(state.page(), 1);
        assert!(!state.is_narrowed());
    }

    #[test]
    fn sorting_keeps_page() {
        let mut state = QueryState::new().with_page(3);
        state.set_sort(Sort::desc("rating"));
        assert_eq!(state.page(), 3);
        state.toggle_sort("name");
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn toggle_sort_flips_same_field() {
        let mut state = QueryState::new();
        state.toggle_sort("rating");
        assert_eq!(state.sort(), Some(&Sort::asc("rating")));
        state.toggle_sort("rating");
        assert_eq!(state.sort(), Some(&Sort::desc("rating")));
        state.toggle_sort("name");
        assert_eq!(state.sort(), Some(&Sort::asc("name")));
    }

    #[test]
    fn page_floor_is_one() {
        let state = QueryState::new().with_page(0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn all_filter_is_not_active() {
        let state = QueryState::new()
            .with_filter("status", "all")
            .with_filter("industry", "finance");
        let active: Vec<_> = state.active_filters().map(|(k, _)| k).collect();
        assert_eq!(active, vec!["industry"]);
        assert!(state.is_narrowed());
    }

    #[test]
    fn sort_parse() {
        assert_eq!(Sort::parse("name").unwrap(), Sort::asc("name"));
        assert_eq!(Sort::parse("rating:desc").unwrap(), Sort::desc("rating"));
        assert_eq!(
            Sort::parse(":desc"),
            Err(SeekerError::InvalidSort(":desc".to_string()))
        );
        assert_eq!(
            Sort::parse("rating:down"),
            Err(SeekerError::InvalidDirection("down".to_string()))
        );
    }

    #[test]
    fn params_page_applies_after_filters() {
        let state = QueryState::from_params("page=3&status=active").unwrap();
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn params_errors() {
        assert_eq!(
            QueryState::from_params("page=0"),
            Err(SeekerError::InvalidPage("0".to_string()))
        );
        assert_eq!(
            QueryState::from_params("page=two"),
            Err(SeekerError::InvalidPage("two".to_string()))
        );
        assert!(QueryState::from_params("sort=rating:sideways").is_err());
    }

    #[test]
    fn params_plus_is_space() {
        let state = QueryState::from_params("q=spring+boot").unwrap();
        assert_eq!(state.search_term(), "spring boot");
    }

    #[test]
    fn params_round_trip() {
        let state = QueryState::new()
            .with_search("spring boot")
            .with_filter("status", "active")
            .with_filter("industry", "all")
            .with_sort(Sort::desc("rating"))
            .with_page(2);

        let text = state.to_params();
        assert_eq!(text, "q=spring+boot&status=active&sort=rating:desc&page=2");

        let parsed = QueryState::from_params(&text).unwrap();
        assert_eq!(parsed.search_term(), "spring boot");
        assert_eq!(parsed.sort(), state.sort());
        assert_eq!(parsed.page(), 2);
        assert_eq!(parsed.active_filters().count(), 1);
    }

    #[test]
    fn empty_params_are_default() {
        assert_eq!(QueryState::from_params("").unwrap(), QueryState::new());
        assert_eq!(QueryState::from_params("?").unwrap(), QueryState::new());
        assert_eq!(QueryState::new().to_params(), "");
    }
}
