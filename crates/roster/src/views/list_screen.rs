//! View state of one list screen.

use roster_seeker::{FilterValue, QueryConfig, QueryResult, QueryState, Seekable, Sort};
use tracing::debug;

use super::{ListViewBuilder, ListViewResult};

/// A list screen: its fixed query config plus what the user has selected.
///
/// All state changes go through the setters so that narrowing the result
/// (search or filters) always returns to page 1, while sorting and paging
/// keep the user where they are.
///
/// ```
/// use roster::{fixtures, screens, views::ListScreen};
///
/// let data = fixtures::load().unwrap();
/// let mut screen = ListScreen::new("engineers", screens::engineers());
/// screen.set_page(2);
/// screen.set_search("go");
/// assert_eq!(screen.state().page(), 1);
///
/// let view = screen.render(&data.engineers);
/// assert!(view.total_count < data.engineers.len());
/// assert_eq!(view.filter_summary.as_deref(), Some("q=\"go\""));
/// ```
#[derive(Debug, Clone)]
pub struct ListScreen<T> {
    noun: String,
    config: QueryConfig<T>,
    state: QueryState,
}

impl<T> ListScreen<T> {
    /// `noun` names the records in messages, e.g. "engineers".
    pub fn new(noun: impl Into<String>, config: QueryConfig<T>) -> Self {
        Self {
            noun: noun.into(),
            config,
            state: QueryState::new(),
        }
    }

    /// Replaces the whole state, e.g. when restoring from URL parameters.
    #[must_use]
    pub fn with_state(mut self, state: QueryState) -> Self {
        self.state = state;
        self
    }

    pub fn noun(&self) -> &str {
        &self.noun
    }

    pub fn config(&self) -> &QueryConfig<T> {
        &self.config
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.state.set_search_term(term);
    }

    pub fn set_filter(&mut self, key: &str, value: impl Into<FilterValue>) {
        let value = value.into();
        if !self.config.is_filterable(key) {
            debug!(screen = %self.noun, key, "ignoring filter on undeclared key");
        }
        self.state.set_filter(key, value);
    }

    pub fn clear_filter(&mut self, key: &str) {
        self.state.clear_filter(key);
    }

    /// Clears search and filters.
    pub fn reset(&mut self) {
        self.state.clear_filters();
    }

    pub fn set_sort(&mut self, sort: Sort) {
        if !self.config.is_sortable(&sort.field) {
            debug!(screen = %self.noun, field = %sort.field, "ignoring sort on undeclared field");
        }
        self.state.set_sort(sort);
    }

    /// Column-header click.
    pub fn toggle_sort(&mut self, field: &str) {
        self.state.toggle_sort(field);
    }

    pub fn set_page(&mut self, page: usize) {
        self.state.set_page(page);
    }

    /// Search and filter summary, e.g. `q="rust", status=available`.
    /// Empty when nothing narrows the list.
    pub fn filter_summary(&self) -> String {
        let mut parts = Vec::new();
        if !self.state.search_term().is_empty() {
            parts.push(format!("q={:?}", self.state.search_term()));
        }
        parts.extend(
            self.state
                .active_filters()
                .map(|(key, value)| format!("{key}={value}")),
        );
        parts.join(", ")
    }
}

impl<T: Seekable> ListScreen<T> {
    /// Runs the query and returns the raw result.
    pub fn query<'a>(&self, records: &'a [T]) -> QueryResult<'a, T> {
        self.config.query(records, &self.state)
    }

    /// Runs the query and builds the view. Stores the clamped page back so
    /// the next page change starts from what the user actually sees.
    pub fn render_mut<'a>(&mut self, records: &'a [T]) -> ListViewResult<&'a T> {
        let view = self.render(records);
        self.state.set_page(view.page);
        view
    }

    /// Runs the query and builds the view without touching the state.
    pub fn render<'a>(&self, records: &'a [T]) -> ListViewResult<&'a T> {
        let result = self.query(records);
        let empty = result.is_empty();

        let mut builder = ListViewBuilder::from_query(result).filter_summary(self.filter_summary());
        if let Some(sort) = self.state.sort() {
            builder = builder.sort(sort.to_string());
        }
        if empty {
            builder = builder.info(self.empty_message());
        }
        builder.build()
    }

    fn empty_message(&self) -> String {
        if self.state.is_narrowed() {
            format!("No {} match the current search and filters.", self.noun)
        } else {
            format!("No {} yet.", self.noun)
        }
    }
}
