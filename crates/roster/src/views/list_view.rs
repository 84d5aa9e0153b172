//! ListView result type and builder.
//!
//! A list view is what one list screen hands to its renderer:
//! - the records on the current page,
//! - pager numbers (page, page count, total matches, shown range),
//! - a summary of the active search and filters,
//! - status messages (e.g. the empty state).

use roster_seeker::QueryResult;
use serde::Serialize;

use super::{Message, MessageLevel};

/// Result of rendering one list screen.
#[derive(Debug, Clone, Serialize)]
pub struct ListViewResult<T> {
    /// Records on the current page, in display order.
    pub items: Vec<T>,

    /// Matches across all pages.
    pub total_count: usize,

    /// Current page, 1-based.
    pub page: usize,

    /// Page count, at least 1.
    pub total_pages: usize,

    /// 1-based inclusive positions of `items` among all matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showing: Option<(usize, usize)>,

    /// Active search and filters, e.g. `q="rust", status=available`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_summary: Option<String>,

    /// Active sort, e.g. `rating:desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
}

impl<T> ListViewResult<T> {
    /// A single page holding `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            total_count: items.len(),
            items,
            page: 1,
            total_pages: 1,
            showing: None,
            filter_summary: None,
            sort: None,
            messages: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Pager footer, e.g. `page 2 of 3 (25 matches)`.
    pub fn footer(&self) -> String {
        let noun = if self.total_count == 1 { "match" } else { "matches" };
        format!(
            "page {} of {} ({} {})",
            self.page, self.total_pages, self.total_count, noun
        )
    }
}

impl<T> Default for ListViewResult<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Builder for [`ListViewResult`]. Start with [`list_view`] or
/// [`ListViewBuilder::from_query`].
#[derive(Debug)]
pub struct ListViewBuilder<T> {
    result: ListViewResult<T>,
}

impl<T> ListViewBuilder<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            result: ListViewResult::new(items.into_iter().collect()),
        }
    }

    /// Sets the pager numbers.
    pub fn page(mut self, page: usize, total_pages: usize) -> Self {
        self.result.page = page.max(1);
        self.result.total_pages = total_pages.max(1);
        self
    }

    pub fn total_count(mut self, count: usize) -> Self {
        self.result.total_count = count;
        self
    }

    pub fn showing(mut self, range: Option<(usize, usize)>) -> Self {
        self.result.showing = range;
        self
    }

    pub fn filter_summary(mut self, summary: impl Into<String>) -> Self {
        let summary = summary.into();
        self.result.filter_summary = (!summary.is_empty()).then_some(summary);
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.result.sort = Some(sort.into());
        self
    }

    pub fn message(mut self, level: MessageLevel, text: impl Into<String>) -> Self {
        self.result.messages.push(Message::new(level, text));
        self
    }

    pub fn info(self, text: impl Into<String>) -> Self {
        self.message(MessageLevel::Info, text)
    }

    pub fn warning(self, text: impl Into<String>) -> Self {
        self.message(MessageLevel::Warning, text)
    }

    pub fn error(self, text: impl Into<String>) -> Self {
        self.message(MessageLevel::Error, text)
    }

    pub fn build(self) -> ListViewResult<T> {
        self.result
    }
}

impl<'a, T> ListViewBuilder<&'a T> {
    /// Starts from a query result, copying its page and pager numbers.
    pub fn from_query(result: QueryResult<'a, T>) -> Self {
        let range = result.range();
        Self::new(result.items)
            .total_count(result.total_matches)
            .page(result.page, result.total_pages)
            .showing(range)
    }
}

/// Starts building a list view over `items`.
///
/// ```rust
/// use roster::views::{list_view, MessageLevel};
///
/// let result = list_view(vec!["Sato", "Suzuki"])
///     .total_count(12)
///     .page(1, 6)
///     .filter_summary("status=available")
///     .message(MessageLevel::Info, "2 engineers start next month")
///     .build();
///
/// assert_eq!(result.footer(), "page 1 of 6 (12 matches)");
/// ```
pub fn list_view<T>(items: impl IntoIterator<Item = T>) -> ListViewBuilder<T> {
    ListViewBuilder::new(items)
}
