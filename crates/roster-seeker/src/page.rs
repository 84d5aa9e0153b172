//! Pagination math.

use std::ops::Range;

/// Fixed-size pagination over a result set.
///
/// A page size of 0 disables pagination: everything lands on page 1.
///
/// ```
/// use roster_seeker::Pagination;
///
/// let pages = Pagination::new(10);
/// assert_eq!(pages.total_pages(25), 3);
/// assert_eq!(pages.clamp(7, 25), 3);
/// assert_eq!(pages.bounds(3, 25), 20..25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    page_size: usize,
}

impl Pagination {
    /// Creates pagination with the given page size.
    pub fn new(page_size: usize) -> Self {
        Pagination { page_size }
    }

    /// The configured page size (0 when disabled).
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns `true` when results are split into pages.
    pub fn is_enabled(&self) -> bool {
        self.page_size > 0
    }

    /// Number of pages for `total` matches; never less than 1.
    pub fn total_pages(&self, total: usize) -> usize {
        if !self.is_enabled() {
            return 1;
        }
        total.div_ceil(self.page_size).max(1)
    }

    /// Clamps a 1-based page into `[1, total_pages]`.
    pub fn clamp(&self, page: usize, total: usize) -> usize {
        page.clamp(1, self.total_pages(total))
    }

    /// Index range of `page` (clamped) within `total` matches.
    pub fn bounds(&self, page: usize, total: usize) -> Range<usize> {
        if !self.is_enabled() {
            return 0..total;
        }
        let page = self.clamp(page, total);
        let start = (page - 1) * self.page_size;
        let end = start.saturating_add(self.page_size).min(total);
        start.min(total)..end
    }
}
