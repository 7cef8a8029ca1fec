//! Pagination.

use std::ops::Range;

use serde::Deserialize;
use serde::Serialize;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Zero-based page cursor.
///
/// # Example
///
/// ```
/// use datatable_lib::query::Pagination;
///
/// let pagination = Pagination::new(2, 10);
/// assert_eq!(pagination.page_count(25), 3);
/// assert_eq!(pagination.row_range(25), 20..25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Zero-based page index.
    pub page_index: usize,
    /// Rows per page. Always positive once owned by a table.
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Creates a pagination cursor.
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    /// Returns the number of pages needed for `total` rows.
    ///
    /// An empty result still has one (empty) page.
    pub fn page_count(&self, total: usize) -> usize {
        if self.page_size == 0 {
            return 1;
        }
        total.div_ceil(self.page_size).max(1)
    }

    /// Returns the cursor with `page_index` moved onto the last page if it
    /// points past the end.
    pub fn clamp(self, total: usize) -> Self {
        let last = self.page_count(total) - 1;
        Self {
            page_index: self.page_index.min(last),
            ..self
        }
    }

    /// Returns the row range of the current page within `total` rows.
    ///
    /// Out-of-range pages yield an empty range at the end.
    pub fn row_range(&self, total: usize) -> Range<usize> {
        let start = self.page_index.saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);
        start..end
    }
}

/// Returns the rows of the current page.
///
/// The slice is clamped to the available rows; an out-of-range page is empty.
pub fn paginate<'a, T>(rows: &'a [T], pagination: &Pagination) -> &'a [T] {
    &rows[pagination.row_range(rows.len())]
}
