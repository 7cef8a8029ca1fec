//! State-mutating actions dispatched by presentation components.

use crate::query::Pagination;
use crate::query::SortSpec;

/// A request to change the query state of a table.
///
/// Toolbar, column header, facet menu and pagination controls build these
/// and hand them to [`DataTable::dispatch`](super::DataTable::dispatch) or
/// [`TableContext::dispatch`](crate::TableContext::dispatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the search text. Returns to the first page.
    SetSearchValue(String),
    /// Select or deselect one value of a facet.
    ToggleFacetValue { column_id: String, value: String },
    /// Deselect every value of a facet.
    ClearFacet(String),
    /// Clear the search text and every facet selection.
    ResetFilters,
    /// Advance the sort cycle of a column (header click).
    SetSorting(String),
    /// Replace the sort directly (header menu).
    SetSort(Option<SortSpec>),
    /// Show or hide a column.
    SetColumnVisibility { column_id: String, visible: bool },
    /// Flip the visibility of a column.
    ToggleColumnVisibility(String),
    /// Replace the page cursor.
    SetPagination(Pagination),
    /// Change the page size, keeping the current top row in view.
    SetPageSize(usize),
    /// Jump to a zero-based page, clamped to the last page.
    GoToPage(usize),
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
}

impl Action {
    /// Creates a search action.
    pub fn search(text: impl Into<String>) -> Self {
        Action::SetSearchValue(text.into())
    }

    /// Creates a facet toggle action.
    pub fn toggle_facet(column_id: impl Into<String>, value: impl Into<String>) -> Self {
        Action::ToggleFacetValue {
            column_id: column_id.into(),
            value: value.into(),
        }
    }

    /// Creates a header sort click action.
    pub fn sort_by(column_id: impl Into<String>) -> Self {
        Action::SetSorting(column_id.into())
    }

    /// Creates a visibility action.
    pub fn visibility(column_id: impl Into<String>, visible: bool) -> Self {
        Action::SetColumnVisibility {
            column_id: column_id.into(),
            visible,
        }
    }
}
