//! Mutable query state of a table.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::facet::FacetFilter;
use crate::model::Column;
use crate::query::Pagination;
use crate::query::SortSpec;

/// Everything a user can change about a table.
///
/// Created with the table and discarded with it. Facets carry their own
/// selections; their option sets never change after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    /// Text typed into the search input.
    pub search: String,
    /// Facet menus with their current selections.
    pub facets: Vec<FacetFilter>,
    /// Active sort, if any.
    pub sorting: Option<SortSpec>,
    /// Page cursor.
    pub pagination: Pagination,
    /// Visibility of every column, keyed by column id.
    pub column_visibility: BTreeMap<String, bool>,
}

impl QueryState {
    /// Creates the initial state for a column model.
    ///
    /// Every column not flagged `hidden` starts visible.
    pub(crate) fn new(
        columns: &[Column],
        facets: Vec<FacetFilter>,
        sorting: Option<SortSpec>,
        page_size: usize,
    ) -> Self {
        Self {
            search: String::new(),
            facets,
            sorting,
            pagination: Pagination::new(0, page_size),
            column_visibility: columns
                .iter()
                .map(|c| (c.id.clone(), !c.hidden))
                .collect(),
        }
    }

    /// Returns the facet for a column.
    pub fn facet(&self, column_id: &str) -> Option<&FacetFilter> {
        self.facets.iter().find(|f| f.column_id == column_id)
    }

    pub(crate) fn facet_mut(&mut self, column_id: &str) -> Option<&mut FacetFilter> {
        self.facets.iter_mut().find(|f| f.column_id == column_id)
    }

    /// Returns `true` if search text or any facet selection narrows the rows.
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || self.facets.iter().any(FacetFilter::is_active)
    }

    /// Returns `true` if the column is visible. Unknown columns are not.
    pub fn is_visible(&self, column_id: &str) -> bool {
        self.column_visibility
            .get(column_id)
            .copied()
            .unwrap_or(false)
    }
}
