//! Derived state handed to presentation components.

use std::collections::BTreeMap;

use serde::Serialize;

use super::DataTable;
use crate::facet::FacetFilter;
use crate::model::Column;
use crate::model::Row;
use crate::query::Direction;
use crate::query::Pagination;
use crate::query::SortSpec;

/// Read-only view of a table's derived state.
///
/// Everything a toolbar, header, body or pagination footer needs: the rows of
/// the current page, the filtered row count, facet menus, sort and page
/// cursor, and column visibility.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    table: &'a DataTable,
}

impl<'a> TableView<'a> {
    pub(super) fn new(table: &'a DataTable) -> Self {
        Self { table }
    }

    /// Returns the rows of the current page, in display order.
    pub fn page_rows(&self) -> Vec<&'a Row> {
        let table = self.table;
        let range = self.pagination().row_range(self.total_rows());
        table.matched[range]
            .iter()
            .map(|&index| &table.rows[index])
            .collect()
    }

    /// Returns the number of rows matching search and facets.
    pub fn total_rows(&self) -> usize {
        self.table.matched.len()
    }

    /// Returns the facet menus with their selections.
    pub fn facets(&self) -> &'a [FacetFilter] {
        &self.table.state.facets
    }

    /// Returns the active sort.
    pub fn sorting(&self) -> Option<&'a SortSpec> {
        self.table.state.sorting.as_ref()
    }

    /// Returns the sort direction of a column, if the table is sorted by it.
    pub fn sort_direction(&self, column_id: &str) -> Option<Direction> {
        self.sorting()
            .filter(|sort| sort.column_id == column_id)
            .map(|sort| sort.direction)
    }

    /// Returns the page cursor.
    pub fn pagination(&self) -> Pagination {
        self.table.state.pagination
    }

    /// Returns the visibility of every column.
    pub fn column_visibility(&self) -> &'a BTreeMap<String, bool> {
        &self.table.state.column_visibility
    }

    /// Returns the visible columns in declaration order.
    pub fn visible_columns(&self) -> Vec<&'a Column> {
        let table = self.table;
        table
            .columns
            .iter()
            .filter(|c| table.state.is_visible(&c.id))
            .collect()
    }

    /// Returns every column in declaration order.
    pub fn columns(&self) -> &'a [Column] {
        &self.table.columns
    }

    /// Returns the current search text.
    pub fn search_value(&self) -> &'a str {
        &self.table.state.search
    }

    /// Returns the column searched by the toolbar input.
    pub fn search_column(&self) -> Option<&'a Column> {
        let id = self.table.config.search_column_id.as_deref()?;
        self.table.columns.iter().find(|c| c.id == id)
    }

    /// Returns `true` if search text or a facet selection is active.
    pub fn is_filtered(&self) -> bool {
        self.table.state.is_filtered()
    }

    /// Returns the number of pages. An empty result has one page.
    pub fn page_count(&self) -> usize {
        self.pagination().page_count(self.total_rows())
    }

    /// Returns `true` if a previous page exists.
    pub fn can_previous_page(&self) -> bool {
        self.pagination().page_index > 0
    }

    /// Returns `true` if a next page exists.
    pub fn can_next_page(&self) -> bool {
        self.pagination().page_index + 1 < self.page_count()
    }

    /// Returns the page sizes offered by the page size selector.
    pub fn page_size_options(&self) -> &'a [usize] {
        &self.table.config.page_size_options
    }

    /// Returns the link for a row, derived from its `id` column.
    ///
    /// `None` without a configured link base or when the row has no id.
    pub fn row_link(&self, row: &Row) -> Option<String> {
        let base = self.table.config.row_link_base.as_deref()?;
        let id = row.id().filter(|id| !id.is_null())?;
        Some(format!("{}/{}", base.trim_end_matches('/'), id))
    }

    /// Returns a serializable copy of the output contract.
    pub fn snapshot(&self) -> TableSnapshot<'a> {
        TableSnapshot {
            page_rows: self.page_rows(),
            total_rows: self.total_rows(),
            page_count: self.page_count(),
            facets: self.facets(),
            sorting: self.sorting(),
            pagination: self.pagination(),
            column_visibility: self.column_visibility(),
            search: self.search_value(),
        }
    }
}

/// Serializable output contract of a table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSnapshot<'a> {
    pub page_rows: Vec<&'a Row>,
    pub total_rows: usize,
    pub page_count: usize,
    pub facets: &'a [FacetFilter],
    pub sorting: Option<&'a SortSpec>,
    pub pagination: Pagination,
    pub column_visibility: &'a BTreeMap<String, bool>,
    pub search: &'a str,
}
