//! Query state store.
//!
//! A [`DataTable`] owns the rows, the column model and the [`QueryState`].
//! Every action updates the state and synchronously re-derives the filtered,
//! sorted row set and the page cursor; [`DataTable::view`] exposes the result.

mod action;
mod state;
mod view;

use std::collections::HashSet;

use log::debug;
use log::trace;

pub use action::*;
pub use state::*;
pub use view::*;

use crate::config::TableConfig;
use crate::config::TableSource;
use crate::error::ColumnRole;
use crate::error::TableError;
use crate::facet::compute_facets;
use crate::model::Column;
use crate::model::Row;
use crate::query::Pagination;
use crate::query::SortSpec;
use crate::query::apply_facets;
use crate::query::apply_search;
use crate::query::apply_sort;

/// A table instance: static rows and columns plus mutable query state.
///
/// The configuration is validated once at construction; afterwards every
/// action is total and references to unknown columns or values are ignored.
///
/// # Example
///
/// ```
/// use datatable_lib::{DataTable, TableConfig};
/// use datatable_lib::model::{Column, Row};
///
/// let columns = vec![
///     Column::new("name", "Name"),
///     Column::new("status", "Status").facet(),
/// ];
/// let rows = vec![
///     Row::new().set("id", 1i64).set("name", "Bee").set("status", "done"),
///     Row::new().set("id", 2i64).set("name", "ant").set("status", "todo"),
///     Row::new().set("id", 3i64).set("name", "bee").set("status", "done"),
/// ];
///
/// let mut table = DataTable::new(columns, rows, TableConfig::new().with_search_column("name"))?;
/// table.set_search_value("be");
/// table.toggle_facet_value("status", "done");
/// table.set_sorting("name");
///
/// assert_eq!(table.view().total_rows(), 2);
/// # Ok::<(), datatable_lib::TableError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DataTable {
    columns: Vec<Column>,
    rows: Vec<Row>,
    config: TableConfig,
    state: QueryState,
    /// Indices into `rows` after search, facets and sort.
    matched: Vec<usize>,
}

impl DataTable {
    /// Creates a table, validating the column model against the configuration.
    pub fn new(
        mut columns: Vec<Column>,
        rows: Vec<Row>,
        config: TableConfig,
    ) -> Result<Self, TableError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.id.as_str()) {
                return Err(TableError::duplicate(&column.id));
            }
        }

        if let Some(search) = &config.search_column_id
            && !seen.contains(search.as_str())
        {
            return Err(TableError::unknown(search, ColumnRole::Search));
        }

        for facet_id in &config.facet_column_ids {
            match columns.iter_mut().find(|c| &c.id == facet_id) {
                Some(column) => column.facet = true,
                None => return Err(TableError::unknown(facet_id, ColumnRole::Facet)),
            }
        }

        if let Some(sort) = &config.initial_sort {
            match columns.iter().find(|c| c.id == sort.column_id) {
                Some(column) if !column.sortable => {
                    return Err(TableError::not_sortable(&column.id));
                }
                Some(_) => {}
                None => return Err(TableError::unknown(&sort.column_id, ColumnRole::Sort)),
            }
        }

        if config.page_size == 0 || config.page_size_options.contains(&0) {
            return Err(TableError::InvalidPageSize);
        }

        let facets = compute_facets(&columns, &rows);
        let state = QueryState::new(
            &columns,
            facets,
            config.initial_sort.clone(),
            config.page_size,
        );

        debug!(
            "DataTable: {} columns, {} rows, {} facets",
            columns.len(),
            rows.len(),
            state.facets.len()
        );

        let mut table = Self {
            columns,
            rows,
            config,
            state,
            matched: Vec::new(),
        };
        table.refresh();
        Ok(table)
    }

    /// Creates a table from a [`TableSource`].
    pub fn from_source(source: TableSource) -> Result<Self, TableError> {
        Self::new(source.columns, source.rows, source.config)
    }

    /// Returns the derived state for rendering.
    pub fn view(&self) -> TableView<'_> {
        TableView::new(self)
    }

    /// Returns the current query state.
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Returns the column model.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns all rows, unfiltered.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the configuration the table was built with.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    // =========================================================================
    // Derived state
    // =========================================================================

    /// Re-runs search, facets and sort over the original rows, then clamps
    /// the page cursor to the new row count.
    fn refresh(&mut self) {
        let indexed: Vec<(usize, &Row)> = self.rows.iter().enumerate().collect();
        let searched = apply_search(
            indexed,
            self.config.search_column_id.as_deref(),
            &self.state.search,
        );
        let filtered = apply_facets(searched, &self.state.facets);
        let sorted = apply_sort(filtered, self.state.sorting.as_ref(), &self.columns);
        self.matched = sorted.into_iter().map(|(index, _)| index).collect();

        self.state.pagination = self.state.pagination.clamp(self.matched.len());

        trace!(
            "DataTable: {} of {} rows match, page {}",
            self.matched.len(),
            self.rows.len(),
            self.state.pagination.page_index
        );
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Applies an action.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::SetSearchValue(text) => self.set_search_value(text),
            Action::ToggleFacetValue { column_id, value } => {
                self.toggle_facet_value(&column_id, &value)
            }
            Action::ClearFacet(column_id) => self.clear_facet(&column_id),
            Action::ResetFilters => self.reset_filters(),
            Action::SetSorting(column_id) => self.set_sorting(&column_id),
            Action::SetSort(sort) => self.set_sort(sort),
            Action::SetColumnVisibility { column_id, visible } => {
                self.set_column_visibility(&column_id, visible)
            }
            Action::ToggleColumnVisibility(column_id) => self.toggle_column_visibility(&column_id),
            Action::SetPagination(pagination) => self.set_pagination(pagination),
            Action::SetPageSize(size) => self.set_page_size(size),
            Action::GoToPage(page_index) => self.go_to_page(page_index),
            Action::NextPage => self.next_page(),
            Action::PreviousPage => self.previous_page(),
            Action::FirstPage => self.first_page(),
            Action::LastPage => self.last_page(),
        }
    }

    /// Replaces the search text and returns to the first page.
    pub fn set_search_value(&mut self, text: impl Into<String>) {
        self.state.search = text.into();
        self.state.pagination.page_index = 0;
        debug!("DataTable: search '{}'", self.state.search);
        self.refresh();
    }

    /// Selects `value` in the facet of `column_id`, or deselects it if it is
    /// already selected. The page cursor is kept, then clamped.
    pub fn toggle_facet_value(&mut self, column_id: &str, value: &str) {
        let Some(facet) = self.state.facet_mut(column_id) else {
            debug!("DataTable: ignoring toggle on unknown facet '{}'", column_id);
            return;
        };
        if !facet.toggle(value) {
            debug!(
                "DataTable: ignoring toggle of '{}', not an option of facet '{}'",
                value, column_id
            );
            return;
        }
        debug!("DataTable: facet '{}' selection {:?}", column_id, facet.selected);
        self.refresh();
    }

    /// Deselects every value of a facet.
    pub fn clear_facet(&mut self, column_id: &str) {
        let Some(facet) = self.state.facet_mut(column_id) else {
            debug!("DataTable: ignoring clear of unknown facet '{}'", column_id);
            return;
        };
        facet.selected.clear();
        self.refresh();
    }

    /// Clears the search text and every facet selection.
    pub fn reset_filters(&mut self) {
        self.state.search.clear();
        for facet in &mut self.state.facets {
            facet.selected.clear();
        }
        self.state.pagination.page_index = 0;
        debug!("DataTable: filters reset");
        self.refresh();
    }

    /// Advances the sort of a column through the configured [`SortCycle`](crate::SortCycle).
    pub fn set_sorting(&mut self, column_id: &str) {
        if !self.is_sortable(column_id) {
            return;
        }
        let next = self.config.sort_cycle.next(self.state.sorting.as_ref(), column_id);
        self.apply_sorting(next);
    }

    /// Replaces the sort. `None` clears it.
    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        if let Some(spec) = &sort
            && !self.is_sortable(&spec.column_id)
        {
            return;
        }
        self.apply_sorting(sort);
    }

    fn is_sortable(&self, column_id: &str) -> bool {
        match self.column(column_id) {
            Some(column) if column.sortable => true,
            Some(_) => {
                debug!("DataTable: ignoring sort on unsortable column '{}'", column_id);
                false
            }
            None => {
                debug!("DataTable: ignoring sort on unknown column '{}'", column_id);
                false
            }
        }
    }

    fn apply_sorting(&mut self, sort: Option<SortSpec>) {
        debug!("DataTable: sorting {:?}", sort);
        self.state.sorting = sort;
        self.refresh();
    }

    /// Shows or hides a column. Filtering and paging are unaffected.
    pub fn set_column_visibility(&mut self, column_id: &str, visible: bool) {
        match self.column(column_id).map(|c| c.hideable) {
            Some(true) => {
                self.state
                    .column_visibility
                    .insert(column_id.to_string(), visible);
                debug!("DataTable: column '{}' visible={}", column_id, visible);
            }
            Some(false) => debug!("DataTable: column '{}' visibility is fixed", column_id),
            None => debug!("DataTable: ignoring visibility of unknown column '{}'", column_id),
        }
    }

    /// Flips the visibility of a column.
    pub fn toggle_column_visibility(&mut self, column_id: &str) {
        let visible = self.state.is_visible(column_id);
        self.set_column_visibility(column_id, !visible);
    }

    /// Replaces the page cursor, clamped to the current row count.
    ///
    /// A zero page size is ignored.
    pub fn set_pagination(&mut self, pagination: Pagination) {
        if pagination.page_size == 0 {
            debug!("DataTable: ignoring zero page size");
            return;
        }
        self.state.pagination = pagination.clamp(self.matched.len());
    }

    /// Changes the page size, moving to the page that holds the current top
    /// row. A zero page size is ignored.
    pub fn set_page_size(&mut self, page_size: usize) {
        let current = self.state.pagination;
        let first_row = current.row_range(self.matched.len()).start;
        self.set_pagination(Pagination::new(first_row / page_size.max(1), page_size));
    }

    /// Moves to a zero-based page, clamped to the last page.
    pub fn go_to_page(&mut self, page_index: usize) {
        let pagination = self.state.pagination;
        self.set_pagination(Pagination {
            page_index,
            ..pagination
        });
    }

    /// Moves to the next page, if there is one.
    pub fn next_page(&mut self) {
        let pagination = self.state.pagination;
        self.set_pagination(Pagination {
            page_index: pagination.page_index.saturating_add(1),
            ..pagination
        });
    }

    /// Moves to the previous page, if there is one.
    pub fn previous_page(&mut self) {
        let pagination = self.state.pagination;
        self.set_pagination(Pagination {
            page_index: pagination.page_index.saturating_sub(1),
            ..pagination
        });
    }

    /// Moves to the first page.
    pub fn first_page(&mut self) {
        self.state.pagination.page_index = 0;
    }

    /// Moves to the last page.
    pub fn last_page(&mut self) {
        let pagination = self.state.pagination;
        self.state.pagination.page_index = pagination.page_count(self.matched.len()) - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortCycle;
    use crate::query::Direction;

    fn table(config: TableConfig) -> DataTable {
        let columns = vec![
            Column::new("id", "Id"),
            Column::new("name", "Name"),
            Column::new("status", "Status").facet(),
            Column::new("notes", "Notes").hidden(),
            Column::new("kind", "Kind").unsortable().fixed_visibility(),
        ];
        let rows = (1..=25i64)
            .map(|i| {
                Row::new()
                    .set("id", i)
                    .set("name", format!("item {}", i))
                    .set("status", if i % 2 == 0 { "even" } else { "odd" })
                    .set("kind", "k")
            })
            .collect();
        DataTable::new(columns, rows, config).unwrap()
    }

    #[test]
    fn test_defaults() {
        let table = table(TableConfig::new());
        let state = table.state();
        assert!(state.search.is_empty());
        assert_eq!(state.sorting, None);
        assert_eq!(state.pagination, Pagination::new(0, 10));
        assert!(state.is_visible("name"));
        assert!(!state.is_visible("notes"));
        assert_eq!(table.view().total_rows(), 25);
        assert_eq!(table.view().page_rows().len(), 10);
    }

    #[test]
    fn test_rejects_duplicate_column() {
        let columns = vec![Column::new("id", "Id"), Column::new("id", "Again")];
        let err = DataTable::new(columns, Vec::new(), TableConfig::new()).unwrap_err();
        assert_eq!(err, TableError::duplicate("id"));
    }

    #[test]
    fn test_rejects_unknown_columns() {
        let columns = || vec![Column::new("id", "Id")];
        let config = TableConfig::new().with_search_column("name");
        let err = DataTable::new(columns(), Vec::new(), config).unwrap_err();
        assert_eq!(err, TableError::unknown("name", ColumnRole::Search));

        let config = TableConfig::new().with_facet_columns(["status"]);
        let err = DataTable::new(columns(), Vec::new(), config).unwrap_err();
        assert_eq!(err, TableError::unknown("status", ColumnRole::Facet));

        let err = DataTable::new(
            columns(),
            Vec::new(),
            TableConfig::new().with_initial_sort(SortSpec::asc("size")),
        )
        .unwrap_err();
        assert_eq!(err, TableError::unknown("size", ColumnRole::Sort));
    }

    #[test]
    fn test_rejects_bad_sort_and_page_size() {
        let columns = || vec![Column::new("id", "Id").unsortable()];
        let err = DataTable::new(
            columns(),
            Vec::new(),
            TableConfig::new().with_initial_sort(SortSpec::asc("id")),
        )
        .unwrap_err();
        assert_eq!(err, TableError::not_sortable("id"));

        let config = TableConfig::new().with_page_size(0);
        let err = DataTable::new(columns(), Vec::new(), config).unwrap_err();
        assert_eq!(err, TableError::InvalidPageSize);
    }

    #[test]
    fn test_config_facet_columns_are_added() {
        let table = table(TableConfig::new().with_facet_columns(["kind"]));
        let ids: Vec<_> = table.state().facets.iter().map(|f| f.column_id.as_str()).collect();
        assert_eq!(ids, ["status", "kind"]);
    }

    #[test]
    fn test_search_resets_page() {
        let mut table = table(TableConfig::new().with_search_column("name"));
        table.next_page();
        assert_eq!(table.state().pagination.page_index, 1);
        table.set_search_value("item");
        assert_eq!(table.state().pagination.page_index, 0);
        assert_eq!(table.view().total_rows(), 25);
    }

    #[test]
    fn test_facet_keeps_page_then_clamps() {
        let mut table = table(TableConfig::new());
        table.set_pagination(Pagination::new(1, 10));
        table.toggle_facet_value("status", "odd");
        // 13 odd rows: page 1 still exists
        assert_eq!(table.view().total_rows(), 13);
        assert_eq!(table.state().pagination.page_index, 1);

        table.set_pagination(Pagination::new(2, 5));
        table.toggle_facet_value("status", "odd");
        table.toggle_facet_value("status", "even");
        // 12 even rows at page size 5: page 2 still exists
        assert_eq!(table.state().pagination.page_index, 2);

        table.set_pagination(Pagination::new(2, 10));
        // 12 rows at size 10 only have pages 0 and 1
        assert_eq!(table.state().pagination.page_index, 1);
    }

    #[test]
    fn test_unknown_references_are_ignored() {
        let mut table = table(TableConfig::new());
        let before = table.state().clone();
        table.toggle_facet_value("name", "item 1");
        table.toggle_facet_value("status", "missing");
        table.clear_facet("nope");
        table.set_sorting("nope");
        table.set_sorting("kind");
        table.set_sort(Some(SortSpec::asc("nope")));
        table.set_column_visibility("nope", false);
        table.set_column_visibility("kind", false);
        table.set_pagination(Pagination::new(0, 0));
        table.set_page_size(0);
        assert_eq!(table.state(), &before);
    }

    #[test]
    fn test_sorting_toggle_cycle() {
        let mut table = table(TableConfig::new());
        table.set_sorting("id");
        assert_eq!(table.state().sorting, Some(SortSpec::asc("id")));
        table.set_sorting("id");
        assert_eq!(table.state().sorting, Some(SortSpec::desc("id")));
        assert_eq!(table.view().page_rows()[0].display("id"), "25");
        table.set_sorting("id");
        assert_eq!(table.state().sorting, Some(SortSpec::asc("id")));
    }

    #[test]
    fn test_sorting_tri_state_cycle() {
        let mut table = table(TableConfig::new().with_sort_cycle(SortCycle::TriState));
        table.set_sorting("id");
        table.set_sorting("id");
        table.set_sorting("id");
        assert_eq!(table.state().sorting, None);
        assert_eq!(table.view().sort_direction("id"), None);
        table.set_sorting("id");
        assert_eq!(table.view().sort_direction("id"), Some(Direction::Asc));
    }

    #[test]
    fn test_visibility_does_not_touch_rows() {
        let mut table = table(TableConfig::new());
        table.set_pagination(Pagination::new(2, 10));
        table.toggle_column_visibility("name");
        assert!(!table.state().is_visible("name"));
        assert_eq!(table.state().pagination.page_index, 2);
        assert_eq!(table.view().page_rows().len(), 5);
        table.toggle_column_visibility("notes");
        assert!(table.state().is_visible("notes"));
    }

    #[test]
    fn test_page_navigation() {
        let mut table = table(TableConfig::new());
        table.previous_page();
        assert_eq!(table.state().pagination.page_index, 0);
        table.last_page();
        assert_eq!(table.state().pagination.page_index, 2);
        table.next_page();
        assert_eq!(table.state().pagination.page_index, 2);
        assert!(!table.view().can_next_page());
        assert!(table.view().can_previous_page());
        table.first_page();
        assert_eq!(table.state().pagination.page_index, 0);
        table.go_to_page(1);
        assert_eq!(table.state().pagination.page_index, 1);
        table.go_to_page(99);
        assert_eq!(table.state().pagination.page_index, 2);
    }

    #[test]
    fn test_page_size_keeps_top_row() {
        let mut table = table(TableConfig::new());
        table.set_pagination(Pagination::new(2, 10));
        table.set_page_size(5);
        // row 20 was on top; with size 5 it is on page 4
        assert_eq!(table.state().pagination, Pagination::new(4, 5));
        assert_eq!(table.view().page_rows()[0].display("id"), "21");
    }

    #[test]
    fn test_reset_filters() {
        let mut table = table(TableConfig::new().with_search_column("name"));
        table.set_search_value("1");
        table.toggle_facet_value("status", "odd");
        assert!(table.state().is_filtered());
        table.reset_filters();
        assert!(!table.state().is_filtered());
        assert_eq!(table.view().total_rows(), 25);
    }

    #[test]
    fn test_dispatch() {
        let mut table = table(TableConfig::new().with_search_column("name"));
        table.dispatch(Action::search("item 2"));
        table.dispatch(Action::sort_by("id"));
        table.dispatch(Action::sort_by("id"));
        let view = table.view();
        let ids: Vec<_> = view.page_rows().iter().map(|r| r.display("id")).collect();
        assert_eq!(ids, ["25", "24", "23", "22", "21", "20", "2"]);
    }
}
