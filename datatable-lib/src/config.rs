//! Table configuration

use serde::Deserialize;
use serde::Serialize;

use crate::model::Column;
use crate::model::Row;
use crate::query::DEFAULT_PAGE_SIZE;
use crate::query::Direction;
use crate::query::SortSpec;

/// What repeated sort requests on the same column do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortCycle {
    /// none → ascending → descending → ascending → ...
    #[default]
    Toggle,
    /// none → ascending → descending → none → ...
    TriState,
}

impl SortCycle {
    /// Returns the sort after a request on `column_id`, given the current sort.
    ///
    /// A request on a different column always starts ascending.
    pub fn next(self, current: Option<&SortSpec>, column_id: &str) -> Option<SortSpec> {
        match current {
            Some(sort) if sort.column_id == column_id => match (sort.direction, self) {
                (Direction::Asc, _) => Some(SortSpec::desc(column_id)),
                (Direction::Desc, SortCycle::Toggle) => Some(SortSpec::asc(column_id)),
                (Direction::Desc, SortCycle::TriState) => None,
            },
            _ => Some(SortSpec::asc(column_id)),
        }
    }
}

/// Configuration supplied when a table is constructed.
///
/// # Example
///
/// ```
/// use datatable_lib::{SortCycle, TableConfig};
///
/// let config = TableConfig::default()
///     .with_search_column("name")
///     .with_facet_columns(["status"])
///     .with_page_size(20)
///     .with_sort_cycle(SortCycle::TriState);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableConfig {
    /// Column searched by the toolbar input.
    pub search_column_id: Option<String>,

    /// Columns offered as faceted filters, in addition to columns flagged
    /// with `facet`.
    pub facet_column_ids: Vec<String>,

    /// Initial rows per page.
    ///
    /// Default: 10
    pub page_size: usize,

    /// Page sizes offered by the page size selector.
    ///
    /// Default: 10, 20, 30, 40, 50
    pub page_size_options: Vec<usize>,

    /// Behavior of repeated sort requests on one column.
    pub sort_cycle: SortCycle,

    /// Sort applied when the table is created.
    pub initial_sort: Option<SortSpec>,

    /// Base path for links derived from the `id` column.
    pub row_link_base: Option<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            search_column_id: None,
            facet_column_ids: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![10, 20, 30, 40, 50],
            sort_cycle: SortCycle::Toggle,
            initial_sort: None,
            row_link_base: None,
        }
    }
}

impl TableConfig {
    /// Creates a new table config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search column.
    pub fn with_search_column(mut self, column_id: impl Into<String>) -> Self {
        self.search_column_id = Some(column_id.into());
        self
    }

    /// Adds faceted filter columns.
    pub fn with_facet_columns<I, S>(mut self, column_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facet_column_ids
            .extend(column_ids.into_iter().map(Into::into));
        self
    }

    /// Sets the initial page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the page sizes offered by the page size selector.
    pub fn with_page_size_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.page_size_options = options.into();
        self
    }

    /// Sets the sort cycle.
    pub fn with_sort_cycle(mut self, sort_cycle: SortCycle) -> Self {
        self.sort_cycle = sort_cycle;
        self
    }

    /// Sets the initial sort.
    pub fn with_initial_sort(mut self, sort: SortSpec) -> Self {
        self.initial_sort = Some(sort);
        self
    }

    /// Sets the base path for row links.
    pub fn with_row_link_base(mut self, base: impl Into<String>) -> Self {
        self.row_link_base = Some(base.into());
        self
    }
}

/// Columns, rows and configuration of one table, as stored on disk.
///
/// ```json
/// {
///   "columns": [{ "id": "name", "title": "Name" }],
///   "rows": [{ "id": 1, "name": "Bee" }],
///   "searchColumnId": "name",
///   "pageSize": 20
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSource {
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Row>,
    #[serde(flatten)]
    pub config: TableConfig,
}
