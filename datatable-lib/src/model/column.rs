//! Column definitions

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use super::Row;
use crate::query::Direction;

/// Renders the content of a cell from its row.
pub type CellRenderer = Arc<dyn Fn(&Row) -> String + Send + Sync>;

/// Renders a column header given the column's active sort direction.
pub type HeaderRenderer = Arc<dyn Fn(&Column, Option<Direction>) -> String + Send + Sync>;

/// How cells of a column compare when the table is sorted by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueType {
    /// Cells group by kind and compare natively within a group.
    #[default]
    Auto,
    /// Cells compare as strings, case-sensitive, by code point.
    Text,
    /// Cells compare as numbers; cells without a numeric reading sort after.
    Number,
}

/// Column configuration.
///
/// The `id` is the join key against row fields. Columns define the header
/// title, how cells sort, whether the column is offered as a faceted filter
/// and whether it starts hidden.
///
/// # Examples
///
/// ```
/// use datatable_lib::model::{Column, ValueType};
///
/// let columns = vec![
///     Column::new("name", "Name"),
///     Column::new("status", "Status").facet(),
///     Column::new("size", "Size").value_type(ValueType::Number),
///     Column::new("notes", "Notes").hidden(),
/// ];
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Identifier, unique within a table.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Comparison used when sorting by this column.
    #[serde(default)]
    pub value_type: ValueType,
    /// Whether the column is offered as a faceted filter.
    #[serde(default)]
    pub facet: bool,
    /// Whether the column is invisible by default.
    #[serde(default)]
    pub hidden: bool,
    /// Whether the column responds to sort requests.
    #[serde(default = "default_true")]
    pub sortable: bool,
    /// Whether the column's visibility can be toggled.
    #[serde(default = "default_true")]
    pub hideable: bool,
    #[serde(skip)]
    cell: Option<CellRenderer>,
    #[serde(skip)]
    header: Option<HeaderRenderer>,
}

fn default_true() -> bool {
    true
}

impl Column {
    /// Create a new column with an id and a display title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            value_type: ValueType::Auto,
            facet: false,
            hidden: false,
            sortable: true,
            hideable: true,
            cell: None,
            header: None,
        }
    }

    /// Set the comparison used for sorting.
    pub fn value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    /// Offer the column as a faceted filter.
    pub fn facet(mut self) -> Self {
        self.facet = true;
        self
    }

    /// Hide the column by default.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Ignore sort requests on this column.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Keep the column's visibility fixed.
    pub fn fixed_visibility(mut self) -> Self {
        self.hideable = false;
        self
    }

    /// Set a custom cell renderer.
    pub fn cell<F>(mut self, render: F) -> Self
    where
        F: Fn(&Row) -> String + Send + Sync + 'static,
    {
        self.cell = Some(Arc::new(render));
        self
    }

    /// Set a custom header renderer.
    pub fn header<F>(mut self, render: F) -> Self
    where
        F: Fn(&Column, Option<Direction>) -> String + Send + Sync + 'static,
    {
        self.header = Some(Arc::new(render));
        self
    }

    /// Render the cell of this column for a row.
    ///
    /// Without a custom renderer this is the stringified cell value.
    pub fn render_cell(&self, row: &Row) -> String {
        match &self.cell {
            Some(render) => render(row),
            None => row.display(&self.id),
        }
    }

    /// Render the header of this column.
    ///
    /// Without a custom renderer this is the title followed by an arrow for
    /// the active sort direction.
    pub fn render_header(&self, sort: Option<Direction>) -> String {
        if let Some(render) = &self.header {
            return render(self, sort);
        }
        match sort {
            Some(Direction::Asc) => format!("{} ↑", self.title),
            Some(Direction::Desc) => format!("{} ↓", self.title),
            None => self.title.clone(),
        }
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("value_type", &self.value_type)
            .field("facet", &self.facet)
            .field("hidden", &self.hidden)
            .field("sortable", &self.sortable)
            .field("hideable", &self.hideable)
            .field("cell", &self.cell.is_some())
            .field("header", &self.header.is_some())
            .finish()
    }
}
