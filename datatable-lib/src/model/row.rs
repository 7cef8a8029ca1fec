//! Dynamic table row

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use super::Value;

/// Name of the implicit identity column shared by all rows.
pub const ID_COLUMN: &str = "id";

/// A single row of table data.
///
/// Rows hold cell values as a `HashMap<String, Value>` keyed by column id.
/// The table never mutates a row once it has been supplied.
///
/// # Example
///
/// ```
/// use datatable_lib::model::Row;
///
/// let row = Row::new()
///     .set("id", 1i64)
///     .set("name", "Bee");
///
/// assert_eq!(row.get("name").and_then(|v| v.as_str()), Some("Bee"));
/// assert_eq!(row.display("missing"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: HashMap<String, Value>,
}

impl Row {
    /// Creates a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of the implicit `id` column, if present.
    pub fn id(&self) -> Option<&Value> {
        self.get(ID_COLUMN)
    }

    /// Returns a reference to the cell value, if it exists.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    /// Returns the stringified cell, with missing cells mapped to the empty
    /// bucket.
    pub fn display(&self, column: &str) -> String {
        self.get(column)
            .map(Value::to_display_string)
            .unwrap_or_default()
    }

    /// Sets a cell value (builder pattern).
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(column.into(), value.into());
        self
    }
}

impl From<HashMap<String, Value>> for Row {
    fn from(fields: HashMap<String, Value>) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Anything the query pipeline can read a [`Row`] through.
///
/// Implemented for rows, references to rows and `(index, row)` pairs so the
/// same pipeline runs over owned rows, borrowed rows or indexed rows.
pub trait RowRef {
    /// Returns the underlying row.
    fn row(&self) -> &Row;
}

impl RowRef for Row {
    fn row(&self) -> &Row {
        self
    }
}

impl<T: RowRef + ?Sized> RowRef for &T {
    fn row(&self) -> &Row {
        (**self).row()
    }
}

impl<T: RowRef> RowRef for (usize, T) {
    fn row(&self) -> &Row {
        self.1.row()
    }
}
