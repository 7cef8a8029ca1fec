//! Table construction errors

/// The part of the table configuration that referenced a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    /// The column searched by the toolbar input.
    Search,
    /// A column offered as a faceted filter.
    Facet,
    /// The column of the initial sort.
    Sort,
}

impl std::fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnRole::Search => write!(f, "search"),
            ColumnRole::Facet => write!(f, "facet"),
            ColumnRole::Sort => write!(f, "sort"),
        }
    }
}

/// Error raised when a table is constructed from an invalid column model or
/// configuration.
///
/// Once a [`DataTable`](crate::DataTable) exists, every operation on it is
/// total; stale references are ignored instead of reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Two columns share the same identifier.
    #[error("Column '{column}' is declared more than once")]
    DuplicateColumn { column: String },

    /// The configuration references a column that is not declared.
    #[error("Unknown {role} column '{column}'")]
    UnknownColumn { column: String, role: ColumnRole },

    /// The initial sort targets a column that cannot be sorted.
    #[error("Column '{column}' is not sortable")]
    NotSortable { column: String },

    /// The page size is zero.
    #[error("Page size must be greater than zero")]
    InvalidPageSize,
}

impl TableError {
    /// Creates a new duplicate column error.
    pub fn duplicate(column: impl Into<String>) -> Self {
        Self::DuplicateColumn {
            column: column.into(),
        }
    }

    /// Creates a new unknown column error.
    pub fn unknown(column: impl Into<String>, role: ColumnRole) -> Self {
        Self::UnknownColumn {
            column: column.into(),
            role,
        }
    }

    /// Creates a new not-sortable error.
    pub fn not_sortable(column: impl Into<String>) -> Self {
        Self::NotSortable {
            column: column.into(),
        }
    }
}
