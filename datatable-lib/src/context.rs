use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use log::debug;

use crate::table::Action;
use crate::table::DataTable;
use crate::table::TableView;

/// Shared handle to one table instance.
///
/// `TableContext` is handed to every presentation component of a table
/// (toolbar, column headers, facet menus, body, pagination). Components read
/// derived state through [`read`](Self::read) and request changes through
/// [`dispatch`](Self::dispatch); the table itself is the only writer. Clones
/// share the same table.
///
/// # Example
///
/// ```
/// use datatable_lib::{Action, DataTable, TableConfig, TableContext};
/// use datatable_lib::model::{Column, Row};
///
/// let table = DataTable::new(
///     vec![Column::new("name", "Name")],
///     vec![Row::new().set("name", "Bee"), Row::new().set("name", "ant")],
///     TableConfig::new().with_search_column("name"),
/// )?;
/// let cx = TableContext::new(table);
///
/// let toolbar = cx.clone();
/// toolbar.dispatch(Action::search("an"));
///
/// assert!(cx.is_dirty());
/// assert_eq!(cx.read(|view| view.total_rows()), 1);
/// # Ok::<(), datatable_lib::TableError>(())
/// ```
#[derive(Debug)]
pub struct TableContext {
    inner: Arc<RwLock<DataTable>>,
    dirty: Arc<AtomicBool>,
}

impl TableContext {
    /// Wraps a table for sharing.
    pub fn new(table: DataTable) -> Self {
        Self {
            inner: Arc::new(RwLock::new(table)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Runs `f` against the current derived state.
    pub fn read<R, F>(&self, f: F) -> R
    where
        F: FnOnce(TableView<'_>) -> R,
    {
        let guard = self
            .inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(guard.view())
    }

    /// Applies an action and marks the context dirty.
    pub fn dispatch(&self, action: Action) {
        debug!("TableContext: dispatch {:?}", action);
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.dispatch(action);
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Get a clone of the table in its current state
    pub fn snapshot(&self) -> DataTable {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Check if an action has been dispatched since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for TableContext {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
