//! Faceted filter menus derived from the full row set.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::Column;
use crate::model::RowRef;

/// A distinct value offered in a facet menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    /// Stringified cell value.
    pub value: String,
    /// Number of rows in the full dataset carrying this value.
    pub count: usize,
}

/// The filter menu for one facet-eligible column.
///
/// Options are computed once from the unfiltered rows; only `selected`
/// changes afterwards, so deselecting a value can always bring rows back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetFilter {
    /// Column the facet filters on.
    pub column_id: String,
    /// Title shown on the filter button.
    pub title: String,
    /// Distinct values in order of first appearance.
    pub options: Vec<FacetOption>,
    /// Currently selected values, a subset of `options`.
    pub selected: Vec<String>,
}

impl FacetFilter {
    /// Returns `true` if at least one value is selected.
    pub fn is_active(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Returns `true` if the value is selected.
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|s| s == value)
    }

    /// Returns the option with the given value.
    pub fn option(&self, value: &str) -> Option<&FacetOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Adds the value to the selection, or removes it if already selected.
    ///
    /// Returns `false` when the value is not one of the options.
    pub(crate) fn toggle(&mut self, value: &str) -> bool {
        if self.option(value).is_none() {
            return false;
        }
        if let Some(pos) = self.selected.iter().position(|s| s == value) {
            self.selected.remove(pos);
        } else {
            self.selected.push(value.to_string());
        }
        true
    }
}

/// Computes the facet menus for every facet-eligible column.
///
/// Facets follow column declaration order. Null and missing cells share the
/// empty bucket like any other value. An empty row set yields facets with no
/// options.
pub fn compute_facets<T: RowRef>(columns: &[Column], rows: &[T]) -> Vec<FacetFilter> {
    columns
        .iter()
        .filter(|column| column.facet)
        .map(|column| {
            let mut options: Vec<FacetOption> = Vec::new();
            let mut positions: HashMap<String, usize> = HashMap::new();

            for row in rows {
                let value = row.row().display(&column.id);
                match positions.get(&value) {
                    Some(&pos) => options[pos].count += 1,
                    None => {
                        positions.insert(value.clone(), options.len());
                        options.push(FacetOption { value, count: 1 });
                    }
                }
            }

            FacetFilter {
                column_id: column.id.clone(),
                title: column.title.clone(),
                options,
                selected: Vec::new(),
            }
        })
        .collect()
}
