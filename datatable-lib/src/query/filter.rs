//! Faceted filtering.

use crate::facet::FacetFilter;
use crate::model::RowRef;

/// Keeps rows matching every active facet.
///
/// A row matches a facet when its stringified cell equals one of the selected
/// values, ignoring case. Facets combine with AND; values within a facet
/// combine with OR. With no active facet the rows are returned unchanged.
pub fn apply_facets<T: RowRef>(rows: Vec<T>, facets: &[FacetFilter]) -> Vec<T> {
    let active: Vec<(&str, Vec<String>)> = facets
        .iter()
        .filter(|facet| facet.is_active())
        .map(|facet| {
            let selected = facet.selected.iter().map(|v| v.to_lowercase()).collect();
            (facet.column_id.as_str(), selected)
        })
        .collect();

    if active.is_empty() {
        return rows;
    }

    rows.into_iter()
        .filter(|row| {
            active.iter().all(|(column_id, selected)| {
                let cell = row.row().display(column_id).to_lowercase();
                selected.iter().any(|value| *value == cell)
            })
        })
        .collect()
}
