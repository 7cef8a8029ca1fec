//! Search filtering.

use crate::model::RowRef;

/// Keeps rows whose search column contains `text`, ignoring case.
///
/// An empty `text` or an unset column returns `rows` unchanged. Matching is a
/// substring test on the stringified cell of a single column.
pub fn apply_search<T: RowRef>(rows: Vec<T>, column_id: Option<&str>, text: &str) -> Vec<T> {
    let Some(column_id) = column_id else {
        return rows;
    };
    if text.is_empty() {
        return rows;
    }

    let needle = text.to_lowercase();
    rows.into_iter()
        .filter(|row| {
            row.row()
                .display(column_id)
                .to_lowercase()
                .contains(&needle)
        })
        .collect()
}
