//! Sorting.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Column;
use crate::model::RowRef;
use crate::model::Value;
use crate::model::ValueType;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// The single active sort of a table.
///
/// # Example
///
/// ```
/// use datatable_lib::query::{Direction, SortSpec};
///
/// let sort = SortSpec::desc("size");
/// assert_eq!(sort.direction, Direction::Desc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    /// Column to sort by.
    pub column_id: String,
    /// Sort direction.
    pub direction: Direction,
}

impl SortSpec {
    /// Creates an ascending sort on a column.
    pub fn asc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending sort on a column.
    pub fn desc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: Direction::Desc,
        }
    }
}

/// Sorts rows by the column named in `sort`.
///
/// The sort is stable: rows whose cells compare equal keep their input order,
/// in both directions. Without a sort, or when the column is not declared, the
/// rows are returned unchanged.
pub fn apply_sort<T: RowRef>(rows: Vec<T>, sort: Option<&SortSpec>, columns: &[Column]) -> Vec<T> {
    let Some(sort) = sort else {
        return rows;
    };
    let Some(column) = columns.iter().find(|c| c.id == sort.column_id) else {
        return rows;
    };

    let value_type = column.value_type;
    let mut rows = rows;
    rows.sort_by(|a, b| {
        let ord = compare_cells(
            a.row().get(&column.id),
            b.row().get(&column.id),
            value_type,
        );
        match sort.direction {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    });
    rows
}

/// A cell reduced to what its column type orders by.
///
/// Variants are declared in block order: in an ascending sort booleans come
/// first, then numbers, then text, then values with no order of their own,
/// and empty cells last.
enum SortKey<'a> {
    Bool(bool),
    Number(f64),
    Text(&'a str),
    Unordered,
    Empty,
}

impl<'a> SortKey<'a> {
    fn new(value: Option<&'a Value>, value_type: ValueType) -> Self {
        let Some(value) = value.filter(|v| !v.is_null()) else {
            return SortKey::Empty;
        };
        match value_type {
            ValueType::Number => match value.to_number() {
                Some(n) if !n.is_nan() => SortKey::Number(n),
                _ => SortKey::Unordered,
            },
            _ => match value {
                Value::Bool(b) => SortKey::Bool(*b),
                Value::Int(_) | Value::Float(_) => {
                    value.as_f64().map_or(SortKey::Unordered, SortKey::Number)
                }
                Value::String(s) => SortKey::Text(s),
                Value::Null | Value::Json(_) => SortKey::Unordered,
            },
        }
    }

    fn block(&self) -> u8 {
        match self {
            SortKey::Bool(_) => 0,
            SortKey::Number(_) => 1,
            SortKey::Text(_) => 2,
            SortKey::Unordered => 3,
            SortKey::Empty => 4,
        }
    }
}

/// Compares two cells the way a column of the given type orders them.
///
/// The result is a total order, so every sort is consistent:
///
/// - `Auto` groups cells by kind (booleans, numbers, text, nested values,
///   then null or missing cells) and orders natively within a group.
/// - `Text` compares the stringified cells by code point.
/// - `Number` orders numeric readings, then cells without one, then empty
///   cells.
///
/// Nested values, and non-numeric cells of a `Number` column, compare equal
/// among themselves and keep their input order.
pub fn compare_cells(a: Option<&Value>, b: Option<&Value>, value_type: ValueType) -> Ordering {
    if value_type == ValueType::Text {
        let a = a.map(Value::to_display_string).unwrap_or_default();
        let b = b.map(Value::to_display_string).unwrap_or_default();
        return a.cmp(&b);
    }

    let a = SortKey::new(a, value_type);
    let b = SortKey::new(b, value_type);
    a.block().cmp(&b.block()).then_with(|| match (a, b) {
        (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(&b),
        (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(&b),
        (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
        _ => Ordering::Equal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;

    fn ids<T: RowRef>(rows: &[T]) -> Vec<String> {
        rows.iter().map(|r| r.row().display("id")).collect()
    }

    #[test]
    fn test_none_is_identity() {
        let rows = vec![
            Row::new().set("id", 2i64),
            Row::new().set("id", 1i64),
        ];
        let sorted = apply_sort(rows.iter().collect(), None, &[Column::new("id", "Id")]);
        assert_eq!(ids(&sorted), ["2", "1"]);
    }

    #[test]
    fn test_unknown_column_is_identity() {
        let rows = vec![
            Row::new().set("id", 2i64),
            Row::new().set("id", 1i64),
        ];
        let sorted = apply_sort(rows.iter().collect(), Some(&SortSpec::asc("size")), &[]);
        assert_eq!(ids(&sorted), ["2", "1"]);
    }

    #[test]
    fn test_auto_numbers_compare_numerically() {
        let columns = vec![Column::new("n", "N")];
        let rows = vec![
            Row::new().set("id", 1i64).set("n", 10i64),
            Row::new().set("id", 2i64).set("n", 9i64),
            Row::new().set("id", 3i64).set("n", 9.5),
        ];
        let sorted = apply_sort(rows.iter().collect(), Some(&SortSpec::asc("n")), &columns);
        assert_eq!(ids(&sorted), ["2", "3", "1"]);
    }

    #[test]
    fn test_text_compares_lexically() {
        let columns = vec![Column::new("n", "N").value_type(ValueType::Text)];
        let rows = vec![
            Row::new().set("id", 1i64).set("n", 10i64),
            Row::new().set("id", 2i64).set("n", 9i64),
        ];
        let sorted = apply_sort(rows.iter().collect(), Some(&SortSpec::asc("n")), &columns);
        assert_eq!(ids(&sorted), ["1", "2"]);
    }

    #[test]
    fn test_number_parses_strings() {
        let columns = vec![Column::new("n", "N").value_type(ValueType::Number)];
        let rows = vec![
            Row::new().set("id", 1i64).set("n", "10"),
            Row::new().set("id", 2i64).set("n", "9"),
            Row::new().set("id", 3i64).set("n", "n/a"),
        ];
        let sorted = apply_sort(rows.iter().collect(), Some(&SortSpec::asc("n")), &columns);
        assert_eq!(ids(&sorted), ["2", "1", "3"]);
    }

    #[test]
    fn test_number_orders_around_non_numeric_cells() {
        let columns = vec![Column::new("n", "N").value_type(ValueType::Number)];
        let rows = vec![
            Row::new().set("id", 1i64).set("n", 10i64),
            Row::new().set("id", 2i64).set("n", "n/a"),
            Row::new().set("id", 3i64).set("n", 9i64),
            Row::new().set("id", 4i64),
        ];
        let asc = apply_sort(rows.iter().collect(), Some(&SortSpec::asc("n")), &columns);
        assert_eq!(ids(&asc), ["3", "1", "2", "4"]);

        let desc = apply_sort(rows.iter().collect(), Some(&SortSpec::desc("n")), &columns);
        assert_eq!(ids(&desc), ["4", "2", "1", "3"]);
    }

    #[test]
    fn test_nulls_sort_as_one_block() {
        let columns = vec![Column::new("n", "N")];
        let rows = vec![
            Row::new().set("id", 1i64).set("n", 3i64),
            Row::new().set("id", 2i64).set("n", Value::Null),
            Row::new().set("id", 3i64).set("n", 1i64),
            Row::new().set("id", 4i64),
            Row::new().set("id", 5i64).set("n", 2i64),
        ];
        let asc = apply_sort(rows.iter().collect(), Some(&SortSpec::asc("n")), &columns);
        assert_eq!(ids(&asc), ["3", "5", "1", "2", "4"]);

        let desc = apply_sort(rows.iter().collect(), Some(&SortSpec::desc("n")), &columns);
        assert_eq!(ids(&desc), ["2", "4", "1", "5", "3"]);
    }

    #[test]
    fn test_bools_with_gaps() {
        let columns = vec![Column::new("b", "B")];
        let rows = vec![
            Row::new().set("id", 1i64).set("b", true),
            Row::new().set("id", 2i64).set("b", Value::Null),
            Row::new().set("id", 3i64).set("b", false),
            Row::new().set("id", 4i64).set("b", true),
        ];
        let sorted = apply_sort(rows.iter().collect(), Some(&SortSpec::asc("b")), &columns);
        assert_eq!(ids(&sorted), ["3", "1", "4", "2"]);
    }

    #[test]
    fn test_mixed_types_group_by_kind() {
        let columns = vec![Column::new("v", "V")];
        let rows = vec![
            Row::new().set("id", 1i64).set("v", 3i64),
            Row::new().set("id", 2i64).set("v", "b"),
            Row::new().set("id", 3i64).set("v", Value::Null),
            Row::new().set("id", 4i64).set("v", 1i64),
            Row::new().set("id", 5i64).set("v", "a"),
            Row::new().set("id", 6i64).set("v", Value::from(serde_json::json!([1]))),
            Row::new().set("id", 7i64).set("v", false),
        ];
        let sorted = apply_sort(rows.iter().collect(), Some(&SortSpec::asc("v")), &columns);
        assert_eq!(ids(&sorted), ["7", "4", "1", "5", "2", "6", "3"]);
    }

    #[test]
    fn test_descending_keeps_ties_in_input_order() {
        let columns = vec![Column::new("k", "K")];
        let rows = vec![
            Row::new().set("id", 1i64).set("k", "a"),
            Row::new().set("id", 2i64).set("k", "b"),
            Row::new().set("id", 3i64).set("k", "a"),
            Row::new().set("id", 4i64).set("k", "b"),
        ];
        let sorted = apply_sort(rows.iter().collect(), Some(&SortSpec::desc("k")), &columns);
        assert_eq!(ids(&sorted), ["2", "4", "1", "3"]);
    }

    #[test]
    fn test_case_sensitive_code_point_order() {
        let columns = vec![Column::new("name", "Name")];
        let rows = vec![
            Row::new().set("id", 3i64).set("name", "bee"),
            Row::new().set("id", 1i64).set("name", "Bee"),
        ];
        let sorted = apply_sort(rows.iter().collect(), Some(&SortSpec::asc("name")), &columns);
        assert_eq!(ids(&sorted), ["1", "3"]);
    }
}
