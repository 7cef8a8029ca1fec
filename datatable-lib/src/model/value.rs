//! Value enum for dynamic cell values

use serde::Deserialize;
use serde::Serialize;

/// Stringified form shared by null and missing cells.
///
/// Search, facets and default cell rendering all see an absent value as this
/// string, so "empty" is an ordinary facet option.
pub const EMPTY_VALUE: &str = "";

/// A dynamic value that can hold any JSON-compatible cell.
///
/// # Type Mapping
///
/// | JSON | Rust Variant |
/// |------|--------------|
/// | null | `Null` |
/// | true / false | `Bool` |
/// | integer (fits `i64`) | `Int` |
/// | other number | `Float` |
/// | string | `String` |
/// | array, object | `Json` |
///
/// # Example
///
/// ```
/// use datatable_lib::model::Value;
///
/// let name = Value::from("Bee");
/// let count = Value::from(3i64);
/// let empty = Value::Null;
///
/// assert_eq!(count.to_display_string(), "3");
/// assert_eq!(empty.to_display_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
    /// Nested arrays and objects.
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a number if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Coerces the value to a number the way a numeric column reads it.
    ///
    /// Numbers pass through, booleans become `0`/`1` and strings are parsed
    /// after trimming. Anything else has no numeric reading.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Value::Int(_) | Value::Float(_) => self.as_f64(),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::String(s) => s.trim().parse().ok(),
            Value::Null | Value::Json(_) => None,
        }
    }

    /// Returns the string used for search matching, facet options and
    /// default cell rendering.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Null => EMPTY_VALUE.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(v) => v.to_string(),
            Value::Float(v) => format_float(*v),
            Value::String(s) => s.clone(),
            Value::Json(v) => v.to_string(),
        }
    }
}

/// Formats a float the way JSON-era tables print numbers: plain decimals
/// between `1e-6` and `1e21`, exponent form outside.
fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&v.abs()) {
        // f64 Display drops the fractional part of integral values
        return v.to_string();
    }
    let exp = format!("{:e}", v);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::String(s),
            other => Value::Json(other),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_display_strings() {
        assert_eq!(Value::Null.to_display_string(), "");
        assert_eq!(Value::from(true).to_display_string(), "true");
        assert_eq!(Value::from(42i64).to_display_string(), "42");
        assert_eq!(Value::from(1.5).to_display_string(), "1.5");
        assert_eq!(Value::from(3.0).to_display_string(), "3");
        assert_eq!(Value::from("Bee").to_display_string(), "Bee");
        assert_eq!(
            Value::from(json!(["a", 1])).to_display_string(),
            r#"["a",1]"#
        );
    }

    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<Value> = serde_json::from_value(json!([null, true, 7, 2.5, "x", {"k": 1}]))
            .unwrap();
        assert_eq!(values[0], Value::Null);
        assert_eq!(values[1], Value::Bool(true));
        assert_eq!(values[2], Value::Int(7));
        assert_eq!(values[3], Value::Float(2.5));
        assert_eq!(values[4], Value::String("x".into()));
        assert_eq!(values[5], Value::Json(json!({"k": 1})));
    }

    #[test]
    fn test_float_display_switches_to_exponent() {
        assert_eq!(Value::from(1e21).to_string(), "1e+21");
        assert_eq!(Value::from(1.5e-7).to_string(), "1.5e-7");
        assert_eq!(Value::from(1e20).to_string(), "100000000000000000000");
        assert_eq!(Value::from(0.000001).to_string(), "0.000001");
        assert_eq!(Value::from(-0.0).to_string(), "0");
        assert_eq!(Value::from(f64::INFINITY).to_string(), "Infinity");
    }

    #[test]
    fn test_to_number() {
        assert_eq!(Value::from(" 10 ").to_number(), Some(10.0));
        assert_eq!(Value::from("ten").to_number(), None);
        assert_eq!(Value::from(false).to_number(), Some(0.0));
        assert_eq!(Value::Null.to_number(), None);
    }
}
