//! The loosely-typed row shared by every source dataset.
//!
//! Spreadsheet exports disagree on value types: the same Course ID arrives as
//! `5`, `5.0` or `"5"` depending on the sheet. `Record` keeps the JSON value
//! as-is and offers coercing accessors, so identity comparisons happen on one
//! string form regardless of how the value was encoded.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single source row: an ordered JSON object keyed by canonical field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Non-null value of `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|value| !value.is_null())
    }

    /// String-coerced identity value of `field`. `None` means the record is
    /// unindexable on that field.
    #[must_use]
    pub fn key(&self, field: &str) -> Option<String> {
        self.0.get(field).and_then(coerce_key)
    }

    /// Lower-cased key, for case-insensitive code comparisons.
    #[must_use]
    pub fn key_lower(&self, field: &str) -> Option<String> {
        self.key(field).map(|key| key.to_lowercase())
    }

    /// Integer-coerced value of `field` (numbers or numeric strings).
    #[must_use]
    pub fn integer(&self, field: &str) -> Option<i64> {
        self.0.get(field).and_then(coerce_integer)
    }

    /// Text form of a scalar field. Same coercion as [`Record::key`].
    #[must_use]
    pub fn text(&self, field: &str) -> Option<String> {
        self.key(field)
    }

    /// List form of `field`: a JSON array of scalars, or one comma-separated
    /// string. Blank entries are dropped.
    #[must_use]
    pub fn list(&self, field: &str) -> Vec<String> {
        match self.get(field) {
            Some(Value::Array(items)) => items.iter().filter_map(coerce_key).collect(),
            Some(value) => coerce_key(value)
                .map(|text| {
                    text.split(',')
                        .map(str::trim)
                        .filter(|item| !item.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            None => Vec::new(),
        }
    }

    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Coerce a JSON scalar to its identity string.
///
/// Whole floats render as integers (`5.0` → `"5"`), strings are trimmed, and
/// null, empty strings, arrays and objects have no identity.
#[must_use]
pub fn coerce_key(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Some(int.to_string());
            }
            if let Some(uint) = number.as_u64() {
                return Some(uint.to_string());
            }
            number.as_f64().map(|float| match whole_float(float) {
                Some(int) => int.to_string(),
                None => float.to_string(),
            })
        }
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerce a JSON scalar to an integer. Fractional values are rejected.
#[must_use]
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(whole_float)),
        Value::String(text) => {
            let trimmed = text.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(whole_float))
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn whole_float(float: f64) -> Option<i64> {
    if float.is_finite() && float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
        Some(float as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> Record {
        serde_json::from_value(value).expect("record should deserialize")
    }

    #[test]
    fn key_coerces_numbers_and_strings_to_one_form() {
        let a = record(json!({"Course ID": 5}));
        let b = record(json!({"Course ID": 5.0}));
        let c = record(json!({"Course ID": " 5 "}));
        assert_eq!(a.key("Course ID").as_deref(), Some("5"));
        assert_eq!(b.key("Course ID").as_deref(), Some("5"));
        assert_eq!(c.key("Course ID").as_deref(), Some("5"));
    }

    #[test]
    fn missing_null_and_blank_values_have_no_key() {
        let r = record(json!({"Course ID": null, "Course Code": "   "}));
        assert_eq!(r.key("Course ID"), None);
        assert_eq!(r.key("Course Code"), None);
        assert_eq!(r.key("Room Number"), None);
    }

    #[test]
    fn fractional_floats_keep_their_fraction() {
        assert_eq!(coerce_key(&json!(2.5)).as_deref(), Some("2.5"));
        assert_eq!(coerce_integer(&json!(2.5)), None);
    }

    #[test]
    fn integer_accepts_numeric_strings() {
        assert_eq!(coerce_integer(&json!("7")), Some(7));
        assert_eq!(coerce_integer(&json!("7.0")), Some(7));
        assert_eq!(coerce_integer(&json!("seven")), None);
        assert_eq!(coerce_integer(&json!(true)), None);
    }

    #[test]
    fn get_hides_null_values() {
        let r = record(json!({"Length": null, "Credits": 3}));
        assert!(r.get("Length").is_none());
        assert_eq!(r.get("Credits"), Some(&json!(3)));
    }

    #[test]
    fn key_lower_folds_case() {
        let r = record(json!({"Course Code": "CS101"}));
        assert_eq!(r.key_lower("Course Code").as_deref(), Some("cs101"));
    }

    #[test]
    fn list_accepts_comma_strings_and_arrays() {
        let r = record(json!({
            "Available blocks": "1A, 1B,, 2C ",
            "Unavailable blocks": ["3A", 4],
            "Priority": null
        }));
        assert_eq!(r.list("Available blocks"), vec!["1A", "1B", "2C"]);
        assert_eq!(r.list("Unavailable blocks"), vec!["3A", "4"]);
        assert!(r.list("Priority").is_empty());
    }
}
