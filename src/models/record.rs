//! Loose export records
//!
//! A record is whatever the caller hands to the CSV converter: a map from
//! field name to an arbitrary JSON value. Nothing is validated; unknown
//! fields are carried along and simply never looked up.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of exportable data, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style setter
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Set a field, replacing any previous value
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Raw value of a field, if present
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Text form of a field; `None` when the field is absent or null
    pub fn text(&self, field: &str) -> Option<String> {
        self.get(field).and_then(value_text)
    }

    /// Number of fields carried by the record
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// String form of a JSON value, as a browser would stringify it
///
/// Returns `None` for null. Integral numbers drop the fractional part,
/// arrays join their elements with commas (nulls become empty) and objects
/// collapse to `[object Object]`.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(if let Some(i) = n.as_i64() {
            i.to_string()
        } else if let Some(u) = n.as_u64() {
            u.to_string()
        } else {
            number_text(n.as_f64().unwrap_or(f64::NAN))
        }),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| value_text(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some("[object Object]".to_string()),
    }
}

/// Shortest round-trip text for a float, switching to exponent form outside
/// `1e-6..1e21`
fn number_text(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return n.to_string();
    }

    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_and_lookup() {
        let record = Record::new()
            .with("date", "2024-01-01")
            .with("amount", 10)
            .with("extra", true);

        assert_eq!(record.len(), 3);
        assert_eq!(record.text("date").as_deref(), Some("2024-01-01"));
        assert_eq!(record.text("amount").as_deref(), Some("10"));
        assert_eq!(record.text("missing"), None);
    }

    #[test]
    fn test_null_is_absent() {
        let record = Record::new().with("to_account", Value::Null);
        assert!(record.get("to_account").is_some());
        assert_eq!(record.text("to_account"), None);
    }

    #[test]
    fn test_number_text() {
        assert_eq!(value_text(&json!(10)).unwrap(), "10");
        assert_eq!(value_text(&json!(10.0)).unwrap(), "10");
        assert_eq!(value_text(&json!(-3)).unwrap(), "-3");
        assert_eq!(value_text(&json!(12.5)).unwrap(), "12.5");
        assert_eq!(value_text(&json!(0.1)).unwrap(), "0.1");
        assert_eq!(value_text(&json!(-0.0)).unwrap(), "0");
        assert_eq!(value_text(&json!(1e21)).unwrap(), "1e+21");
        assert_eq!(value_text(&json!(1.5e-7)).unwrap(), "1.5e-7");
        assert_eq!(value_text(&json!(u64::MAX)).unwrap(), "18446744073709551615");
    }

    #[test]
    fn test_compound_values() {
        assert_eq!(value_text(&json!(false)).unwrap(), "false");
        assert_eq!(value_text(&json!(["a", null, 2])).unwrap(), "a,,2");
        assert_eq!(value_text(&json!({"k": "v"})).unwrap(), "[object Object]");
    }

    #[test]
    fn test_deserialize_from_json_object() {
        let record: Record =
            serde_json::from_str(r#"{"date":"2024-01-01","amount":12.5,"note":null}"#).unwrap();
        assert_eq!(record.text("amount").as_deref(), Some("12.5"));
        assert_eq!(record.text("note"), None);
    }
}
