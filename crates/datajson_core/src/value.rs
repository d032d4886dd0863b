//! Value-kind model for catalog records.
//!
//! Records arrive as generic [`serde_json::Value`]s with no fixed schema, so every
//! field access goes through an explicit kind match instead of implicit coercion.

use serde_json::Value;
use std::fmt;

/// The kind of a JSON value, as reported to catalog authors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `null`
    Null,
    /// `true` / `false`
    Boolean,
    /// Integer or floating point number
    Number,
    /// String value
    String,
    /// Ordered sequence of values
    Array,
    /// Nested mapping
    Object,
}

impl ValueKind {
    /// Returns the kind of a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Returns the human-readable name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }

    /// Returns true if `value` is of this kind.
    pub fn matches(&self, value: &Value) -> bool {
        ValueKind::of(value) == *self
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks up a field on a record.
///
/// Returns `None` when the field is absent, and `Some(&Value::Null)` when it is
/// explicitly null. Any non-object record has no fields.
pub fn field<'a>(record: &'a Value, name: &str) -> Option<&'a Value> {
    record.as_object().and_then(|map| map.get(name))
}

/// Returns true if the field is absent or null.
pub fn is_absent(record: &Value, name: &str) -> bool {
    matches!(field(record, name), None | Some(Value::Null))
}

/// Returns true if the value carries content: non-empty strings, arrays and
/// objects, non-zero numbers and `true`.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Renders a value for inclusion in a finding description.
///
/// Strings are shown verbatim, everything else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_names() {
        assert_eq!(ValueKind::of(&json!(null)).name(), "null");
        assert_eq!(ValueKind::of(&json!(true)).name(), "boolean");
        assert_eq!(ValueKind::of(&json!(4.5)).name(), "number");
        assert_eq!(ValueKind::of(&json!("x")).name(), "string");
        assert_eq!(ValueKind::of(&json!([])).name(), "array");
        assert_eq!(ValueKind::of(&json!({})).name(), "object");
    }

    #[test]
    fn test_field_lookup() {
        let record = json!({"title": "Roads", "modified": null});
        assert_eq!(field(&record, "title"), Some(&json!("Roads")));
        assert_eq!(field(&record, "modified"), Some(&Value::Null));
        assert_eq!(field(&record, "keyword"), None);

        assert!(is_absent(&record, "modified"));
        assert!(is_absent(&record, "keyword"));
        assert!(!is_absent(&record, "title"));
    }

    #[test]
    fn test_field_lookup_on_non_object() {
        assert_eq!(field(&json!("title"), "title"), None);
        assert_eq!(field(&json!(["title"]), "title"), None);
        assert!(is_absent(&json!(42), "title"));
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!(0)));
        assert!(is_truthy(&json!("http://example.gov")));
        assert!(is_truthy(&json!([1])));
        assert!(is_truthy(&json!(true)));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("en")), "en");
        assert_eq!(display_value(&json!(12)), "12");
        assert_eq!(display_value(&json!(null)), "null");
    }
}
