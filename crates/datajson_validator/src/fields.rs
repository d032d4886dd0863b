//! Field-level checks.
//!
//! Each checker validates one field of one record, records any findings into
//! the sink under the dataset's display label, and returns whether the field
//! passed so callers can skip dependent checks.

use crate::grammar::{is_iso8601, is_url};
use datajson_core::{ErrorSink, Severity, ValueKind, field, heading, is_absent};
use serde_json::Value;

/// Checks that a required field is present, non-null and of the expected kind.
///
/// Arrays must also be non-empty.
pub fn check_required_field(
    record: &Value,
    name: &str,
    expected: ValueKind,
    label: &str,
    sink: &mut ErrorSink,
) -> bool {
    let value = match field(record, name) {
        None => {
            missing(sink, format!("The '{}' field is missing.", name), label);
            return false;
        }
        Some(Value::Null) => {
            missing(sink, format!("The '{}' field is set to null.", name), label);
            return false;
        }
        Some(value) => value,
    };

    let actual = ValueKind::of(value);
    if actual != expected {
        invalid_required(
            sink,
            format!(
                "The '{}' field must be a {} but it has a different datatype ({}).",
                name, expected, actual
            ),
            label,
        );
        return false;
    }

    if matches!(value, Value::Array(items) if items.is_empty()) {
        missing(sink, format!("The '{}' field is an empty array.", name), label);
        return false;
    }

    true
}

/// Checks that a required field is a non-blank string.
///
/// Values whose trimmed length is at most `min_length` characters get an
/// advisory finding but still pass.
pub fn check_string_field(
    record: &Value,
    name: &str,
    min_length: usize,
    label: &str,
    sink: &mut ErrorSink,
) -> bool {
    if !check_required_field(record, name, ValueKind::String, label, sink) {
        return false;
    }
    let Some(Value::String(value)) = field(record, name) else {
        return false;
    };

    let length = value.trim().chars().count();
    if length == 0 {
        present_but_empty(sink, name, label);
        return false;
    }
    if length <= min_length {
        sink.record(
            Severity::Advisory,
            heading::ARE_THESE_OKAY,
            format!("The '{}' field is very short: \"{}\"", name, value),
            Some(label),
        );
    }

    true
}

/// Checks that a required field is an ISO 8601 date or date-time string.
pub fn check_date_field(record: &Value, name: &str, label: &str, sink: &mut ErrorSink) -> bool {
    if !check_required_field(record, name, ValueKind::String, label, sink) {
        return false;
    }
    let Some(Value::String(value)) = field(record, name) else {
        return false;
    };

    if value.trim().is_empty() {
        present_but_empty(sink, name, label);
        return false;
    }
    if !is_iso8601(value) {
        invalid_required(
            sink,
            format!(
                "The '{}' field has an invalid ISO 8601 date or date-time value: \"{}\".",
                name, value
            ),
            label,
        );
        return false;
    }

    true
}

/// Checks that a field holds a URL.
///
/// When `required` is false, an absent or null field passes.
pub fn check_url_field(
    required: bool,
    record: &Value,
    name: &str,
    label: &str,
    sink: &mut ErrorSink,
) -> bool {
    if !required && is_absent(record, name) {
        return true;
    }
    if !check_required_field(record, name, ValueKind::String, label, sink) {
        return false;
    }
    let Some(Value::String(value)) = field(record, name) else {
        return false;
    };

    if !is_url(value) {
        invalid_required(
            sink,
            format!("The '{}' field has an invalid URL: \"{}\".", name, value),
            label,
        );
        return false;
    }

    true
}

/// Checks that every item of an array field is a non-blank string.
///
/// `noun` names a single item in the descriptions (`"keyword"`, `"value"`).
pub fn check_string_items(
    items: &[Value],
    name: &str,
    noun: &str,
    severity: Severity,
    heading: &str,
    label: &str,
    sink: &mut ErrorSink,
) -> bool {
    let mut passed = true;

    for item in items {
        match item {
            Value::String(s) if s.trim().is_empty() => {
                sink.record(
                    severity,
                    heading,
                    format!("A {} in the {} array was an empty string.", noun, name),
                    Some(label),
                );
                passed = false;
            }
            Value::String(_) => {}
            _ => {
                sink.record(
                    severity,
                    heading,
                    format!("Each {} in the {} array must be a string", noun, name),
                    Some(label),
                );
                passed = false;
            }
        }
    }

    passed
}

/// Returns the items of an optional array field.
///
/// Absent and null fields yield `None` silently; any other non-array value is
/// an optional-field finding.
pub fn optional_array<'a>(
    record: &'a Value,
    name: &str,
    label: &str,
    sink: &mut ErrorSink,
) -> Option<&'a [Value]> {
    match field(record, name) {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(items),
        Some(_) => {
            invalid_optional(
                sink,
                format!("The field '{}' must be an array, if present.", name),
                label,
            );
            None
        }
    }
}

/// Checks that an optional field, if present, is a string.
pub fn check_optional_string(record: &Value, name: &str, label: &str, sink: &mut ErrorSink) -> bool {
    match field(record, name) {
        None | Some(Value::Null) | Some(Value::String(_)) => true,
        Some(_) => {
            invalid_optional(
                sink,
                format!("The field '{}' must be a string value if specified.", name),
                label,
            );
            false
        }
    }
}

fn missing(sink: &mut ErrorSink, description: String, label: &str) {
    sink.record(
        Severity::MissingRequiredField,
        heading::MISSING_REQUIRED_FIELDS,
        description,
        Some(label),
    );
}

fn present_but_empty(sink: &mut ErrorSink, name: &str, label: &str) {
    missing(
        sink,
        format!("The '{}' field is present but empty.", name),
        label,
    );
}

pub(crate) fn invalid_required(sink: &mut ErrorSink, description: String, label: &str) {
    sink.record(
        Severity::InvalidRequiredValue,
        heading::INVALID_REQUIRED_VALUE,
        description,
        Some(label),
    );
}

pub(crate) fn invalid_optional(sink: &mut ErrorSink, description: String, label: &str) {
    sink.record(
        Severity::InvalidOptionalValue,
        heading::INVALID_OPTIONAL_VALUE,
        description,
        Some(label),
    );
}
