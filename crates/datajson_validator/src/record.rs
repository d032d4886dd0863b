//! Per-record rule set.
//!
//! This module applies the full ordered rule set to one dataset record:
//! - Required fields (title, description, keyword, bureauCode, ...)
//! - Required-if-applicable fields (accessLevelComment, accessURL/webService, format)
//! - Optional fields (license, spatial, temporal)
//! - Expanded fields (theme, distribution, language, references, ...)
//!
//! The title is checked first because it determines the label every later
//! finding is reported under.

use crate::email::EmailCheck;
use crate::fields::{
    check_date_field, check_optional_string, check_required_field, check_string_field,
    check_string_items, check_url_field, invalid_optional, invalid_required, optional_array,
};
use crate::grammar::{is_iso8601, is_language_code, is_url, periodicity_is_valid};
use datajson_core::{
    ErrorSink, Severity, ValidationContext, ValueKind, display_value, field, heading, is_absent,
    is_truthy,
};
use serde_json::Value;
use tracing::trace;

/// Accepted `accessLevel` values.
pub const ACCESS_LEVELS: &[&str] = &["public", "restricted public", "non-public"];

/// Validates a single catalog record.
pub struct RecordValidator<'a> {
    email: &'a dyn EmailCheck,
}

impl<'a> RecordValidator<'a> {
    /// Creates a record validator using the given email check for `mbox`.
    pub fn new(email: &'a dyn EmailCheck) -> Self {
        Self { email }
    }

    /// Validates the record at `index` (zero-based) of the catalog.
    ///
    /// Findings are recorded into `sink`; identifiers are registered in `context`.
    pub fn validate(
        &self,
        record: &Value,
        index: usize,
        context: &mut ValidationContext<'_>,
        sink: &mut ErrorSink,
    ) {
        let mut label = format!("dataset {}", index + 1);

        if !record.is_object() {
            invalid_required(
                sink,
                format!(
                    "Each entry in the catalog must be an object, but entry {} is of type {}.",
                    index + 1,
                    ValueKind::of(record)
                ),
                &label,
            );
            return;
        }

        if check_string_field(record, "title", 5, &label, sink) {
            if let Some(Value::String(title)) = field(record, "title") {
                label = format!("\"{}\"", title.trim());
            }
        }
        trace!(index, label = %label, "Validating record");

        self.check_required(record, &label, context, sink);
        self.check_required_if_applicable(record, &label, sink);
        self.check_optional(record, &label, sink);
        self.check_expanded(record, &label, sink);
    }

    fn check_required(
        &self,
        record: &Value,
        label: &str,
        context: &mut ValidationContext<'_>,
        sink: &mut ErrorSink,
    ) {
        check_string_field(record, "description", 30, label, sink);

        // keyword
        if matches!(field(record, "keyword"), Some(Value::String(_))) {
            sink.record(
                Severity::InvalidRequiredValue,
                heading::UPDATE_YOUR_FILE,
                "The keyword field used to be a string but now it must be an array.",
                Some(label),
            );
        } else if check_required_field(record, "keyword", ValueKind::Array, label, sink) {
            if let Some(Value::Array(keywords)) = field(record, "keyword") {
                check_string_items(
                    keywords,
                    "keyword",
                    "keyword",
                    Severity::InvalidRequiredValue,
                    heading::INVALID_REQUIRED_VALUE,
                    label,
                    sink,
                );
            }
        }

        self.check_bureau_codes(record, label, context, sink);

        check_date_field(record, "modified", label, sink);
        check_string_field(record, "publisher", 1, label, sink);
        check_string_field(record, "contactPoint", 3, label, sink);

        if check_string_field(record, "mbox", 3, label, sink) {
            if let Some(Value::String(mbox)) = field(record, "mbox") {
                if !self.email.is_valid_email(mbox) {
                    invalid_required(
                        sink,
                        format!("The email address \"{}\" is not a valid email address.", mbox),
                        label,
                    );
                }
            }
        }

        if check_string_field(record, "identifier", 1, label, sink) {
            if let Some(Value::String(identifier)) = field(record, "identifier") {
                if !context.register_identifier(identifier) {
                    invalid_required(
                        sink,
                        format!(
                            "The dataset identifier \"{}\" is used more than once.",
                            identifier
                        ),
                        label,
                    );
                }
            }
        }

        if check_required_field(record, "programOffice", ValueKind::Array, label, sink) {
            if let Some(Value::Array(offices)) = field(record, "programOffice") {
                check_string_items(
                    offices,
                    "programOffice",
                    "value",
                    Severity::InvalidRequiredValue,
                    heading::INVALID_REQUIRED_VALUE,
                    label,
                    sink,
                );
            }
        }

        if check_string_field(record, "accessLevel", 0, label, sink) {
            if let Some(Value::String(level)) = field(record, "accessLevel") {
                if !ACCESS_LEVELS.contains(&level.as_str()) {
                    invalid_required(
                        sink,
                        format!("The field 'accessLevel' had an invalid value: \"{}\"", level),
                        label,
                    );
                } else if level == "non-public" {
                    sink.record(
                        Severity::SecurityLeakage,
                        heading::PRIVATE_DATA_LEAKAGE,
                        "A dataset appears with accessLevel set to \"non-public\".",
                        Some(label),
                    );
                }
            }
        }
    }

    fn check_bureau_codes(
        &self,
        record: &Value,
        label: &str,
        context: &ValidationContext<'_>,
        sink: &mut ErrorSink,
    ) {
        if !check_required_field(record, "bureauCode", ValueKind::Array, label, sink) {
            return;
        }
        let Some(Value::Array(codes)) = field(record, "bureauCode") else {
            return;
        };

        for code in codes {
            let description = match code {
                Value::String(code) if !code.contains(':') => format!(
                    "The bureau code \"{}\" is invalid. Start with the agency code, then a colon, then the bureau code.",
                    code
                ),
                Value::String(code) if !context.bureau_codes().contains(code) => {
                    format!("The bureau code \"{}\" was not found in our list.", code)
                }
                Value::String(_) => continue,
                _ => "Each bureauCode must be a string".to_string(),
            };
            invalid_required(sink, description, label);
        }
    }

    fn check_required_if_applicable(&self, record: &Value, label: &str, sink: &mut ErrorSink) {
        let access_level = field(record, "accessLevel").and_then(Value::as_str);

        if access_level != Some("public") {
            check_string_field(record, "accessLevelComment", 10, label, sink);
        }

        check_url_field(false, record, "accessURL", label, sink);
        check_url_field(false, record, "webService", label, sink);

        let no_access_url = is_absent(record, "accessURL");
        if access_level == Some("public") && no_access_url {
            sink.record(
                Severity::MissingContentPointer,
                heading::WHERES_THE_DATASET,
                "A public dataset is missing an accessURL.",
                Some(label),
            );
        } else if no_access_url && is_absent(record, "webService") {
            sink.record(
                Severity::MissingContentPointer,
                heading::WHERES_THE_DATASET,
                "A dataset has neither an accessURL nor a webService.",
                Some(label),
            );
        }

        if field(record, "accessURL").is_some_and(is_truthy) {
            check_string_field(record, "format", 1, label, sink);
        }
    }

    fn check_optional(&self, record: &Value, label: &str, sink: &mut ErrorSink) {
        check_optional_string(record, "license", label, sink);
        check_optional_string(record, "spatial", label, sink);

        match field(record, "temporal") {
            None | Some(Value::Null) => {}
            Some(Value::String(temporal)) => match temporal.split_once('/') {
                None => invalid_optional(
                    sink,
                    "The field 'temporal' must be two dates separated by a forward slash."
                        .to_string(),
                    label,
                ),
                Some((start, end)) if !is_iso8601(start) || !is_iso8601(end) => invalid_optional(
                    sink,
                    "The field 'temporal' has an invalid start or end date.".to_string(),
                    label,
                ),
                Some(_) => {}
            },
            Some(_) => invalid_optional(
                sink,
                "The field 'temporal' must be a string value if specified.".to_string(),
                label,
            ),
        }
    }

    fn check_expanded(&self, record: &Value, label: &str, sink: &mut ErrorSink) {
        if let Some(themes) = optional_array(record, "theme", label, sink) {
            check_string_items(
                themes,
                "theme",
                "value",
                Severity::InvalidOptionalValue,
                heading::INVALID_OPTIONAL_VALUE,
                label,
                sink,
            );
        }

        check_url_field(false, record, "dataDictionary", label, sink);

        match field(record, "dataQuality") {
            None | Some(Value::Null) | Some(Value::Bool(_)) => {}
            Some(_) => invalid_optional(
                sink,
                "The field 'dataQuality' must be true or false, as a JSON boolean literal (not the string \"true\" or \"false\")."
                    .to_string(),
                label,
            ),
        }

        if let Some(distributions) = optional_array(record, "distribution", label, sink) {
            for (j, distribution) in distributions.iter().enumerate() {
                let resource_label = format!("{} distribution {}", label, j + 1);
                check_url_field(true, distribution, "accessURL", &resource_label, sink);
                check_string_field(distribution, "format", 1, &resource_label, sink);
            }
        }

        if !periodicity_is_valid(field(record, "accrualPeriodicity")) {
            invalid_optional(
                sink,
                "The field 'accrualPeriodicity' had an invalid value.".to_string(),
                label,
            );
        }

        check_url_field(false, record, "landingPage", label, sink);

        if let Some(languages) = optional_array(record, "language", label, sink) {
            for language in languages {
                let valid = language.as_str().is_some_and(is_language_code);
                if !valid {
                    invalid_optional(
                        sink,
                        format!(
                            "The field 'language' had an invalid language: \"{}\"",
                            display_value(language)
                        ),
                        label,
                    );
                }
            }
        }

        check_optional_string(record, "PrimaryITInvestmentUII", label, sink);

        if let Some(references) = optional_array(record, "references", label, sink) {
            for reference in references {
                let valid = reference.as_str().is_some_and(is_url);
                if !valid {
                    invalid_optional(
                        sink,
                        format!(
                            "The field 'references' had an invalid URL: \"{}\"",
                            display_value(reference)
                        ),
                        label,
                    );
                }
            }
        }

        if !is_absent(record, "issued") {
            check_date_field(record, "issued", label, sink);
        }
    }
}
