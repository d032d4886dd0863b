//! Main validation engine.
//!
//! This module provides the [`CatalogValidator`] that checks the top-level shape
//! of a catalog document, runs the record rule set over every entry in order,
//! and renders the collected findings.

use crate::{EmailCheck, RecordValidator, RfcEmail};
use datajson_core::{BureauCodes, ErrorSink, Report, Severity, ValidationContext, heading};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info};

/// Validation engine for data catalog documents.
///
/// Holds the caller-supplied reference data. Every validation run builds its
/// own [`ValidationContext`] and [`ErrorSink`], so a validator can be reused and
/// validating the same document twice yields identical reports.
///
/// # Example
///
/// ```rust
/// use datajson_core::BureauCodes;
/// use datajson_validator::CatalogValidator;
/// use serde_json::json;
///
/// let codes: BureauCodes = ["015:01"].into_iter().collect();
/// let validator = CatalogValidator::new(codes);
///
/// let report = validator.validate(&json!([]));
/// assert_eq!(report.headings(), vec!["Catalog Is Empty"]);
///
/// for section in &report.sections {
///     println!("{}", section.heading);
///     for entry in &section.entries {
///         println!("  {}", entry);
///     }
/// }
/// ```
pub struct CatalogValidator {
    bureau_codes: BureauCodes,
    email: Box<dyn EmailCheck>,
}

impl CatalogValidator {
    /// Creates a validator over a bureau-code reference set, using
    /// [`RfcEmail`] to check contact mailboxes.
    pub fn new(bureau_codes: BureauCodes) -> Self {
        Self {
            bureau_codes,
            email: Box::new(RfcEmail),
        }
    }

    /// Replaces the email-address check.
    pub fn with_email_check(mut self, email: impl EmailCheck + 'static) -> Self {
        self.email = Box::new(email);
        self
    }

    /// Validates a catalog document and renders the report.
    pub fn validate(&self, document: &Value) -> Report {
        self.collect(document).render()
    }

    /// Validates a catalog document and returns the raw findings.
    ///
    /// Use this instead of [`validate`](Self::validate) when severity codes are needed.
    pub fn collect(&self, document: &Value) -> ErrorSink {
        let mut sink = ErrorSink::new();
        self.validate_into(document, &mut sink);
        sink
    }

    /// Validates a catalog document, recording findings into `sink`.
    pub fn validate_into(&self, document: &Value, sink: &mut ErrorSink) {
        let start = Instant::now();

        let records = match document {
            Value::Array(records) => records,
            _ => {
                debug!("Catalog document is not an array");
                sink.record(
                    Severity::StructuralFailure,
                    heading::BAD_JSON_STRUCTURE,
                    "The file must be an array at its top level. That means the file starts with an open bracket [ and ends with a close bracket ].",
                    None,
                );
                return;
            }
        };

        if records.is_empty() {
            debug!("Catalog document is empty");
            sink.record(
                Severity::StructuralFailure,
                heading::CATALOG_IS_EMPTY,
                "There are no entries in your file.",
                None,
            );
            return;
        }

        let mut context = ValidationContext::new(&self.bureau_codes);
        let record_validator = RecordValidator::new(&*self.email);

        for (index, record) in records.iter().enumerate() {
            record_validator.validate(record, index, &mut context, sink);
        }

        info!(
            records = records.len(),
            identifiers = context.identifier_count(),
            findings = sink.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Catalog validated"
        );
    }
}

impl Default for CatalogValidator {
    fn default() -> Self {
        Self::new(BureauCodes::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_not_an_array() {
        let validator = CatalogValidator::default();

        for document in [json!({"title": "x"}), json!("catalog"), json!(null), json!(3)] {
            let report = validator.validate(&document);
            assert_eq!(report.headings(), vec!["Bad JSON Structure"]);
            assert_eq!(report.entry_count(), 1);
        }
    }

    #[test]
    fn test_empty_catalog() {
        let report = CatalogValidator::default().validate(&json!([]));
        assert_eq!(report.headings(), vec!["Catalog Is Empty"]);
        assert_eq!(
            report.sections[0].entries,
            vec!["There are no entries in your file."]
        );
    }

    #[test]
    fn test_collect_exposes_structural_severity() {
        let sink = CatalogValidator::default().collect(&json!({}));
        let findings = sink.findings();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::StructuralFailure);
        assert!(findings[0].contexts.is_empty());
    }

    #[test]
    fn test_bad_record_does_not_stop_iteration() {
        let validator = CatalogValidator::default();
        let sink = validator.collect(&json!([42, {"title": "Second dataset"}]));

        let findings = sink.findings();
        assert!(findings.iter().any(|f| f.contexts == vec!["dataset 1"]));
        assert!(findings
            .iter()
            .any(|f| f.contexts.contains(&"\"Second dataset\"".to_string())));
    }

    #[test]
    fn test_validate_into_accumulates() {
        let validator = CatalogValidator::default();
        let mut sink = ErrorSink::new();
        validator.validate_into(&json!([]), &mut sink);
        validator.validate_into(&json!("x"), &mut sink);

        assert_eq!(
            sink.render().headings(),
            vec!["Bad JSON Structure", "Catalog Is Empty"]
        );
    }

    #[test]
    fn test_custom_email_check() {
        let validator = CatalogValidator::default().with_email_check(|_: &str| false);
        let report = validator.validate(&json!([{"mbox": "someone@example.gov"}]));

        let section = report.section("Invalid Required Field Value").unwrap();
        assert!(section
            .entries
            .iter()
            .any(|e| e.starts_with("The email address \"someone@example.gov\"")));
    }
}
