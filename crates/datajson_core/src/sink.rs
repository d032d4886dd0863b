//! Error aggregation.
//!
//! Checkers write raw `(severity, heading, description, context)` tuples into an
//! [`ErrorSink`]. The sink deduplicates them and renders a compact, stably
//! ordered [`Report`].

use crate::{Finding, Report, ReportSection, Severity};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

type Descriptions = BTreeMap<String, BTreeSet<String>>;

/// Accumulates findings grouped by `(severity, heading)`, then by description.
///
/// Each description keeps the set of distinct locations it was recorded at.
/// Recording the same tuple twice has no additional effect.
#[derive(Debug, Clone, Default)]
pub struct ErrorSink {
    buckets: BTreeMap<(Severity, String), Descriptions>,
}

impl ErrorSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finding.
    ///
    /// `context` names the location (e.g. `"dataset 3"`); catalog-level findings
    /// pass `None`. An empty context is treated as no context.
    pub fn record(
        &mut self,
        severity: Severity,
        heading: &str,
        description: impl Into<String>,
        context: Option<&str>,
    ) {
        let contexts = self
            .buckets
            .entry((severity, heading.to_string()))
            .or_default()
            .entry(description.into())
            .or_default();

        if let Some(context) = context.filter(|c| !c.is_empty()) {
            contexts.insert(context.to_string());
        }
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Returns the number of distinct descriptions recorded.
    pub fn len(&self) -> usize {
        self.buckets.values().map(BTreeMap::len).sum()
    }

    /// Returns true if any finding was recorded under the given heading.
    pub fn has_heading(&self, heading: &str) -> bool {
        self.buckets.keys().any(|(_, h)| h == heading)
    }

    /// Returns the structured findings in report order.
    pub fn findings(&self) -> Vec<Finding> {
        let mut findings = Vec::with_capacity(self.len());

        for ((severity, heading), descriptions) in &self.buckets {
            for (description, contexts) in sorted_descriptions(descriptions) {
                findings.push(Finding {
                    severity: *severity,
                    heading: heading.clone(),
                    description: description.clone(),
                    contexts: contexts.iter().cloned().collect(),
                });
            }
        }

        findings
    }

    /// Renders the sink into a report.
    ///
    /// Sections are ordered by severity, then heading. Within a section,
    /// descriptions are ordered by descending number of locations, then by text,
    /// and carry a `" (N locations)"` suffix when they have any location.
    pub fn render(&self) -> Report {
        let sections = self
            .buckets
            .iter()
            .map(|((_, heading), descriptions)| ReportSection {
                heading: heading.clone(),
                entries: sorted_descriptions(descriptions)
                    .into_iter()
                    .map(|(description, contexts)| match contexts.len() {
                        0 => description.clone(),
                        n => format!("{} ({} locations)", description, n),
                    })
                    .collect(),
            })
            .collect();

        Report { sections }
    }
}

fn sorted_descriptions(descriptions: &Descriptions) -> Vec<(&String, &BTreeSet<String>)> {
    let mut sorted: Vec<_> = descriptions.iter().collect();
    sorted.sort_by_key(|(description, contexts)| (Reverse(contexts.len()), *description));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heading;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_sink_renders_empty_report() {
        let sink = ErrorSink::new();
        assert!(sink.is_empty());
        assert!(sink.render().is_empty());
    }

    #[test]
    fn test_recording_is_idempotent() {
        let mut sink = ErrorSink::new();
        for _ in 0..2 {
            sink.record(
                Severity::MissingRequiredField,
                heading::MISSING_REQUIRED_FIELDS,
                "The 'title' field is missing.",
                Some("dataset 1"),
            );
        }

        assert_eq!(sink.len(), 1);
        let report = sink.render();
        assert_eq!(
            report.sections[0].entries,
            vec!["The 'title' field is missing. (1 locations)"]
        );
    }

    #[test]
    fn test_missing_context_has_no_suffix() {
        let mut sink = ErrorSink::new();
        sink.record(
            Severity::StructuralFailure,
            heading::CATALOG_IS_EMPTY,
            "There are no entries in your file.",
            None,
        );
        sink.record(
            Severity::StructuralFailure,
            heading::CATALOG_IS_EMPTY,
            "There are no entries in your file.",
            Some(""),
        );

        let report = sink.render();
        assert_eq!(report.sections.len(), 1);
        assert_eq!(
            report.sections[0].entries,
            vec!["There are no entries in your file."]
        );
    }

    #[test]
    fn test_sections_ordered_by_severity_then_heading() {
        let mut sink = ErrorSink::new();
        sink.record(Severity::Advisory, heading::ARE_THESE_OKAY, "short", Some("a"));
        sink.record(
            Severity::InvalidOptionalValue,
            heading::INVALID_OPTIONAL_VALUE,
            "bad theme",
            Some("a"),
        );
        sink.record(
            Severity::InvalidRequiredValue,
            heading::UPDATE_YOUR_FILE,
            "migrate",
            Some("a"),
        );
        sink.record(
            Severity::InvalidRequiredValue,
            heading::INVALID_REQUIRED_VALUE,
            "bad code",
            Some("a"),
        );

        assert_eq!(
            sink.render().headings(),
            vec![
                heading::INVALID_REQUIRED_VALUE,
                heading::UPDATE_YOUR_FILE,
                heading::INVALID_OPTIONAL_VALUE,
                heading::ARE_THESE_OKAY,
            ]
        );
    }

    #[test]
    fn test_same_heading_different_severity_are_separate_sections() {
        let mut sink = ErrorSink::new();
        sink.record(Severity::Advisory, "Shared", "late", None);
        sink.record(Severity::SecurityLeakage, "Shared", "early", None);

        let report = sink.render();
        assert_eq!(report.len(), 2);
        assert_eq!(report.sections[0].entries, vec!["early"]);
        assert_eq!(report.sections[1].entries, vec!["late"]);
    }

    #[test]
    fn test_descriptions_ordered_by_location_count_then_text() {
        let mut sink = ErrorSink::new();
        let sev = Severity::InvalidRequiredValue;
        let h = heading::INVALID_REQUIRED_VALUE;
        sink.record(sev, h, "zeta", Some("dataset 1"));
        sink.record(sev, h, "alpha", Some("dataset 1"));
        sink.record(sev, h, "beta", Some("dataset 1"));
        sink.record(sev, h, "beta", Some("dataset 2"));
        sink.record(sev, h, "gamma", None);

        assert_eq!(
            sink.render().sections[0].entries,
            vec![
                "beta (2 locations)",
                "alpha (1 locations)",
                "zeta (1 locations)",
                "gamma",
            ]
        );
    }

    #[test]
    fn test_findings_expose_severity_and_contexts() {
        let mut sink = ErrorSink::new();
        sink.record(
            Severity::SecurityLeakage,
            heading::PRIVATE_DATA_LEAKAGE,
            "non-public",
            Some("\"B\""),
        );
        sink.record(
            Severity::SecurityLeakage,
            heading::PRIVATE_DATA_LEAKAGE,
            "non-public",
            Some("\"A\""),
        );

        let findings = sink.findings();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity.rank(), 1);
        assert_eq!(findings[0].contexts, vec!["\"A\"", "\"B\""]);
        assert!(sink.has_heading(heading::PRIVATE_DATA_LEAKAGE));
        assert!(!sink.has_heading(heading::ARE_THESE_OKAY));
    }
}
