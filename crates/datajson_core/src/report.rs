//! Rendered validation reports.
//!
//! A [`Report`] is the externally observed artifact of a catalog validation: an
//! ordered list of headings, each with its ordered finding descriptions. It
//! carries no severity codes; callers that need them should read
//! [`Finding`]s from the sink instead.

use crate::Severity;
use serde::Serialize;

/// One heading of a report together with its entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    /// Heading shared by every entry in the section
    pub heading: String,

    /// Finding descriptions, with a location-count suffix where applicable
    pub entries: Vec<String>,
}

/// Report of catalog validation results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Sections ordered by severity, then heading
    pub sections: Vec<ReportSection>,
}

impl Report {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if validation found nothing to report.
    pub fn passed(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns true if the report has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns the number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns the total number of entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    /// Returns an iterator over the sections.
    pub fn iter(&self) -> impl Iterator<Item = &ReportSection> {
        self.sections.iter()
    }

    /// Returns the headings in report order.
    pub fn headings(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.heading.as_str()).collect()
    }

    /// Finds the section with the given heading.
    pub fn section(&self, heading: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.heading == heading)
    }
}

/// A structured finding as held by the sink, with its severity code and the
/// distinct locations it was recorded at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Severity band
    pub severity: Severity,

    /// Grouping heading
    pub heading: String,

    /// Human-readable description
    pub description: String,

    /// Distinct location labels, sorted
    pub contexts: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report {
            sections: vec![
                ReportSection {
                    heading: "Invalid Required Field Value".to_string(),
                    entries: vec!["a (2 locations)".to_string(), "b".to_string()],
                },
                ReportSection {
                    heading: "Are These Okay?".to_string(),
                    entries: vec!["c (1 locations)".to_string()],
                },
            ],
        }
    }

    #[test]
    fn test_empty_report_passes() {
        let report = Report::new();
        assert!(report.passed());
        assert_eq!(report.len(), 0);
        assert_eq!(report.entry_count(), 0);
    }

    #[test]
    fn test_report_accessors() {
        let report = sample();
        assert!(!report.passed());
        assert_eq!(report.len(), 2);
        assert_eq!(report.entry_count(), 3);
        assert_eq!(
            report.headings(),
            vec!["Invalid Required Field Value", "Are These Okay?"]
        );
        assert_eq!(report.section("Are These Okay?").unwrap().entries.len(), 1);
        assert!(report.section("Catalog Is Empty").is_none());
    }

    #[test]
    fn test_report_serializes_as_sections() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["sections"][0]["heading"], "Invalid Required Field Value");
        assert_eq!(json["sections"][1]["entries"][0], "c (1 locations)");
    }
}
