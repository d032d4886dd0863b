//! Severity bands and finding headings.
//!
//! Severity is part of the grouping key of every finding and drives report
//! ordering: lower ranks are more urgent and render first.

use serde::Serialize;
use std::fmt;

/// Severity band of a validation finding.
///
/// Variants are declared in rank order, so the derived ordering sorts the most
/// urgent band first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Severity {
    /// The document is not a catalog at all (not an array, or empty)
    StructuralFailure,
    /// Possible leakage of private data
    SecurityLeakage,
    /// A required field holds an invalid value
    InvalidRequiredValue,
    /// A required field is missing, null or empty
    MissingRequiredField,
    /// The dataset has no retrievable content pointer
    MissingContentPointer,
    /// An optional field holds an invalid value
    InvalidOptionalValue,
    /// Style advisory, not blocking
    Advisory,
}

impl Severity {
    /// All severity bands in rank order.
    pub const ALL: [Severity; 7] = [
        Severity::StructuralFailure,
        Severity::SecurityLeakage,
        Severity::InvalidRequiredValue,
        Severity::MissingRequiredField,
        Severity::MissingContentPointer,
        Severity::InvalidOptionalValue,
        Severity::Advisory,
    ];

    /// Returns the integer rank of this band.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::StructuralFailure => 0,
            Severity::SecurityLeakage => 1,
            Severity::InvalidRequiredValue => 5,
            Severity::MissingRequiredField => 10,
            Severity::MissingContentPointer => 20,
            Severity::InvalidOptionalValue => 50,
            Severity::Advisory => 100,
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.rank()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank())
    }
}

/// Headings emitted by the catalog rule set.
pub mod heading {
    pub const BAD_JSON_STRUCTURE: &str = "Bad JSON Structure";
    pub const CATALOG_IS_EMPTY: &str = "Catalog Is Empty";
    pub const PRIVATE_DATA_LEAKAGE: &str = "Possible Private Data Leakage";
    pub const INVALID_REQUIRED_VALUE: &str = "Invalid Required Field Value";
    pub const UPDATE_YOUR_FILE: &str = "Update Your File!";
    pub const MISSING_REQUIRED_FIELDS: &str = "Missing Required Fields";
    pub const WHERES_THE_DATASET: &str = "Where's the Dataset?";
    pub const INVALID_OPTIONAL_VALUE: &str = "Invalid Field Value (Optional Fields)";
    pub const ARE_THESE_OKAY: &str = "Are These Okay?";
}
