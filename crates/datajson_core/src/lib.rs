//! # Data Catalog Core
//!
//! Core data structures for validating data catalog documents.
//!
//! A catalog is an array of loosely-typed dataset metadata records. Validation
//! never fails with an error: every rule violation becomes a finding recorded in
//! an [`ErrorSink`], which renders a deduplicated, severity-ranked [`Report`].
//!
//! ## Key Concepts
//!
//! - **Severity**: integer band used to group and order findings; lower is more urgent
//! - **ErrorSink**: two-level map from `(severity, heading)` to description to locations
//! - **Report**: ordered `(heading, entries)` sections, the externally observed artifact
//! - **BureauCodes**: caller-supplied set of valid `AGENCY:BUREAU` codes
//! - **ValidationContext**: cross-record state of a single validation run
//!
//! ## Example
//!
//! ```rust
//! use datajson_core::{heading, ErrorSink, Severity};
//!
//! let mut sink = ErrorSink::new();
//! sink.record(
//!     Severity::MissingRequiredField,
//!     heading::MISSING_REQUIRED_FIELDS,
//!     "The 'title' field is missing.",
//!     Some("dataset 1"),
//! );
//!
//! let report = sink.render();
//! assert_eq!(report.sections[0].heading, "Missing Required Fields");
//! assert_eq!(
//!     report.sections[0].entries,
//!     vec!["The 'title' field is missing. (1 locations)"]
//! );
//! ```

pub mod context;
pub mod reference;
pub mod report;
pub mod severity;
pub mod sink;
pub mod value;

pub use context::*;
pub use reference::*;
pub use report::*;
pub use severity::*;
pub use sink::*;
pub use value::*;
