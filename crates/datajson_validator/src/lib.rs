//! # Data Catalog Validator
//!
//! Validation engine for data catalog documents. This crate checks an array of
//! dataset metadata records against a fixed rule set, including:
//!
//! - Catalog shape (must be a non-empty array)
//! - Required fields (presence, type, minimum length)
//! - Conditionally required fields (access level comments, content pointers)
//! - Value grammars (ISO 8601 dates, URLs, email addresses, language codes)
//! - Reference-set membership (bureau codes) and identifier uniqueness
//!
//! Violations never abort validation; they are collected as findings and
//! rendered into a severity-ranked report.
//!
//! ## Example
//!
//! ```rust
//! use datajson_core::BureauCodes;
//! use datajson_validator::CatalogValidator;
//! use serde_json::json;
//!
//! let codes = BureauCodes::from_pairs([("015", "01")]);
//! let validator = CatalogValidator::new(codes);
//!
//! let catalog = json!([{ "title": "Roads", "bureauCode": ["015:99"] }]);
//! let report = validator.validate(&catalog);
//!
//! if report.passed() {
//!     println!("Catalog is valid!");
//! } else {
//!     for section in &report.sections {
//!         println!("{}: {:?}", section.heading, section.entries);
//!     }
//! }
//! ```

mod email;
mod engine;
mod fields;
mod grammar;
mod record;

pub use email::*;
pub use engine::*;
pub use fields::*;
pub use grammar::*;
pub use record::*;
