//! Loaders for data catalog documents and reference sets.
//!
//! This module reads catalog files into generic JSON values and bureau-code
//! reference tables into [`BureauCodes`]. Shape checks on the catalog itself
//! belong to the validator: any well-formed JSON document loads successfully.
//!
//! # Example
//!
//! ```rust
//! use datajson_parser::{parse_bureau_codes, parse_catalog};
//!
//! let catalog = parse_catalog(r#"[{"title": "Roads"}]"#).expect("Failed to parse catalog");
//! assert!(catalog.is_array());
//!
//! let csv = "OMB Agency Code,OMB Bureau Code,Agency Name\n015,01,Department of Justice\n";
//! let codes = parse_bureau_codes(csv.as_bytes()).expect("Failed to parse bureau codes");
//! assert!(codes.contains("015:01"));
//! ```

use datajson_core::BureauCodes;
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Header of the agency-code column in the reference table.
pub const AGENCY_CODE_COLUMN: &str = "OMB Agency Code";

/// Header of the bureau-code column in the reference table.
pub const BUREAU_CODE_COLUMN: &str = "OMB Bureau Code";

/// Errors that can occur while loading catalogs and reference sets.
#[derive(Debug, Error)]
pub enum ParserError {
    /// The catalog is not well-formed JSON
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The reference table is not well-formed CSV
    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The reference table lacks a required column
    #[error("Missing column '{0}' in bureau code table")]
    MissingColumn(&'static str),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

#[derive(Debug, Deserialize)]
struct BureauCodeRow {
    #[serde(rename = "OMB Agency Code")]
    agency: String,
    #[serde(rename = "OMB Bureau Code")]
    bureau: String,
}

/// Parse a catalog document from a JSON string.
pub fn parse_catalog(content: &str) -> Result<Value> {
    let document: Value = serde_json::from_str(content)?;
    Ok(document)
}

/// Parse a catalog document from a file.
///
/// # Example
///
/// ```no_run
/// use datajson_parser::parse_catalog_file;
/// use std::path::Path;
///
/// let catalog = parse_catalog_file(Path::new("data.json")).unwrap();
/// println!("Loaded {} entries", catalog.as_array().map_or(0, Vec::len));
/// ```
pub fn parse_catalog_file(path: &Path) -> Result<Value> {
    debug!("Reading catalog from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// Parse a bureau-code reference table.
///
/// The table is CSV with a header row containing [`AGENCY_CODE_COLUMN`] and
/// [`BUREAU_CODE_COLUMN`]; other columns are ignored. Each row contributes the
/// code `"<agency>:<bureau>"`. Rows with a blank agency or bureau are skipped.
///
/// # Errors
///
/// Returns `ParserError::MissingColumn` if either column is absent, and
/// `ParserError::CsvError` for malformed rows.
pub fn parse_bureau_codes<R: Read>(reader: R) -> Result<BureauCodes> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in [AGENCY_CODE_COLUMN, BUREAU_CODE_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(ParserError::MissingColumn(column));
        }
    }

    let mut pairs = Vec::new();
    for result in reader.deserialize::<BureauCodeRow>() {
        let row = result?;
        if row.agency.is_empty() || row.bureau.is_empty() {
            continue;
        }
        pairs.push((row.agency, row.bureau));
    }

    let codes = BureauCodes::from_pairs(pairs);
    debug!("Loaded {} bureau codes", codes.len());
    Ok(codes)
}

/// Parse a bureau-code reference table from a file.
pub fn parse_bureau_codes_file(path: &Path) -> Result<BureauCodes> {
    debug!("Reading bureau codes from {}", path.display());
    let file = std::fs::File::open(path)?;
    parse_bureau_codes(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_catalog_array() {
        let catalog = parse_catalog(r#"[{"title": "Roads", "keyword": ["a"]}, 3]"#)
            .expect("Failed to parse catalog");

        let entries = catalog.as_array().expect("Catalog should be an array");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["title"], "Roads");
    }

    #[test]
    fn test_parse_catalog_accepts_any_json_shape() {
        assert!(parse_catalog(r#"{"dataset": []}"#).unwrap().is_object());
        assert!(parse_catalog("null").unwrap().is_null());
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_catalog(r#"[{"title": "Roads",]"#);
        assert!(matches!(result.unwrap_err(), ParserError::JsonError(_)));
    }

    #[test]
    fn test_parse_bureau_codes() {
        let csv = "\
Agency Name,OMB Agency Code,Bureau Name,OMB Bureau Code,Treasury Code
Department of Justice,015,Bureau of Prisons,01,15
Department of Justice,015,Federal Bureau of Investigation, 10 ,15
Department of Transportation,021,Federal Highway Administration,04,69
";
        let codes = parse_bureau_codes(csv.as_bytes()).expect("Failed to parse bureau codes");

        assert_eq!(codes.len(), 3);
        assert!(codes.contains("015:01"));
        assert!(codes.contains("015:10"));
        assert!(codes.contains("021:04"));
        assert!(!codes.contains("15:1"));
    }

    #[test]
    fn test_parse_bureau_codes_skips_blank_codes() {
        let csv = "OMB Agency Code,OMB Bureau Code\n015,01\n,02\n016,\n";
        let codes = parse_bureau_codes(csv.as_bytes()).unwrap();
        assert_eq!(codes.len(), 1);
    }

    #[test]
    fn test_parse_bureau_codes_missing_column() {
        let csv = "OMB Agency Code,Bureau\n015,01\n";
        let result = parse_bureau_codes(csv.as_bytes());
        assert!(matches!(
            result.unwrap_err(),
            ParserError::MissingColumn(BUREAU_CODE_COLUMN)
        ));
    }

    #[test]
    fn test_parse_bureau_codes_empty_table() {
        let codes = parse_bureau_codes("OMB Agency Code,OMB Bureau Code\n".as_bytes()).unwrap();
        assert!(codes.is_empty());
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_catalog_file(Path::new("does/not/exist.json"));
        assert!(matches!(result.unwrap_err(), ParserError::IoError(_)));
    }
}
