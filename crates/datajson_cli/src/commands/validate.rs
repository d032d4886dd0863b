use anyhow::{Context, Result, bail};
use datajson_core::BureauCodes;
use datajson_parser::{parse_bureau_codes_file, parse_catalog_file};
use datajson_validator::CatalogValidator;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::output;

/// Environment variable naming the default bureau code table.
pub const BUREAU_CODES_ENV: &str = "DATAJSON_BUREAU_CODES";

pub fn execute(
    catalog_path: &Path,
    bureau_codes_path: Option<PathBuf>,
    format: &str,
    max_records: Option<usize>,
) -> Result<()> {
    info!("Validating catalog: {}", catalog_path.display());

    let bureau_codes = load_bureau_codes(bureau_codes_path)?;

    let catalog = parse_catalog_file(catalog_path)
        .with_context(|| format!("Failed to parse catalog file: {}", catalog_path.display()))?;

    if let (Some(limit), Some(entries)) = (max_records, catalog.as_array()) {
        if entries.len() > limit {
            bail!(
                "Catalog has {} entries, more than the allowed maximum of {}",
                entries.len(),
                limit
            );
        }
    }

    let validator = CatalogValidator::new(bureau_codes);
    let sink = validator.collect(&catalog);
    let report = sink.render();

    output::print_validation_report(&report, &sink.findings(), format);

    if !report.passed() {
        std::process::exit(1);
    }

    Ok(())
}

/// Loads the bureau code table from the given path, or from the path in
/// `$DATAJSON_BUREAU_CODES`. Without either, every bureau code will be reported
/// as unknown.
fn load_bureau_codes(path: Option<PathBuf>) -> Result<BureauCodes> {
    let path = path.or_else(|| std::env::var_os(BUREAU_CODES_ENV).map(PathBuf::from));

    let Some(path) = path else {
        warn!(
            "No bureau code table given (use --bureau-codes or {}); all bureau codes will be reported as unknown",
            BUREAU_CODES_ENV
        );
        return Ok(BureauCodes::empty());
    };

    let codes = parse_bureau_codes_file(&path)
        .with_context(|| format!("Failed to load bureau codes: {}", path.display()))?;
    info!("Loaded {} bureau codes from {}", codes.len(), path.display());

    Ok(codes)
}
