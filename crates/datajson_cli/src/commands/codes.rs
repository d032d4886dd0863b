use anyhow::{Context, Result};
use datajson_parser::parse_bureau_codes_file;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(path: &Path) -> Result<()> {
    info!("Loading bureau codes: {}", path.display());

    let codes = parse_bureau_codes_file(path)
        .with_context(|| format!("Failed to load bureau codes: {}", path.display()))?;

    output::print_success(&format!("Loaded {} bureau codes", codes.len()));

    Ok(())
}
