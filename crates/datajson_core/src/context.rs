//! Cross-record validation state.

use crate::BureauCodes;
use std::collections::HashSet;

/// State shared across the records of one validation run.
///
/// Owned by a single run; concurrent runs each build their own context.
#[derive(Debug)]
pub struct ValidationContext<'a> {
    /// Identifiers seen so far, in catalog order
    seen_identifiers: HashSet<String>,

    /// Valid `AGENCY:BUREAU` codes
    bureau_codes: &'a BureauCodes,
}

impl<'a> ValidationContext<'a> {
    /// Creates a fresh context over a reference set.
    pub fn new(bureau_codes: &'a BureauCodes) -> Self {
        Self {
            seen_identifiers: HashSet::new(),
            bureau_codes,
        }
    }

    /// Returns the bureau-code reference set.
    pub fn bureau_codes(&self) -> &BureauCodes {
        self.bureau_codes
    }

    /// Registers a dataset identifier.
    ///
    /// Returns false if the identifier was already registered by an earlier record.
    pub fn register_identifier(&mut self, identifier: &str) -> bool {
        self.seen_identifiers.insert(identifier.to_string())
    }

    /// Returns the number of distinct identifiers registered.
    pub fn identifier_count(&self) -> usize {
        self.seen_identifiers.len()
    }
}
