//! Reference sets supplied by the caller.

use std::collections::HashSet;

/// Immutable set of valid `AGENCY:BUREAU` codes.
///
/// Loading and refreshing the set is the caller's concern. An empty set is
/// valid and simply makes every bureau code fail the membership check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BureauCodes {
    codes: HashSet<String>,
}

impl BureauCodes {
    /// Creates an empty reference set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from `(agency, bureau)` code pairs.
    pub fn from_pairs<A, B>(pairs: impl IntoIterator<Item = (A, B)>) -> Self
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        pairs
            .into_iter()
            .map(|(agency, bureau)| format!("{}:{}", agency.as_ref(), bureau.as_ref()))
            .collect()
    }

    /// Returns true if `code` is a known `AGENCY:BUREAU` code.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Returns the number of codes in the set.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if the set holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for BureauCodes {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            codes: iter.into_iter().map(Into::into).collect(),
        }
    }
}
