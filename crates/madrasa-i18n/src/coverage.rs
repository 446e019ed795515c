//! Translation coverage: which keys a locale is still missing.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::table::LocaleTable;

/// Keys of a reference locale compared against a candidate locale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coverage {
    /// Leaf keys in the reference table.
    pub total: usize,
    /// In the reference, absent from the candidate.
    pub missing: Vec<String>,
    /// In the candidate only.
    pub extra: Vec<String>,
}

impl Coverage {
    /// Share of reference keys the candidate translates, in `0.0..=1.0`.
    /// An empty reference counts as fully covered.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        (self.total - self.missing.len()) as f64 / self.total as f64
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Compare `candidate` against `reference`. A key that is a leaf in one and
/// a table in the other counts as missing.
pub fn coverage(reference: &LocaleTable, candidate: &LocaleTable) -> Coverage {
    let reference_keys: BTreeSet<String> = reference.leaf_keys().into_iter().collect();
    let candidate_keys: BTreeSet<String> = candidate.leaf_keys().into_iter().collect();

    Coverage {
        total: reference_keys.len(),
        missing: reference_keys.difference(&candidate_keys).cloned().collect(),
        extra: candidate_keys.difference(&reference_keys).cloned().collect(),
    }
}
