//! Name to identifier mappings read back from generated declarations.

use crate::names::fingerprint;
use indexmap::IndexMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// Identifiers do not follow the sorted order of the names.
    #[error("resource '{name}' has identifier {found}, expected {expected}")]
    NonSequential {
        name: String,
        expected: u64,
        found: u64,
    },

    /// The declared fingerprint does not match the declared names.
    #[error("version hash mismatch: declared '{declared}', names hash to '{computed}'")]
    FingerprintMismatch { declared: String, computed: String },
}

/// Resource identifiers together with the fingerprint they were generated for.
///
/// Names keep their declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceIdSet {
    /// Fingerprint declared alongside the identifiers, empty if none was declared.
    pub version_hash: String,
    /// Identifier declared for each name.
    pub names: IndexMap<String, u64>,
}

impl ResourceIdSet {
    pub fn get(&self, name: &str) -> Option<u64> {
        self.names.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The highest declared identifier, or 0 when there are none.
    pub fn max_id(&self) -> u64 {
        self.names.values().copied().max().unwrap_or(0)
    }

    /// Re-derives the assignment from the declared names and checks it against
    /// the declared identifiers and fingerprint.
    ///
    /// An empty declared fingerprint only checks identifier order.
    pub fn verify(&self) -> Result<(), VerifyError> {
        let mut sorted: Vec<&str> = self.names.keys().map(String::as_str).collect();
        sorted.sort_unstable();

        for (expected, name) in sorted.iter().enumerate() {
            let found = self.names[*name];
            if found != expected as u64 {
                return Err(VerifyError::NonSequential {
                    name: name.to_string(),
                    expected: expected as u64,
                    found,
                });
            }
        }

        if !self.version_hash.is_empty() {
            let computed = fingerprint(sorted);
            if computed != self.version_hash {
                return Err(VerifyError::FingerprintMismatch {
                    declared: self.version_hash.clone(),
                    computed,
                });
            }
        }

        Ok(())
    }
}
