//! Translation name sets and their compatibility fingerprint.

use crate::ResourceId;
use crate::resid::ResourceIdSet;
use std::collections::BTreeSet;

/// Separator placed between names when computing the fingerprint.
const FINGERPRINT_SEPARATOR: &[u8] = b",";

/// A deduplicated set of translation names.
///
/// Insertion order is never observed: names are always yielded in byte-wise
/// lexicographic order, and the position of a name in that order is its
/// identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameSet {
    names: BTreeSet<String>,
}

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a name, returning `false` when it was already present.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Names paired with their assigned identifier.
    pub fn assignments(&self) -> impl ExactSizeIterator<Item = (ResourceId, &str)> + '_ {
        self.names().enumerate()
    }

    /// Hex-encoded BLAKE3 digest of the sorted names joined by commas.
    pub fn fingerprint(&self) -> String {
        fingerprint(self.names())
    }

    /// Builds the identifier mapping this set assigns, tagged with its fingerprint.
    pub fn to_resource_ids(&self) -> ResourceIdSet {
        ResourceIdSet {
            version_hash: self.fingerprint(),
            names: self
                .assignments()
                .map(|(id, name)| (name.to_string(), id as u64))
                .collect(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for NameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for NameSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.add(name);
        }
    }
}

/// Computes the fingerprint of an already sorted sequence of names.
///
/// Hashing is incremental, the result equals hashing `names.join(",")`.
pub fn fingerprint<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut hasher = blake3::Hasher::new();
    for (i, name) in names.into_iter().enumerate() {
        if i > 0 {
            hasher.update(FINGERPRINT_SEPARATOR);
        }
        hasher.update(name.as_bytes());
    }
    hasher.finalize().to_hex().to_string()
}
