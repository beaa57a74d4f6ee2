//! JSON documents exchanged between authors, the packer and the runtime.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An authored translation file: one language and its translated strings.
///
/// ```json
/// { "lang": "en", "strings": { "Greeting": "Hello!" } }
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct StringsDocument {
    /// Language tag.
    #[serde(default)]
    pub lang: String,
    /// Translation name to translated string.
    #[serde(default)]
    pub strings: IndexMap<String, String>,
}

/// A packed string table, indexed by resource identifier.
///
/// Unused slots hold empty strings.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PackedTable {
    /// Language tag.
    pub lang: String,
    /// Fingerprint of the resource identifiers this table was packed against.
    pub version_hash: String,
    /// Translated strings, slot `i` belongs to identifier `i`.
    pub strings: Vec<String>,
}

impl PackedTable {
    pub fn new(lang: impl Into<String>, version_hash: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            version_hash: version_hash.into(),
            strings: Vec::new(),
        }
    }

    pub fn with_strings<I, S>(mut self, strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strings = strings.into_iter().map(Into::into).collect();
        self
    }
}
