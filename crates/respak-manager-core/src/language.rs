//! Merged string table of a single language.

use crate::{LocalizationError, parse_table, read_table};
use respak_shared::{PackedTable, ResourceId};
use std::path::Path;

/// The strings loaded so far for one language tag.
///
/// The table only ever grows. The version hash is bound by the first load
/// that carries one, later loads must match it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Language {
    tag: String,
    version_hash: String,
    strings: Vec<String>,
}

impl Language {
    /// Creates an empty language for `tag`.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Version hash bound to this language, empty until a table provides one.
    pub fn version_hash(&self) -> &str {
        &self.version_hash
    }

    /// Number of slots in the merged table.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// The string for `id`, or `""` when there is none.
    pub fn string(&self, id: ResourceId) -> &str {
        self.strings.get(id).map_or("", String::as_str)
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    /// Checks whether `table` could be merged without changing anything.
    pub fn check(&self, table: &PackedTable) -> Result<(), LocalizationError> {
        if table.lang != self.tag {
            return Err(LocalizationError::LanguageMismatch {
                expected: self.tag.clone(),
                found: table.lang.clone(),
            });
        }
        if !self.version_hash.is_empty() && self.version_hash != table.version_hash {
            return Err(LocalizationError::VersionHashMismatch {
                expected: self.version_hash.clone(),
                found: table.version_hash.clone(),
            });
        }
        Ok(())
    }

    /// Merges `table` into this language.
    ///
    /// Empty strings in `table` never replace loaded ones. On error nothing
    /// is changed.
    pub fn add_table(&mut self, table: &PackedTable) -> Result<(), LocalizationError> {
        self.check(table)?;

        self.version_hash.clone_from(&table.version_hash);
        if self.strings.len() < table.strings.len() {
            self.strings.resize(table.strings.len(), String::new());
        }
        for (slot, value) in self.strings.iter_mut().zip(&table.strings) {
            if !value.is_empty() {
                slot.clone_from(value);
            }
        }

        tracing::debug!(
            "Merged {} strings into language '{}' ({} slots)",
            table.strings.len(),
            self.tag,
            self.strings.len()
        );
        Ok(())
    }

    /// Merges the packed table stored at `path`.
    pub fn load_strings(&mut self, path: &Path) -> Result<(), LocalizationError> {
        self.add_table(&read_table(path)?)
    }

    /// Merges the packed table in `json`.
    pub fn load_str(&mut self, json: &str) -> Result<(), LocalizationError> {
        self.add_table(&parse_table(json)?)
    }
}
