//! Registry of the languages loaded by an application.

use crate::{Language, LocalizationError, parse_table, read_table};
use respak_shared::{PackedTable, ResourceId};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::Path;

/// All languages loaded by an application, keyed by language tag.
///
/// An optional version hash applies to every table loaded into the domain,
/// on top of the hash each language binds on its own.
#[derive(Clone, Debug, Default)]
pub struct Domain {
    languages: BTreeMap<String, Language>,
    version_hash: String,
}

impl Domain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a domain that only accepts tables packed against `version_hash`.
    ///
    /// Generated declarations export the hash as `VERSION_HASH`.
    pub fn with_version_hash(version_hash: impl Into<String>) -> Self {
        Self {
            version_hash: version_hash.into(),
            ..Self::default()
        }
    }

    /// Requires every future table to carry `version_hash`. An empty hash
    /// disables the check.
    pub fn set_version_hash(&mut self, version_hash: impl Into<String>) {
        self.version_hash = version_hash.into();
    }

    pub fn version_hash(&self) -> &str {
        &self.version_hash
    }

    /// Merges `table` into the language it is tagged with, creating the
    /// language on first use. On error nothing is changed.
    pub fn add_table(&mut self, table: &PackedTable) -> Result<(), LocalizationError> {
        if !self.version_hash.is_empty() && self.version_hash != table.version_hash {
            return Err(LocalizationError::VersionHashMismatch {
                expected: self.version_hash.clone(),
                found: table.version_hash.clone(),
            });
        }

        match self.languages.entry(table.lang.clone()) {
            Entry::Occupied(mut entry) => entry.get_mut().add_table(table),
            Entry::Vacant(entry) => {
                let mut language = Language::new(table.lang.clone());
                language.add_table(table)?;
                tracing::debug!("Loaded new language '{}'", table.lang);
                entry.insert(language);
                Ok(())
            },
        }
    }

    /// Loads the packed table stored at `path`.
    pub fn load_strings(&mut self, path: &Path) -> Result<(), LocalizationError> {
        let table = read_table(path)?;
        self.add_table(&table)?;
        tracing::info!(
            "Loaded '{}' strings from {}",
            table.lang,
            path.display()
        );
        Ok(())
    }

    /// Loads the packed table in `json`.
    pub fn load_str(&mut self, json: &str) -> Result<(), LocalizationError> {
        self.add_table(&parse_table(json)?)
    }

    /// Returns a loaded language by its tag.
    pub fn language(&self, tag: &str) -> Result<&Language, LocalizationError> {
        self.languages
            .get(tag)
            .ok_or_else(|| LocalizationError::UnknownLanguage(tag.to_string()))
    }

    /// Loaded languages, ordered by tag.
    pub fn languages(&self) -> impl ExactSizeIterator<Item = &Language> {
        self.languages.values()
    }

    /// The string for `id` in language `tag`, or `""` when either is unknown.
    pub fn resolve(&self, tag: &str, id: ResourceId) -> &str {
        self.languages.get(tag).map_or("", |language| language.string(id))
    }
}
