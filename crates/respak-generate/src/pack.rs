//! Packs translated strings into identifier-indexed tables.

use crate::{RespakGenerateError, read_strings_document, write_if_changed};
use respak_shared::{PackedTable, ResourceIdSet, StringsDocument};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

pub(crate) const PACK_SUFFIX: &str = ".pak.json";

/// Packs `document` against `ids`.
///
/// The table has `ids.max_id() + 1` slots. Names without a translation leave
/// their slot empty, translations without an identifier are an error.
pub fn pack(
    document: &StringsDocument,
    ids: &ResourceIdSet,
) -> Result<PackedTable, RespakGenerateError> {
    let max_id = ids.max_id();
    let len = max_id
        .checked_add(1)
        .and_then(|len| usize::try_from(len).ok())
        .ok_or(RespakGenerateError::TableTooLarge(max_id))?;

    let mut strings = vec![String::new(); len];
    for (name, value) in &document.strings {
        let id = ids
            .get(name)
            .ok_or_else(|| RespakGenerateError::MissingResourceId(name.clone()))?;
        // id <= max_id < len, so the index is in bounds.
        strings[id as usize] = value.clone();
    }

    Ok(PackedTable {
        lang: document.lang.clone(),
        version_hash: ids.version_hash.clone(),
        strings,
    })
}

/// Packs the strings file at `path` and writes the table to `out_path`.
pub fn pack_file(
    path: &Path,
    ids: &ResourceIdSet,
    out_path: &Path,
) -> Result<(), RespakGenerateError> {
    let document = read_strings_document(path)?;
    let table = pack(&document, ids)?;

    let mut content = serde_json::to_string(&table)
        .map_err(|e| RespakGenerateError::Json(out_path.to_path_buf(), e))?;
    content.push('\n');
    write_if_changed(out_path, &content)?;

    tracing::info!(
        "Packed {} ({} strings, lang '{}') into {}",
        path.display(),
        document.strings.len(),
        table.lang,
        out_path.display()
    );
    Ok(())
}

/// Output paths of the packed tables of one run.
///
/// Without an output directory each table is written next to its input. With
/// one, a file found under a source directory keeps its path relative to that
/// directory, so `i18n/base/en.json` and `i18n/patch/en.json` stay apart.
/// Two inputs mapping to the same output are an error.
#[derive(Debug, Default)]
pub struct PackTargets {
    out_dir: Option<PathBuf>,
    claimed: HashMap<PathBuf, PathBuf>,
}

impl PackTargets {
    pub fn new(out_dir: Option<&Path>) -> Self {
        Self {
            out_dir: out_dir.map(Path::to_path_buf),
            claimed: HashMap::new(),
        }
    }

    /// Reserves the output path for `file`, which was found under `source`.
    ///
    /// Claiming the same file again returns the same path.
    pub fn claim(&mut self, file: &Path, source: &Path) -> Result<PathBuf, RespakGenerateError> {
        let output = self.output_path(file, source);
        match self.claimed.entry(output.clone()) {
            Entry::Occupied(entry) if entry.get() != file => {
                Err(RespakGenerateError::OutputCollision {
                    output,
                    first: entry.get().clone(),
                    second: file.to_path_buf(),
                })
            },
            Entry::Occupied(_) => Ok(output),
            Entry::Vacant(entry) => {
                entry.insert(file.to_path_buf());
                Ok(output)
            },
        }
    }

    /// Output path for `file` without claiming it.
    pub fn output_path(&self, file: &Path, source: &Path) -> PathBuf {
        let Some(dir) = &self.out_dir else {
            return pack_file_name(file);
        };
        let relative = match file.strip_prefix(source) {
            Ok(relative) if !relative.as_os_str().is_empty() => relative,
            _ => file.file_name().map_or(file, Path::new),
        };
        dir.join(pack_file_name(relative))
    }
}

/// Output path for a packed table: `en.json` becomes `en.pak.json`, other
/// names get `.pak.json` appended.
pub fn pack_file_name(path: &Path) -> PathBuf {
    let base = if path.extension().is_some_and(|ext| ext == "json") {
        path.with_extension("")
    } else {
        path.to_path_buf()
    };
    let mut name = base.into_os_string();
    name.push(PACK_SUFFIX);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use respak_shared::NameSet;
    use std::fs;

    fn document(lang: &str, pairs: &[(&str, &str)]) -> StringsDocument {
        StringsDocument {
            lang: lang.to_string(),
            strings: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn abc_ids() -> ResourceIdSet {
        NameSet::from_iter(["B", "A", "C"]).to_resource_ids()
    }

    #[test]
    fn test_pack_places_values_by_identifier() {
        let ids = abc_ids();
        let table = pack(&document("en", &[("A", "x"), ("C", "z")]), &ids).unwrap();

        assert_eq!(table.strings, vec!["x", "", "z"]);
        assert_eq!(table.lang, "en");
        assert_eq!(table.version_hash, ids.version_hash);
    }

    #[test]
    fn test_pack_unknown_name_is_an_error() {
        let result = pack(&document("en", &[("A", "x"), ("Typo", "?")]), &abc_ids());
        assert!(matches!(result, Err(RespakGenerateError::MissingResourceId(name)) if name == "Typo"));
    }

    #[test]
    fn test_pack_empty_document_yields_empty_slots() {
        let table = pack(&document("et", &[]), &abc_ids()).unwrap();
        assert_eq!(table.strings, vec!["", "", ""]);
    }

    #[test]
    fn test_pack_sparse_identifiers() {
        let ids = ResourceIdSet {
            version_hash: "h".to_string(),
            names: [("A".to_string(), 0), ("B".to_string(), 4)]
                .into_iter()
                .collect(),
        };
        let table = pack(&document("en", &[("B", "b")]), &ids).unwrap();
        assert_eq!(table.strings, vec!["", "", "", "", "b"]);
    }

    #[test]
    fn test_pack_does_not_mutate_inputs() {
        let ids = abc_ids();
        let doc = document("en", &[("B", "y")]);
        let (ids_before, doc_before) = (ids.clone(), doc.clone());

        pack(&doc, &ids).unwrap();
        assert_eq!(ids, ids_before);
        assert_eq!(doc, doc_before);
    }

    #[test]
    fn test_pack_file_name() {
        assert_eq!(
            pack_file_name(Path::new("strings/en.json")),
            PathBuf::from("strings/en.pak.json")
        );
        assert_eq!(
            pack_file_name(Path::new("strings/en.txt")),
            PathBuf::from("strings/en.txt.pak.json")
        );
        assert_eq!(pack_file_name(Path::new("en")), PathBuf::from("en.pak.json"));
    }

    #[test]
    fn test_pack_file_writes_table() {
        let temp = tempfile::TempDir::new().unwrap();
        let input = temp.path().join("en.json");
        fs::write(
            &input,
            r#"{ "lang": "en", "strings": { "A": "x", "C": "z" } }"#,
        )
        .unwrap();

        let out = temp.path().join("packs/en.pak.json");
        pack_file(&input, &abc_ids(), &out).unwrap();

        let table: PackedTable =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(table.strings, vec!["x", "", "z"]);
    }

    #[test]
    fn test_targets_next_to_input_without_out_dir() {
        let mut targets = PackTargets::new(None);
        let file = Path::new("i18n/base/en.json");
        assert_eq!(
            targets.claim(file, Path::new("i18n")).unwrap(),
            PathBuf::from("i18n/base/en.pak.json")
        );
    }

    #[test]
    fn test_targets_keep_relative_path_under_out_dir() {
        let mut targets = PackTargets::new(Some(Path::new("packs")));
        let source = Path::new("i18n");

        let base = targets.claim(Path::new("i18n/base/en.json"), source).unwrap();
        let patch = targets.claim(Path::new("i18n/patch/en.json"), source).unwrap();
        let flat = targets.claim(Path::new("i18n/et.json"), source).unwrap();

        assert_eq!(base, PathBuf::from("packs/base/en.pak.json"));
        assert_eq!(patch, PathBuf::from("packs/patch/en.pak.json"));
        assert_eq!(flat, PathBuf::from("packs/et.pak.json"));
    }

    #[test]
    fn test_targets_single_file_uses_file_name() {
        let mut targets = PackTargets::new(Some(Path::new("packs")));
        let file = Path::new("i18n/et.json");
        assert_eq!(
            targets.claim(file, file).unwrap(),
            PathBuf::from("packs/et.pak.json")
        );
    }

    #[test]
    fn test_targets_reject_shared_output() {
        let mut targets = PackTargets::new(Some(Path::new("packs")));
        let base = Path::new("i18n/base/en.json");
        let patch = Path::new("i18n/patch/en.json");

        targets.claim(base, base).unwrap();
        let result = targets.claim(patch, patch);
        assert!(matches!(
            result,
            Err(RespakGenerateError::OutputCollision { output, first, second })
                if output == Path::new("packs/en.pak.json") && first == base && second == patch
        ));
    }

    #[test]
    fn test_targets_same_file_twice_is_allowed() {
        let mut targets = PackTargets::new(Some(Path::new("packs")));
        let file = Path::new("i18n/en.json");
        let first = targets.claim(file, Path::new("i18n")).unwrap();
        let second = targets.claim(file, file).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_targets_reject_names_sharing_a_pack_name() {
        let mut targets = PackTargets::new(None);
        targets.claim(Path::new("en.json"), Path::new("en.json")).unwrap();
        let result = targets.claim(Path::new("en"), Path::new("en"));
        assert!(matches!(result, Err(RespakGenerateError::OutputCollision { .. })));
    }
}
