//! Gathers translation names from JSON strings files.

use crate::pack::PACK_SUFFIX;
use crate::{RespakGenerateError, read_strings_document};
use respak_shared::NameSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

const STRINGS_EXTENSION: &str = "json";

/// Collects the names declared by every source into one set.
///
/// Each source is either a JSON strings file or a directory scanned
/// recursively. Stops at the first error.
pub fn collect_names<P: AsRef<Path>>(sources: &[P]) -> Result<NameSet, RespakGenerateError> {
    let mut names = NameSet::new();
    for source in sources {
        collect_into(&mut names, source.as_ref())?;
    }
    tracing::info!(
        "Collected {} translation names from {} source(s)",
        names.len(),
        sources.len()
    );
    Ok(names)
}

/// Adds the names found at `path` to `names`.
pub fn collect_into(names: &mut NameSet, path: &Path) -> Result<(), RespakGenerateError> {
    for file in strings_files(path)? {
        let document = read_strings_document(&file)?;
        let before = names.len();
        names.extend(document.strings.into_keys());
        tracing::debug!(
            "Loaded {} new name(s) from {}",
            names.len() - before,
            file.display()
        );
    }
    Ok(())
}

/// Lists the JSON strings files at `path`, in file name order.
///
/// Inside directories, symbolic links are followed. Hidden entries, packed
/// tables and files without a `.json` extension are skipped. A file given directly must be a JSON file.
pub fn strings_files(path: &Path) -> Result<Vec<PathBuf>, RespakGenerateError> {
    let metadata =
        fs_err::metadata(path).map_err(|e| RespakGenerateError::Io(path.to_path_buf(), e))?;

    if !metadata.is_dir() {
        if !is_strings_file(path) {
            return Err(RespakGenerateError::UnsupportedFile(path.to_path_buf()));
        }
        return Ok(vec![path.to_path_buf()]);
    }

    let walker = WalkDir::new(path)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| RespakGenerateError::WalkDir(path.to_path_buf(), e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if is_strings_file(entry.path()) && !is_packed_table(entry.path()) {
            files.push(entry.into_path());
        } else {
            tracing::trace!("Skipping {}", entry.path().display());
        }
    }
    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn is_strings_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == STRINGS_EXTENSION)
}

fn is_packed_table(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(PACK_SUFFIX))
}
