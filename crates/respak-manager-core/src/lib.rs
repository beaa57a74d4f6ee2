#![doc = include_str!("../README.md")]

use respak_shared::PackedTable;
use std::path::Path;

pub mod domain;
pub mod error;
pub mod language;

pub use domain::Domain;
pub use error::LocalizationError;
pub use language::Language;

/// Reads a packed table from a JSON file.
pub fn read_table(path: &Path) -> Result<PackedTable, LocalizationError> {
    let content = fs_err::read_to_string(path)
        .map_err(|e| LocalizationError::Io(path.to_path_buf(), e))?;
    serde_json::from_str(&content).map_err(|e| LocalizationError::DecodeFile(path.to_path_buf(), e))
}

/// Parses a packed table from a JSON string.
pub fn parse_table(json: &str) -> Result<PackedTable, LocalizationError> {
    Ok(serde_json::from_str(json)?)
}
