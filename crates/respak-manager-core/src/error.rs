use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocalizationError {
    /// The table belongs to a different language.
    #[error("language names mismatch: expected '{expected}', table is for '{found}'")]
    LanguageMismatch { expected: String, found: String },

    /// The table was packed against different resource identifiers.
    #[error("version hash mismatch: expected '{expected}', table has '{found}'")]
    VersionHashMismatch { expected: String, found: String },

    /// No table has been loaded for the language.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// A packed strings file could not be read.
    #[error("Failed to open packed strings '{0}': {1}")]
    Io(PathBuf, #[source] std::io::Error),

    /// A packed strings file is not a valid table.
    #[error("could not decode strings from '{0}': {1}")]
    DecodeFile(PathBuf, #[source] serde_json::Error),

    /// A packed strings document is not a valid table.
    #[error("could not decode strings: {0}")]
    Decode(#[from] serde_json::Error),
}
