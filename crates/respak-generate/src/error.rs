use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RespakGenerateError {
    /// An IO error.
    #[error("IO error accessing path '{0}': {1}")]
    Io(PathBuf, #[source] std::io::Error),

    /// An error that occurs when walking a directory.
    #[error("Error walking directory '{0}': {1}")]
    WalkDir(PathBuf, #[source] walkdir::Error),

    /// A strings file is not valid JSON of the expected shape.
    #[error("Failed to parse strings file '{0}': {1}")]
    Json(PathBuf, #[source] serde_json::Error),

    /// A file given directly is not a JSON file.
    #[error("Not a JSON file: '{0}'")]
    UnsupportedFile(PathBuf),

    /// A translation name cannot be declared as a Rust constant.
    #[error("Translation name '{0}' is not a valid Rust identifier")]
    InvalidName(String),

    /// A translation name collides with a generated declaration.
    #[error("Translation name '{0}' is reserved")]
    ReservedName(String),

    /// The rendered declarations could not be parsed back.
    #[error("Generated declarations are not valid Rust: {0}")]
    Render(#[from] syn::Error),

    /// A translation exists for a name without a resource identifier.
    #[error("No resource ID for name '{0}'")]
    MissingResourceId(String),

    /// Two inputs would be packed into the same output file.
    #[error("Packed tables for '{first}' and '{second}' would both be written to '{output}'")]
    OutputCollision {
        output: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    /// The highest identifier does not fit in memory on this platform.
    #[error("Resource ID {0} is too large to pack")]
    TableTooLarge(u64),
}
