use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RespakScParserError {
    /// An IO error.
    #[error("IO error accessing path '{0}': {1}")]
    Io(PathBuf, #[source] std::io::Error),

    /// An error that occurs when parsing a Rust file.
    #[error("Failed to parse Rust file '{0}': {1}")]
    Syn(PathBuf, #[source] syn::Error),

    /// An error that occurs when walking a directory.
    #[error("Error walking directory '{0}': {1}")]
    WalkDir(PathBuf, #[source] walkdir::Error),

    /// The value of a constant cannot be evaluated from the source alone.
    #[error("In '{0}': no value for constant '{1}'")]
    UnresolvedValue(PathBuf, String),

    /// The value of an identifier constant is not a non-negative integer.
    #[error("In '{0}': value of constant '{1}' is not a non-negative integer")]
    NotAnInteger(PathBuf, String),

    /// The same constant is declared more than once.
    #[error("In '{0}': constant '{1}' is declared more than once")]
    Duplicate(PathBuf, String),
}
