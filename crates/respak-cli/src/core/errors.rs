//! CLI error types using miette diagnostics.

// Fields in these structs are read by miette's Diagnostic derive macro
#![allow(unused)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use respak_generate::RespakGenerateError;
use respak_sc_parser::error::RespakScParserError;
use respak_shared::{VERSION_HASH_IDENT, VerifyError};
use std::path::PathBuf;
use thiserror::Error;

/// Error when parsing the respak.toml configuration file.
#[derive(Debug, Diagnostic, Error)]
#[error("failed to parse respak.toml configuration")]
#[diagnostic(code(respak::config::parse_error))]
pub struct ConfigParseError {
    /// The source content of the config file.
    #[source_code]
    pub src: NamedSource<String>,

    /// The span where the error occurred.
    #[label("error occurred here")]
    pub span: Option<SourceSpan>,

    /// The underlying parse error message.
    #[help]
    pub help: String,
}

/// Error when collecting names or writing the declarations fails.
#[derive(Debug, Diagnostic, Error)]
#[error("failed to generate resource identifiers")]
#[diagnostic(code(respak::resid::failed))]
pub struct ResidError {
    #[source]
    pub source: RespakGenerateError,

    #[help]
    pub help: Option<String>,
}

impl From<RespakGenerateError> for ResidError {
    fn from(source: RespakGenerateError) -> Self {
        let help = match &source {
            RespakGenerateError::InvalidName(_) => Some(
                "Translation names become Rust constants, use identifiers such as `MenuOpen`"
                    .to_string(),
            ),
            RespakGenerateError::ReservedName(_) => Some(format!(
                "`{}` holds the version hash, rename the translation",
                VERSION_HASH_IDENT
            )),
            RespakGenerateError::UnsupportedFile(_) => {
                Some("Only `.json` strings files can be given directly".to_string())
            },
            _ => None,
        };
        Self { source, help }
    }
}

/// Error when the resource identifier declarations cannot be read.
#[derive(Debug, Diagnostic, Error)]
#[error("failed to read resource identifiers from {path}")]
#[diagnostic(
    code(respak::pack::resid_unreadable),
    help("Run `respak resid` to regenerate the declarations")
)]
pub struct ResidReadError {
    pub path: PathBuf,

    #[source]
    pub source: RespakScParserError,
}

/// Error when `--verify` finds declarations that do not match their names.
#[derive(Debug, Diagnostic, Error)]
#[error("resource identifiers in {path} are out of date")]
#[diagnostic(
    code(respak::pack::verify_failed),
    help("Run `respak resid` to regenerate the declarations")
)]
pub struct ResidVerifyError {
    pub path: PathBuf,

    #[source]
    pub source: VerifyError,
}

/// Error when packing a single file fails.
#[derive(Debug, Diagnostic, Error)]
#[error("failed to pack {path}")]
#[diagnostic(code(respak::pack::failed))]
pub struct PackError {
    /// The path to the file.
    pub path: PathBuf,

    /// The underlying error.
    #[help]
    pub help: String,
}

/// Report for pack command results.
#[derive(Debug, Diagnostic, Error)]
#[error("packed {packed_count} file(s), {error_count} error(s)")]
#[diagnostic(code(respak::pack::report))]
pub struct PackReport {
    /// Number of files packed.
    pub packed_count: usize,

    /// Number of errors.
    pub error_count: usize,

    /// Related pack errors.
    #[related]
    pub errors: Vec<PackError>,
}

/// Main CLI error type that wraps all specific errors.
#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    ConfigParse(#[from] ConfigParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Resid(#[from] ResidError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    ResidRead(#[from] ResidReadError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    ResidVerify(#[from] ResidVerifyError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Pack(#[from] PackReport),

    #[error("IO error: {0}")]
    #[diagnostic(code(respak::io))]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    #[diagnostic(code(respak::other))]
    Other(String),
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(format!("{:#}", err))
    }
}
