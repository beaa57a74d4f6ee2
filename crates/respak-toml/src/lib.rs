#![doc = include_str!("../README.md")]

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "respak.toml";

#[derive(Debug, Error)]
pub enum RespakConfigError {
    /// Configuration file not found.
    #[error("respak.toml configuration file not found at '{0}'")]
    NotFound(PathBuf),
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    /// `CARGO_MANIFEST_DIR` is not set.
    #[error("CARGO_MANIFEST_DIR is not set")]
    NoManifestDir,
}

/// The configuration for `respak`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RespakConfig {
    /// Translation files or directories scanned for names.
    pub sources: Vec<PathBuf>,
    /// Path of the generated identifier declarations.
    pub resid_path: PathBuf,
    /// Directory receiving packed tables. When unset, each packed table is
    /// written next to its input.
    pub packs_dir: Option<PathBuf>,
}

impl Default for RespakConfig {
    fn default() -> Self {
        Self {
            sources: vec![PathBuf::from("i18n")],
            resid_path: PathBuf::from("resid.rs"),
            packs_dir: None,
        }
    }
}

impl RespakConfig {
    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, RespakConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(RespakConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs_err::read_to_string(path)?;
        let config: RespakConfig = toml::from_str(&content)?;

        Ok(config)
    }

    /// Reads `respak.toml` from `dir`, falling back to the defaults when the
    /// file does not exist.
    pub fn load_or_default(dir: &Path) -> Result<Self, RespakConfigError> {
        match Self::read_from_path(dir.join(CONFIG_FILE_NAME)) {
            Err(RespakConfigError::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Source paths resolved against `base_dir`.
    pub fn sources_from_base(&self, base_dir: &Path) -> Vec<PathBuf> {
        self.sources.iter().map(|p| base_dir.join(p)).collect()
    }

    /// Declarations path resolved against `base_dir`.
    pub fn resid_path_from_base(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.resid_path)
    }

    /// Packed table directory resolved against `base_dir`, if configured.
    pub fn packs_dir_from_base(&self, base_dir: &Path) -> Option<PathBuf> {
        self.packs_dir.as_ref().map(|p| base_dir.join(p))
    }
}

/// Returns `CARGO_MANIFEST_DIR` as a path.
pub fn manifest_dir() -> Result<PathBuf, RespakConfigError> {
    env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .ok_or(RespakConfigError::NoManifestDir)
}
