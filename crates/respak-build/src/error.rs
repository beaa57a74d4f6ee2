use thiserror::Error;

#[derive(Debug, Error)]
pub enum RespakBuildError {
    #[error("OUT_DIR is not set, respak-build must run from a build script")]
    NoOutDir,

    #[error("Failed to read respak.toml configuration: {0}")]
    ConfigError(#[from] respak_toml::RespakConfigError),

    #[error(transparent)]
    GenerateError(#[from] respak_generate::RespakGenerateError),
}
