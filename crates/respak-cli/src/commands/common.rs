use crate::core::{CliError, ConfigParseError};
use clap::Args;
use miette::NamedSource;
use respak_toml::{CONFIG_FILE_NAME, RespakConfig, RespakConfigError};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Args)]
pub struct ProjectArgs {
    /// Directory containing respak.toml (defaults to current directory).
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}

/// The project a command runs in: its root directory and configuration.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: RespakConfig,
}

impl Project {
    /// Loads respak.toml from the project root, falling back to defaults when
    /// there is none.
    pub fn load(args: ProjectArgs) -> Result<Self, CliError> {
        let root = args.path.unwrap_or_else(|| PathBuf::from("."));
        let config = load_config(&root)?;
        tracing::debug!("Using project root {}: {:?}", root.display(), config);
        Ok(Self { root, config })
    }

    /// Sources given on the command line, or the configured ones.
    pub fn sources(&self, cli_sources: Vec<PathBuf>) -> Vec<PathBuf> {
        if cli_sources.is_empty() {
            self.config.sources_from_base(&self.root)
        } else {
            cli_sources
        }
    }

    /// Declarations path given on the command line, or the configured one.
    pub fn resid_path(&self, cli_path: Option<PathBuf>) -> PathBuf {
        cli_path.unwrap_or_else(|| self.config.resid_path_from_base(&self.root))
    }

    /// Pack output directory given on the command line, or the configured one.
    pub fn packs_dir(&self, cli_dir: Option<PathBuf>) -> Option<PathBuf> {
        cli_dir.or_else(|| self.config.packs_dir_from_base(&self.root))
    }
}

fn load_config(root: &Path) -> Result<RespakConfig, CliError> {
    let config_path = root.join(CONFIG_FILE_NAME);
    match RespakConfig::load_or_default(root) {
        Ok(config) => Ok(config),
        Err(RespakConfigError::ParseError(e)) => {
            let content = fs_err::read_to_string(&config_path)?;
            Err(ConfigParseError {
                src: NamedSource::new(config_path.display().to_string(), content),
                span: e.span().map(Into::into),
                help: e.message().to_string(),
            }
            .into())
        },
        Err(e) => Err(anyhow::Error::new(e)
            .context(format!("Failed to read {}", config_path.display()))
            .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_without_config() {
        let temp = assert_fs::TempDir::new().unwrap();
        let project = Project::load(ProjectArgs {
            path: Some(temp.path().to_path_buf()),
        })
        .unwrap();

        assert_eq!(project.sources(Vec::new()), vec![temp.path().join("i18n")]);
        assert_eq!(project.resid_path(None), temp.path().join("resid.rs"));
        assert_eq!(project.packs_dir(None), None);
    }

    #[test]
    fn test_cli_values_override_config() {
        let temp = assert_fs::TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "sources = [\"strings\"]\npacks_dir = \"out\"\n",
        )
        .unwrap();
        let project = Project::load(ProjectArgs {
            path: Some(temp.path().to_path_buf()),
        })
        .unwrap();

        assert_eq!(project.sources(Vec::new()), vec![temp.path().join("strings")]);
        assert_eq!(
            project.sources(vec![PathBuf::from("en.json")]),
            vec![PathBuf::from("en.json")]
        );
        assert_eq!(project.packs_dir(None), Some(temp.path().join("out")));
        assert_eq!(
            project.packs_dir(Some(PathBuf::from("packs"))),
            Some(PathBuf::from("packs"))
        );
    }

    #[test]
    fn test_invalid_config_is_a_diagnostic() {
        let temp = assert_fs::TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "sources = 3\n").unwrap();

        let result = Project::load(ProjectArgs {
            path: Some(temp.path().to_path_buf()),
        });
        assert!(matches!(result, Err(CliError::ConfigParse(_))));
    }
}
