#![doc = include_str!("../README.md")]

use respak_generate::{
    PackTargets, collect_names, pack_file, strings_files, write_declarations,
};
use respak_toml::{CONFIG_FILE_NAME, RespakConfig};
use std::env;
use std::path::{Path, PathBuf};

mod error;
pub use error::RespakBuildError;

/// File name of the declarations written to `OUT_DIR`.
pub const RESID_FILE_NAME: &str = "resid.rs";

/// Directory under `OUT_DIR` receiving packed tables. Files keep their path
/// relative to the source they were found in.
pub const PACKS_DIR_NAME: &str = "packs";

/// Generates resource identifier declarations from a build script.
#[derive(bon::Builder, Clone, Debug, Default)]
pub struct ResourceIdGenerator {
    /// Override the sources scanned for names (defaults to reading from
    /// respak.toml). Relative paths are resolved against the manifest
    /// directory.
    #[builder(into)]
    sources: Option<Vec<PathBuf>>,

    /// Override the declarations path (defaults to `$OUT_DIR/resid.rs`).
    #[builder(into)]
    output_path: Option<PathBuf>,

    /// Also pack every strings file into `$OUT_DIR/packs`.
    #[builder(default)]
    pack: bool,
}

/// Files written by [`ResourceIdGenerator::generate`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub resid: PathBuf,
    pub packs: Vec<PathBuf>,
}

impl ResourceIdGenerator {
    /// Runs the generator for the crate being built.
    pub fn generate(&self) -> Result<GeneratedFiles, RespakBuildError> {
        let manifest_dir = respak_toml::manifest_dir()?;
        let out_dir = env::var_os("OUT_DIR")
            .map(PathBuf::from)
            .ok_or(RespakBuildError::NoOutDir)?;
        self.generate_in(&manifest_dir, &out_dir)
    }

    /// Runs the generator with explicit manifest and output directories.
    pub fn generate_in(
        &self,
        manifest_dir: &Path,
        out_dir: &Path,
    ) -> Result<GeneratedFiles, RespakBuildError> {
        let config = RespakConfig::load_or_default(manifest_dir)?;
        let sources = match &self.sources {
            Some(sources) => sources.iter().map(|p| manifest_dir.join(p)).collect(),
            None => config.sources_from_base(manifest_dir),
        };
        let resid = self
            .output_path
            .clone()
            .unwrap_or_else(|| out_dir.join(RESID_FILE_NAME));

        println!(
            "cargo:rerun-if-changed={}",
            manifest_dir.join(CONFIG_FILE_NAME).display()
        );
        for source in &sources {
            println!("cargo:rerun-if-changed={}", source.display());
        }

        let names = collect_names(&sources)?;
        write_declarations(&resid, &names, "respak-build")?;

        let mut packs = Vec::new();
        if self.pack {
            let ids = names.to_resource_ids();
            let mut targets = PackTargets::new(Some(&out_dir.join(PACKS_DIR_NAME)));
            for source in &sources {
                for file in strings_files(source)? {
                    let output = targets.claim(&file, source)?;
                    pack_file(&file, &ids, &output)?;
                    packs.push(output);
                }
            }
        }

        Ok(GeneratedFiles { resid, packs })
    }
}
