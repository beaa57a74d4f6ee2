//! Pack command: turns translation files into identifier-indexed tables.

use crate::commands::{Project, ProjectArgs};
use crate::core::{CliError, PackError, PackReport, ResidReadError, ResidVerifyError};
use crate::utils::ui;
use clap::Parser;
use respak_generate::{PackTargets, pack_file, strings_files};
use std::path::PathBuf;

/// Arguments for the pack command.
#[derive(Debug, Parser)]
pub struct PackArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Translation files or directories to pack (defaults to `sources` in respak.toml).
    pub files: Vec<PathBuf>,

    /// Resource identifier declarations (defaults to `resid_path` in respak.toml).
    #[arg(long)]
    pub resid: Option<PathBuf>,

    /// Output directory (defaults to `packs_dir` in respak.toml, or next to each input).
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Check that the identifiers are sequential and match their version hash.
    #[arg(long)]
    pub verify: bool,
}

/// Run the pack command.
///
/// Failing files are reported and skipped, the command fails at the end if
/// any file failed.
pub fn run_pack(args: PackArgs) -> Result<(), CliError> {
    let project = Project::load(args.project)?;
    let resid_path = project.resid_path(args.resid);
    let out_dir = project.packs_dir(args.out_dir);
    let inputs = project.sources(args.files);

    ui::print_pack_header();

    let ids = respak_sc_parser::parse_path(&resid_path).map_err(|source| ResidReadError {
        path: resid_path.clone(),
        source,
    })?;
    ui::print_ids_loaded(&resid_path, ids.len());

    if args.verify {
        ids.verify().map_err(|source| ResidVerifyError {
            path: resid_path.clone(),
            source,
        })?;
        ui::print_verified();
    }

    let mut targets = PackTargets::new(out_dir.as_deref());
    let mut packed_count = 0;
    let mut errors: Vec<PackError> = Vec::new();

    for input in inputs {
        let files = if input.is_dir() {
            match strings_files(&input) {
                Ok(files) => files,
                Err(e) => {
                    ui::print_pack_failed(&input, &e.to_string());
                    errors.push(PackError {
                        path: input,
                        help: e.to_string(),
                    });
                    continue;
                },
            }
        } else {
            vec![input.clone()]
        };

        for file in files {
            let packed = targets
                .claim(&file, &input)
                .and_then(|output| pack_file(&file, &ids, &output).map(|()| output));
            match packed {
                Ok(output) => {
                    packed_count += 1;
                    ui::print_packed(&file, &output);
                },
                Err(e) => {
                    ui::print_pack_failed(&file, &e.to_string());
                    errors.push(PackError {
                        path: file,
                        help: e.to_string(),
                    });
                },
            }
        }
    }

    if errors.is_empty() {
        ui::print_pack_summary(packed_count);
        Ok(())
    } else {
        Err(CliError::Pack(PackReport {
            packed_count,
            error_count: errors.len(),
            errors,
        }))
    }
}
