//! Resid command: collects translation names and writes the resource
//! identifier declarations.

use crate::commands::{Project, ProjectArgs};
use crate::core::{CliError, ResidError};
use crate::utils::ui;
use clap::Parser;
use respak_generate::{collect_names, write_declarations};
use std::path::PathBuf;

/// Arguments for the resid command.
#[derive(Debug, Parser)]
pub struct ResidArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Translation files or directories (defaults to `sources` in respak.toml).
    pub sources: Vec<PathBuf>,

    /// Where to write the declarations (defaults to `resid_path` in respak.toml).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the resid command. Stops at the first error.
pub fn run_resid(args: ResidArgs) -> Result<(), CliError> {
    let project = Project::load(args.project)?;
    let generated_by = generated_by(&args.sources);
    let sources = project.sources(args.sources);
    let output = project.resid_path(args.output);

    ui::print_resid_header();

    let names = collect_names(&sources).map_err(ResidError::from)?;
    ui::print_collected(names.len(), sources.len());

    let changed = write_declarations(&output, &names, &generated_by).map_err(ResidError::from)?;
    ui::print_resid_written(&output, changed);

    Ok(())
}

/// The command line recorded in the header of the declarations.
fn generated_by(cli_sources: &[PathBuf]) -> String {
    let mut line = String::from("respak resid");
    for source in cli_sources {
        line.push(' ');
        line.push_str(&source.display().to_string());
    }
    line
}
