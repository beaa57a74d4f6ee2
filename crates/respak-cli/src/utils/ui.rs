// CLI output formatting with consistent styling using colored.
// Logs go to stderr through tracing, user-facing output uses println!/eprintln!.

use colored::Colorize as _;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::EnvFilter;

static E2E_MODE: AtomicBool = AtomicBool::new(false);

/// Enable E2E mode for deterministic output (no colors).
pub fn set_e2e_mode(enabled: bool) {
    E2E_MODE.store(enabled, Ordering::SeqCst);
    if enabled {
        colored::control::set_override(false);
    }
}

pub fn is_e2e() -> bool {
    E2E_MODE.load(Ordering::SeqCst)
}

/// Installs the tracing subscriber.
///
/// `RUST_LOG` takes precedence, otherwise only warnings are shown unless
/// `verbose` is set.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!is_e2e())
        .without_time()
        .try_init()
        .ok();
}

pub fn print_resid_header() {
    println!("{}", "respak resource IDs".dimmed());
}

pub fn print_pack_header() {
    println!("{}", "respak packer".dimmed());
}

pub fn print_collected(name_count: usize, source_count: usize) {
    println!(
        "{} {} from {}",
        "Collected".dimmed(),
        format!("{} name(s)", name_count).green(),
        format!("{} source(s)", source_count).cyan()
    );
}

pub fn print_resid_written(path: &Path, changed: bool) {
    if changed {
        println!("{} {}", "Wrote".dimmed(), path.display().to_string().green());
    } else {
        println!(
            "{} {}",
            "Unchanged".dimmed(),
            path.display().to_string().cyan()
        );
    }
}

pub fn print_ids_loaded(path: &Path, id_count: usize) {
    println!(
        "{} {} ({} resource IDs)",
        "Read".dimmed(),
        path.display().to_string().green(),
        id_count.to_string().cyan()
    );
}

pub fn print_verified() {
    println!("{}", "Resource IDs verified".green());
}

pub fn print_packed(input: &Path, output: &Path) {
    println!(
        "{} {} {} {}",
        "Packed".dimmed(),
        input.display().to_string().green(),
        "->".dimmed(),
        output.display()
    );
}

pub fn print_pack_failed(input: &Path, error: &str) {
    eprintln!(
        "{} {}: {}",
        "Failed to pack".red(),
        input.display().to_string().white().bold(),
        error
    );
}

pub fn print_pack_summary(packed: usize) {
    println!(
        "{} {}",
        "Packed".green(),
        format!("{} file(s)", packed).cyan()
    );
}
