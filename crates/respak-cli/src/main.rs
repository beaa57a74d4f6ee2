use clap::{Parser, Subcommand};
use miette::Result as MietteResult;
use respak_cli::commands::{PackArgs, ResidArgs, run_pack, run_resid};
use respak_cli::utils::ui;

#[derive(Parser)]
#[command(name = "respak")]
#[command(about = "Generate resource identifiers and pack translation tables")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Show debug logs (RUST_LOG overrides this).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Plain, uncolored output for end-to-end tests.
    #[arg(long, global = true, hide = true)]
    e2e: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect translation names and write resource identifier declarations
    Resid(ResidArgs),

    /// Pack translation files into tables indexed by resource identifier
    Pack(PackArgs),
}

fn main() -> MietteResult<()> {
    let cli = Cli::parse();

    ui::set_e2e_mode(cli.e2e);
    let fancy = !cli.e2e;
    miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(fancy)
                .unicode(fancy)
                .context_lines(2)
                .tab_width(4)
                .color(fancy)
                .build(),
        )
    }))
    .ok();

    ui::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Resid(args) => run_resid(args),
        Commands::Pack(args) => run_pack(args),
    };

    result.map_err(miette::Report::new)
}
