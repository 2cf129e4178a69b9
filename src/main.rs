use clap::Parser;
use lotscan::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan(args) => lotscan::cli::commands::scan::run(args, &cli.global),
        Commands::Part(cmd) => lotscan::cli::commands::part::run(cmd, &cli.global),
        Commands::Template(cmd) => lotscan::cli::commands::template::run(cmd),
    }
}
