//! Top-level argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::part::PartCommands;
use crate::cli::commands::scan::ScanArgs;
use crate::cli::commands::template::TemplateCommands;

#[derive(Parser, Debug)]
#[command(
    name = "lotscan",
    version,
    about = "Resolve scanned lot codes to part/revision records and render print-ready labels"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Args, Debug)]
pub struct GlobalOpts {
    /// Path to the part data file (defaults to the per-user data dir)
    #[arg(long, global = true, env = "LOTSCAN_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Output format for list-style results
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a scanned lot code and render its label
    Scan(ScanArgs),

    /// Maintain the part/revision lookup table
    #[command(subcommand)]
    Part(PartCommands),

    /// Inspect the label template catalog
    #[command(subcommand)]
    Template(TemplateCommands),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pick a sensible format for the command
    Auto,
    Table,
    Json,
    Csv,
}
