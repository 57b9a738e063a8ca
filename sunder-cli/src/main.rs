//! Sunder command-line entry point

use anyhow::Result;
use clap::Parser;
use sunder_cli::commands::Commands;

/// Split text on delimiters
#[derive(Debug, Parser)]
#[command(name = "sunder", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
