//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};

use crate::config::OutputFormat;
use crate::delimiter::DelimiterMode;

pub mod generate_config;
pub mod split;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split input files on a delimiter
    Split(split::SplitArgs),

    /// Check that a configuration file loads and resolves
    Validate(validate::ValidateArgs),

    /// Write a configuration file with every default filled in
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List available delimiter modes
    Modes,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Lines printed for this listing
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Formats => listing("Available output formats:", OutputFormat::value_variants()),
            ListCommands::Modes => listing("Available delimiter modes:", DelimiterMode::value_variants()),
        }
    }
}

fn listing<T: ValueEnum>(title: &str, variants: &[T]) -> Vec<String> {
    let mut lines = vec![title.to_string()];
    for variant in variants {
        if let Some(value) = variant.to_possible_value() {
            let help = value.get_help().map(|h| h.to_string()).unwrap_or_default();
            lines.push(format!("  {:<10} - {}", value.get_name(), help));
        }
    }
    lines
}
