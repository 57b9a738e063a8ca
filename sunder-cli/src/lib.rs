//! Sunder CLI library
//!
//! Command-line front end for the `sunder-core` segmentation engine:
//! input resolution, configuration, delimiter parsing and output formats.

pub mod commands;
pub mod config;
pub mod delimiter;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
