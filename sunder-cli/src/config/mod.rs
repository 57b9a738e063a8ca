//! Configuration module
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags. All split arguments are validated by the engine when
//! the settings are resolved, before any file is read.

use crate::delimiter::{DelimiterMode, DelimiterSpec};
use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use sunder_core::{ExceedBehavior, SplitConfig};

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Split configuration
    #[serde(default)]
    pub split: SplitSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Exceed behavior names accepted in files and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Behavior {
    /// Last segment keeps the rest of the input
    #[default]
    Append,
    /// Last segment stops at the next delimiter
    Cut,
}

impl From<Behavior> for ExceedBehavior {
    fn from(behavior: Behavior) -> Self {
        match behavior {
            Behavior::Append => ExceedBehavior::AppendRemaining,
            Behavior::Cut => ExceedBehavior::CutRemaining,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text with one segment per line (use json for multi-line segments)
    #[default]
    Text,
    /// JSON array of segments with offsets
    Json,
    /// Markdown numbered list
    Markdown,
}

/// Split-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SplitSection {
    /// Delimiter, with `\n`-style escapes
    pub delimiter: String,

    /// How the delimiter is interpreted
    pub mode: DelimiterMode,

    /// Maximum number of segments (absent = unbounded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,

    /// What the last segment holds when `count` is reached
    pub behavior: Behavior,

    /// Trim whitespace around every segment
    pub trim: bool,

    /// Drop empty segments
    pub remove_empty: bool,
}

impl Default for SplitSection {
    fn default() -> Self {
        Self {
            delimiter: r"\n".to_string(),
            mode: DelimiterMode::Single,
            count: None,
            behavior: Behavior::Append,
            trim: false,
            remove_empty: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

/// Fully validated settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Parsed delimiter
    pub delimiter: DelimiterSpec,
    /// Validated engine arguments
    pub split: SplitConfig,
    /// Output format
    pub format: OutputFormat,
    /// Pretty print JSON output
    pub pretty_json: bool,
    /// Worker threads to use (always at least 1)
    pub threads: usize,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str(content)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Validate every value and produce run settings
    pub fn resolve(&self) -> Result<Settings, CliError> {
        let delimiter = DelimiterSpec::parse(&self.split.delimiter, self.split.mode)?;

        let mut builder = SplitConfig::builder()
            .behavior(self.split.behavior.into())
            .trim_entries(self.split.trim)
            .remove_empty_entries(self.split.remove_empty);
        if let Some(count) = self.split.count {
            let count = isize::try_from(count).map_err(|_| {
                CliError::ConfigError(format!("count {count} is out of range"))
            })?;
            builder = builder.count(count);
        }
        let split = builder.build()?;

        let threads = match self.performance.worker_threads {
            0 => num_cpus::get(),
            n => n,
        };

        log::debug!(
            "resolved settings: delimiter={}, count={:?}, behavior={}, options={:?}, threads={}",
            delimiter.describe(),
            split.count(),
            split.behavior(),
            split.options(),
            threads
        );

        Ok(Settings {
            delimiter,
            split,
            format: self.output.format,
            pretty_json: self.output.pretty_json,
            threads,
        })
    }
}
