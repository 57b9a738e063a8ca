//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Delimiter that cannot be used with the selected mode
    InvalidDelimiter(String),
    /// Configuration error
    ConfigError(String),
    /// Argument rejected by the segmentation engine
    SplitError(sunder_core::SplitError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::InvalidDelimiter(msg) => write!(f, "Invalid delimiter: {msg}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SplitError(err) => write!(f, "Invalid split arguments: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::SplitError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<sunder_core::SplitError> for CliError {
    fn from(err: sunder_core::SplitError) -> Self {
        CliError::SplitError(err)
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
