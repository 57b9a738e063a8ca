//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::path::PathBuf;

/// Marker argument for standard input
pub const STDIN_MARKER: &str = "-";

/// Where a piece of input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Display name used in output records
    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole input as UTF-8 text
    pub fn read_text(&self) -> Result<String> {
        match self {
            InputSource::Stdin => FileReader::read_stdin(),
            InputSource::File(path) => FileReader::read_text(path),
        }
    }
}

/// Turn command-line inputs into sources; `-` alone means standard input
pub fn resolve_inputs(patterns: &[String]) -> Result<Vec<InputSource>> {
    if patterns.iter().any(|p| p == STDIN_MARKER) {
        if patterns.len() > 1 {
            anyhow::bail!("'-' (stdin) cannot be combined with other inputs");
        }
        return Ok(vec![InputSource::Stdin]);
    }

    Ok(resolve_patterns(patterns)?
        .into_iter()
        .map(InputSource::File)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdin_marker() {
        let sources = resolve_inputs(&["-".to_string()]).unwrap();
        assert_eq!(sources, vec![InputSource::Stdin]);
        assert_eq!(sources[0].name(), "<stdin>");
    }

    #[test]
    fn test_stdin_cannot_mix_with_files() {
        assert!(resolve_inputs(&["-".to_string(), "a.txt".to_string()]).is_err());
    }
}
