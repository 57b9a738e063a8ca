//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read all of a reader as UTF-8 text
    pub fn read_from(mut reader: impl Read) -> Result<String> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Failed to read input stream")?;
        Ok(content)
    }

    /// Read standard input as UTF-8 text
    pub fn read_stdin() -> Result<String> {
        Self::read_from(io::stdin().lock())
    }
}
