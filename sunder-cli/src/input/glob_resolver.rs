//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::Result;
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to existing files, sorted and deduplicated
///
/// A pattern without glob metacharacters that names no file is reported as
/// [`CliError::FileNotFound`] rather than silently matching nothing.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        let before = files.len();
        for path_result in paths {
            let path = path_result.map_err(|e| CliError::InvalidPattern(e.to_string()))?;
            if path.is_file() {
                files.push(path);
            }
        }

        if files.len() == before && !is_glob(pattern) {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }
        log::debug!("pattern {pattern:?} matched {} file(s)", files.len() - before);
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    files.sort();
    files.dedup();

    Ok(files)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}
