//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let resolved = CliConfig::from_file(&self.config)
            .and_then(|config| config.resolve().map_err(anyhow::Error::from));

        match resolved {
            Ok(settings) => {
                println!("✓ Configuration is valid!");
                println!("  Delimiter: {}", settings.delimiter.describe());
                match settings.split.count() {
                    Some(count) => println!("  Count: {count}"),
                    None => println!("  Count: unbounded"),
                }
                println!("  Behavior: {}", settings.split.behavior());
                println!("  Options: {:?}", settings.split.options());
                println!("  Threads: {}", settings.threads);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn validate(content: &str) -> Result<()> {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{content}").unwrap();
        ValidateArgs {
            config: temp_file.path().to_path_buf(),
        }
        .execute()
    }

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
[split]
delimiter = ", "
mode = "sequence"
count = 3
behavior = "cut"
trim = true
"#;
        assert!(validate(toml_content).is_ok());
    }

    #[test]
    fn test_validate_negative_count() {
        let err = validate("[split]\ncount = -1\n").unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_validate_bad_single_delimiter() {
        assert!(validate("[split]\ndelimiter = \"ab\"\n").is_err());
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            config: PathBuf::from("/nonexistent/sunder.toml"),
        };
        assert!(args.execute().is_err());
    }
}
