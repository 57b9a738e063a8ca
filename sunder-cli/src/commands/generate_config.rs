//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the delimiter and limits to suit your input");
        println!("2. Validate your configuration:");
        println!("   sunder validate --config {}", self.output.display());
        println!("3. Use it for splitting:");
        println!("   sunder split -i input.txt --config {}", self.output.display());

        Ok(())
    }
}

/// Default configuration rendered as commented TOML
pub fn generate_template() -> Result<String> {
    let body = CliConfig::default().to_toml()?;
    Ok(format!(
        "# sunder configuration\n\
         #\n\
         # [split] count is unbounded when absent; add e.g. `count = 3` to limit it.\n\
         # behavior: \"append\" keeps the rest of the input in the last segment,\n\
         # \"cut\" stops the last segment at the next delimiter.\n\
         # [performance] worker_threads = 0 uses every core.\n\n{body}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_round_trips() {
        let template = generate_template().unwrap();
        assert!(template.contains("[split]"));
        assert!(template.contains("[output]"));
        assert!(template.contains("[performance]"));
        assert_eq!(CliConfig::from_toml(&template).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("sunder.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.starts_with("# sunder configuration"));
    }

    #[test]
    fn test_execute_unwritable_path() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/sunder.toml"),
        };
        assert!(args.execute().is_err());
    }
}
