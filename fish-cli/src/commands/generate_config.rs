//! Generate config command implementation

use anyhow::{bail, Context};
use clap::Args;
use fish_core::config::defaults;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::error::CliResult;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self, out: &mut dyn Write) -> CliResult<()> {
        if self.output.exists() && !self.force {
            bail!(
                "{} already exists; pass --force to overwrite it",
                self.output.display()
            );
        }

        if let Some(parent) = self.output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        writeln!(out, "Configuration template written to {}", self.output.display())?;
        writeln!(out)?;
        writeln!(out, "Use it with:")?;
        writeln!(out, "  fish --config {} show", self.output.display())?;

        Ok(())
    }
}

/// Template configuration content with every key at its default
fn generate_template() -> String {
    format!(
        r#"# fish reader configuration

[pagination]
# Character budget of one paragraph; each display line holds half of it
max_length = {max_length}

# Files larger than this many bytes are refused
max_file_size = {max_file_size}

[reader]
# Paragraphs printed by show/next/prev/goto (1-10)
lines_per_page = 1

# Record the reading position after every move
auto_save_progress = true
"#,
        max_length = defaults::MAX_LENGTH,
        max_file_size = defaults::MAX_FILE_SIZE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_template()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("nested").join("config.toml");

        let args = GenerateConfigArgs {
            output: output.clone(),
            force: false,
        };
        let mut out = Vec::new();
        args.execute(&mut out).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("[pagination]"));
        assert!(content.contains("max_length = 66"));
        assert!(String::from_utf8(out).unwrap().contains("written to"));
    }

    #[test]
    fn test_existing_file_needs_force() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("config.toml");
        fs::write(&output, "keep me").unwrap();

        let mut args = GenerateConfigArgs {
            output: output.clone(),
            force: false,
        };
        assert!(args.execute(&mut Vec::new()).is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");

        args.force = true;
        args.execute(&mut Vec::new()).unwrap();
        assert!(fs::read_to_string(&output).unwrap().contains("[reader]"));
    }
}
