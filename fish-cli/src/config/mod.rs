//! Configuration module
//!
//! The configuration lives in `config.toml` inside the data directory
//! unless `--config` points elsewhere. A missing file means defaults, and
//! every key is optional.

use crate::error::CliError;
use anyhow::{Context, Result};
use fish_core::PaginationConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// File name of the configuration inside the data directory
pub const CONFIG_FILE: &str = "config.toml";

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Pagination settings handed to the core pipeline
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Reader behavior
    #[serde(default)]
    pub reader: ReaderConfig,
}

/// Reader-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Paragraphs printed per command
    pub lines_per_page: usize,

    /// Persist reading progress after every move
    pub auto_save_progress: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            lines_per_page: 1,
            auto_save_progress: true,
        }
    }
}

impl CliConfig {
    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read config: {}", path.display()))
            }
        };

        let config: Self = toml::from_str(&content)
            .map_err(|err| CliError::ConfigError(format!("{}: {err}", path.display())))?;
        config.validate()?;

        log::debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), CliError> {
        self.pagination
            .validate()
            .map_err(|err| CliError::ConfigError(err.to_string()))?;

        if !(1..=10).contains(&self.reader.lines_per_page) {
            return Err(CliError::ConfigError(format!(
                "lines_per_page must be between 1 and 10, got {}",
                self.reader.lines_per_page
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = CliConfig::load(&dir.path().join(CONFIG_FILE)).unwrap();

        assert_eq!(config, CliConfig::default());
        assert_eq!(config.pagination.max_length, 66);
        assert_eq!(config.reader.lines_per_page, 1);
        assert!(config.reader.auto_save_progress);
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[pagination]\nmax_length = 40\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.pagination.max_length, 40);
        assert_eq!(config.pagination.max_file_size, 100 * 1024 * 1024);
        assert_eq!(config.reader, ReaderConfig::default());
    }

    #[test]
    fn test_full_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"
[pagination]
max_length = 50
max_file_size = 2048

[reader]
lines_per_page = 3
auto_save_progress = false
"#,
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.pagination.max_line_length(), 25);
        assert_eq!(config.pagination.max_file_size, 2048);
        assert_eq!(config.reader.lines_per_page, 3);
        assert!(!config.reader.auto_save_progress);
    }

    #[test]
    fn test_out_of_range_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        fs::write(&path, "[reader]\nlines_per_page = 0\n").unwrap();
        let err = CliConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("lines_per_page"));

        fs::write(&path, "[pagination]\nmax_length = 1\n").unwrap();
        let err = CliConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("max_length"));
    }

    #[test]
    fn test_malformed_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[pagination\nmax_length = ").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_serializes_back_to_toml() {
        let toml = toml::to_string(&CliConfig::default()).unwrap();
        assert!(toml.contains("max_length = 66"));
        assert!(toml.contains("lines_per_page = 1"));
    }
}
