//! Pagination configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod defaults {
    /// Characters per paragraph; each display line gets half
    pub const MAX_LENGTH: usize = 66;

    /// Largest file that will be paginated, in bytes (100 MiB)
    pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;
}

/// Settings consumed by [`crate::ContentPipeline`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Paragraph length budget in characters
    pub max_length: usize,
    /// File size ceiling in bytes
    pub max_file_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_length: defaults::MAX_LENGTH,
            max_file_size: defaults::MAX_FILE_SIZE,
        }
    }
}

impl PaginationConfig {
    /// Create a configuration builder
    pub fn builder() -> PaginationConfigBuilder {
        PaginationConfigBuilder::default()
    }

    /// Length limit of a single display line
    pub fn max_line_length(&self) -> usize {
        self.max_length / 2
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_line_length() == 0 {
            return Err(ConfigError::MaxLengthTooSmall(self.max_length));
        }

        if self.max_file_size == 0 {
            return Err(ConfigError::ZeroFileSize);
        }

        Ok(())
    }
}

/// Fluent builder for [`PaginationConfig`]
#[derive(Debug, Default)]
pub struct PaginationConfigBuilder {
    max_length: Option<usize>,
    max_file_size: Option<u64>,
}

impl PaginationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the paragraph length budget in characters
    pub fn max_length(mut self, chars: usize) -> Self {
        self.max_length = Some(chars);
        self
    }

    /// Set the file size ceiling in bytes
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = Some(bytes);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<PaginationConfig, ConfigError> {
        let mut config = PaginationConfig::default();

        if let Some(chars) = self.max_length {
            config.max_length = chars;
        }

        if let Some(bytes) = self.max_file_size {
            config.max_file_size = bytes;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PaginationConfig::default();
        assert_eq!(config.max_length, 66);
        assert_eq!(config.max_line_length(), 33);
        assert_eq!(config.max_file_size, 100 * 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = PaginationConfig::builder()
            .max_length(41)
            .max_file_size(1024)
            .build()
            .unwrap();

        assert_eq!(config.max_line_length(), 20);
        assert_eq!(config.max_file_size, 1024);
    }

    #[test]
    fn test_builder_rejects_invalid_values() {
        assert_eq!(
            PaginationConfig::builder().max_length(1).build(),
            Err(ConfigError::MaxLengthTooSmall(1))
        );
        assert_eq!(
            PaginationConfig::builder().max_file_size(0).build(),
            Err(ConfigError::ZeroFileSize)
        );
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: PaginationConfig = serde_json::from_str(r#"{"max_length": 40}"#).unwrap();
        assert_eq!(config.max_length, 40);
        assert_eq!(config.max_file_size, defaults::MAX_FILE_SIZE);
    }
}
