//! Error types for loading, configuration and progress storage

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures at the document-loading boundary.
///
/// None of these escape [`crate::ContentPipeline::load`]; they are turned
/// into a single diagnostic paragraph there.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not exist
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The file exceeds the configured size ceiling
    #[error("File too large to load: {} ({size} bytes, limit {limit} bytes)", .path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    /// The file is not valid UTF-8
    #[error("File is not valid UTF-8: {} (invalid byte at offset {offset})", .path.display())]
    Decode { path: PathBuf, offset: usize },

    /// The file cannot be read with the current permissions
    #[error("Permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// Any other I/O failure
    #[error("Error reading file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Classify an I/O error raised while touching `path`
    pub fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path },
            io::ErrorKind::PermissionDenied => LoadError::PermissionDenied { path },
            _ => LoadError::Io { path, source: err },
        }
    }
}

/// Invalid pagination settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_length must be at least 2, got {0}")]
    MaxLengthTooSmall(usize),

    #[error("max_file_size must be greater than 0")]
    ZeroFileSize,
}

/// Failures reading or writing the bookshelf
#[derive(Debug, Error)]
pub enum StoreError {
    /// The book file is missing on disk
    #[error("Book file does not exist: {}", .0.display())]
    BookMissing(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed bookshelf {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for loading operations
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Result type for bookshelf operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
