//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// No book has been opened yet
    NoCurrentBook,
    /// No usable data directory
    DataDirUnavailable,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::NoCurrentBook => {
                write!(f, "No book is open. Use `fish open <FILE>` first")
            }
            CliError::DataDirUnavailable => write!(
                f,
                "Cannot determine a data directory; pass --data-dir or set FISH_DATA_DIR"
            ),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("book.txt".to_string());
        assert_eq!(error.to_string(), "File not found: book.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("lines_per_page must be between 1 and 10".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: lines_per_page must be between 1 and 10"
        );
    }

    #[test]
    fn test_no_current_book_mentions_open() {
        assert!(CliError::NoCurrentBook.to_string().contains("fish open"));
    }

    #[test]
    fn test_error_converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::DataDirUnavailable.into());
        let err = failure.unwrap_err();
        assert!(err.to_string().contains("--data-dir"));
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_error_with_unicode_path() {
        let error = CliError::FileNotFound("书架/小说 第一卷.txt".to_string());
        assert_eq!(error.to_string(), "File not found: 书架/小说 第一卷.txt");
    }
}
