//! Output formatting module for `fish paginate`

use anyhow::Result;
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Start a new document
    fn begin_document(&mut self, path: &Path, total_lines: usize) -> Result<()>;

    /// Format one paragraph; `source_line` is -1 when it has no source line
    fn format_paragraph(&mut self, index: usize, source_line: i64, text: &str) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
