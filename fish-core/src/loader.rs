//! Document loading boundary: size ceiling, UTF-8 decoding, I/O failures

use crate::error::{LoadError, LoadResult};
use std::fs;
use std::path::Path;

const BOM: char = '\u{feff}';

/// Reads source documents under a size ceiling
#[derive(Debug, Clone, Copy)]
pub struct DocumentLoader {
    max_file_size: u64,
}

impl DocumentLoader {
    pub fn new(max_file_size: u64) -> Self {
        Self { max_file_size }
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Read `path` as UTF-8 text.
    ///
    /// The size is checked before any content is read. A leading byte order
    /// mark is dropped.
    pub fn read(&self, path: &Path) -> LoadResult<String> {
        let size = fs::metadata(path)
            .map_err(|err| LoadError::from_io(path, err))?
            .len();
        log::debug!("Book file size: {size} bytes");

        if size > self.max_file_size {
            return Err(LoadError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit: self.max_file_size,
            });
        }

        let bytes = fs::read(path).map_err(|err| LoadError::from_io(path, err))?;
        let mut text = String::from_utf8(bytes).map_err(|err| LoadError::Decode {
            path: path.to_path_buf(),
            offset: err.utf8_error().valid_up_to(),
        })?;

        if text.starts_with(BOM) {
            text.drain(..BOM.len_utf8());
        }

        Ok(text)
    }
}

/// Source lines of `text`.
///
/// `\n`, `\r\n` and a lone `\r` each end a line. A final line break does
/// not open another line.
pub fn source_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        match rest.find(['\n', '\r']) {
            Some(pos) => {
                let line = &rest[..pos];
                let break_len = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + break_len..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Number of source lines, counted the same way as [`source_lines`]
pub fn count_lines(text: &str) -> usize {
    source_lines(text).count()
}

/// Raw line count of a file, or 0 when it cannot be read as UTF-8
pub fn count_file_lines(path: &Path) -> usize {
    match fs::read_to_string(path) {
        Ok(text) => count_lines(&text),
        Err(err) => {
            log::error!("Error counting lines in {}: {err}", path.display());
            0
        }
    }
}
