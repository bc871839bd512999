//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Plain text formatter: a `[index] L<line>` header above each paragraph
pub struct TextFormatter<W: Write> {
    writer: W,
    show_headers: bool,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter; `show_headers` prints the file name
    /// before each document
    pub fn new(writer: W, show_headers: bool) -> Self {
        Self {
            writer,
            show_headers,
            documents: 0,
        }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn begin_document(&mut self, path: &Path, _total_lines: usize) -> Result<()> {
        if self.show_headers {
            if self.documents > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "==> {} <==", path.display())?;
        }
        self.documents += 1;
        Ok(())
    }

    fn format_paragraph(&mut self, index: usize, source_line: i64, text: &str) -> Result<()> {
        writeln!(self.writer, "[{index}] L{source_line}")?;
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
