//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// JSON formatter - outputs one object per document in a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
}

/// One paginated document
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Source file
    pub path: PathBuf,
    /// Raw line count of the source
    pub total_lines: usize,
    /// Paragraphs in display order
    pub paragraphs: Vec<ParagraphData>,
}

/// One display paragraph
#[derive(Debug, Serialize, Deserialize)]
pub struct ParagraphData {
    /// Display index
    pub index: usize,
    /// 1-based source line, -1 for diagnostics
    pub source_line: i64,
    /// Paragraph text
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn begin_document(&mut self, path: &Path, total_lines: usize) -> Result<()> {
        self.documents.push(DocumentData {
            path: path.to_path_buf(),
            total_lines,
            paragraphs: Vec::new(),
        });
        Ok(())
    }

    fn format_paragraph(&mut self, index: usize, source_line: i64, text: &str) -> Result<()> {
        let document = self
            .documents
            .last_mut()
            .ok_or_else(|| anyhow::anyhow!("paragraph written before any document"))?;

        document.paragraphs.push(ParagraphData {
            index,
            source_line,
            text: text.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_are_collected() {
        let mut out = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut out);
            formatter.begin_document(Path::new("a.txt"), 4).unwrap();
            formatter.format_paragraph(0, 2, "A。").unwrap();
            formatter.format_paragraph(1, 4, "B。").unwrap();
            formatter.finish().unwrap();
        }

        let parsed: Vec<DocumentData> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].total_lines, 4);
        assert_eq!(parsed[0].paragraphs.len(), 2);
        assert_eq!(parsed[0].paragraphs[1].source_line, 4);
        assert_eq!(parsed[0].paragraphs[1].text, "B。");
    }

    #[test]
    fn test_paragraph_without_document_fails() {
        let mut formatter = JsonFormatter::new(Vec::new());
        assert!(formatter.format_paragraph(0, 1, "x").is_err());
    }
}
