//! Per-line segmentation: sentences, display lines, paragraphs
//!
//! Everything in this module works on a single source line and knows
//! nothing about line numbers; the pipeline attaches those.

pub mod packer;
pub mod pairer;
pub mod sentence;
pub mod splitter;

pub use packer::LinePacker;
pub use sentence::SentenceExtractor;
pub use splitter::ForcedSplitter;

use crate::tables::PunctuationTables;

/// Runs extraction, packing and pairing for one line
#[derive(Debug, Clone)]
pub struct Segmenter {
    extractor: SentenceExtractor,
    packer: LinePacker,
}

impl Segmenter {
    pub fn new(tables: PunctuationTables, max_line_length: usize) -> Self {
        Self {
            extractor: SentenceExtractor::new(tables.clone()),
            packer: LinePacker::new(ForcedSplitter::new(tables), max_line_length),
        }
    }

    pub fn max_line_length(&self) -> usize {
        self.packer.max_line_length()
    }

    /// Display lines for one raw line, before pairing
    pub fn display_lines(&self, line: &str) -> Vec<String> {
        let units = self.extractor.extract(line);
        if units.is_empty() {
            return Vec::new();
        }
        self.packer.pack(&units)
    }

    /// Paragraphs for one raw line; empty for blank input
    pub fn paragraphs(&self, line: &str) -> Vec<String> {
        pairer::pair(&self.display_lines(line))
    }
}
