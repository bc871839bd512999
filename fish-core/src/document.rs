//! The result of one pagination run

use crate::mapping::LineMapping;

/// Paragraphs of one document plus their source line mapping.
///
/// Built once per load and never mutated afterwards; loading another
/// document produces a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginatedDocument {
    paragraphs: Vec<String>,
    mapping: LineMapping,
    total_lines: usize,
    diagnostic: bool,
}

impl PaginatedDocument {
    pub(crate) fn new(paragraphs: Vec<String>, mapping: LineMapping, total_lines: usize) -> Self {
        debug_assert_eq!(paragraphs.len(), mapping.len());
        Self {
            paragraphs,
            mapping,
            total_lines,
            diagnostic: false,
        }
    }

    /// A one-paragraph document carrying a message, with an empty mapping
    pub fn diagnostic(message: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![message.into()],
            mapping: LineMapping::empty(),
            total_lines: 0,
            diagnostic: true,
        }
    }

    /// Paragraphs in document order
    pub fn book_content(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn paragraph(&self, display_index: usize) -> Option<&str> {
        self.paragraphs.get(display_index).map(String::as_str)
    }

    pub fn mapping(&self) -> &LineMapping {
        &self.mapping
    }

    /// Source line of the paragraph at `display_index`
    pub fn actual_line_number(&self, display_index: usize) -> Option<usize> {
        self.mapping.actual_line_number(display_index)
    }

    /// First paragraph of `source_line`, falling back to the nearest
    /// preceding line with content
    pub fn display_line_index(&self, source_line: usize) -> Option<usize> {
        self.mapping.display_line_index(source_line)
    }

    /// Raw line count of the source, blank lines included
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Number of paragraphs
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Whether this document stands in for a failed load
    pub fn is_diagnostic(&self) -> bool {
        self.diagnostic
    }

    pub fn into_parts(self) -> (Vec<String>, LineMapping) {
        (self.paragraphs, self.mapping)
    }
}
