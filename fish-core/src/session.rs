//! Reading position over a paginated document

use crate::document::PaginatedDocument;
use std::path::{Path, PathBuf};

/// Shown when a document has nothing to display
pub const NOTHING_TO_DISPLAY: &str = "No content to display";

/// Receives the reader's position whenever it changes
pub trait ProgressStore {
    /// Remember `display_index` as the position in `book`
    fn update_progress(&mut self, book: &Path, display_index: usize);
}

/// Tracks the current paragraph of one open book
#[derive(Debug, Clone)]
pub struct ReadingSession {
    book: PathBuf,
    document: PaginatedDocument,
    position: usize,
}

impl ReadingSession {
    /// Open `document` at a stored position, clamped into range
    pub fn new(book: impl Into<PathBuf>, document: PaginatedDocument, position: usize) -> Self {
        let position = position.min(document.len().saturating_sub(1));
        Self {
            book: book.into(),
            document,
            position,
        }
    }

    pub fn book(&self) -> &Path {
        &self.book
    }

    pub fn document(&self) -> &PaginatedDocument {
        &self.document
    }

    /// Current display index
    pub fn position(&self) -> usize {
        self.position
    }

    /// The paragraph at the current position
    pub fn current(&self) -> &str {
        self.document
            .paragraph(self.position)
            .unwrap_or(NOTHING_TO_DISPLAY)
    }

    /// Up to `count` paragraphs starting at the current position
    pub fn page(&self, count: usize) -> &[String] {
        let content = self.document.book_content();
        let start = self.position.min(content.len());
        let end = start.saturating_add(count.max(1)).min(content.len());
        &content[start..end]
    }

    /// Source line of the current paragraph
    pub fn current_source_line(&self) -> Option<usize> {
        self.document.actual_line_number(self.position)
    }

    /// Reading progress in percent of raw source lines
    pub fn percent(&self) -> f64 {
        match (self.current_source_line(), self.document.total_lines()) {
            (Some(line), total) if total > 0 => line as f64 * 100.0 / total as f64,
            _ => 0.0,
        }
    }

    /// Move to the next non-blank paragraph; false at the end
    pub fn next_paragraph(&mut self) -> bool {
        let content = self.document.book_content();
        let found = (self.position + 1..content.len()).find(|&i| !content[i].trim().is_empty());
        self.move_to(found)
    }

    /// Move to the previous non-blank paragraph; false at the start
    pub fn previous_paragraph(&mut self) -> bool {
        let content = self.document.book_content();
        let found = (0..self.position.min(content.len()))
            .rev()
            .find(|&i| !content[i].trim().is_empty());
        self.move_to(found)
    }

    /// Move forward up to `count` paragraphs, returning how many were taken
    pub fn advance(&mut self, count: usize) -> usize {
        (0..count).take_while(|_| self.next_paragraph()).count()
    }

    /// Move back up to `count` paragraphs, returning how many were taken
    pub fn retreat(&mut self, count: usize) -> usize {
        (0..count).take_while(|_| self.previous_paragraph()).count()
    }

    /// Jump to the first paragraph of `source_line`.
    ///
    /// Lines without content resolve to the nearest preceding line that has
    /// some; before any content the session goes to the first paragraph.
    /// Returns false only for an empty document.
    pub fn jump_to_line(&mut self, source_line: usize) -> bool {
        if self.document.is_empty() {
            return false;
        }

        let target = self.document.display_line_index(source_line).unwrap_or(0);
        self.position = target;
        true
    }

    /// Forward the current position to `store`
    pub fn record_progress<S: ProgressStore + ?Sized>(&self, store: &mut S) {
        store.update_progress(&self.book, self.position);
    }

    fn move_to(&mut self, target: Option<usize>) -> bool {
        match target {
            Some(index) => {
                self.position = index;
                true
            }
            None => false,
        }
    }
}
