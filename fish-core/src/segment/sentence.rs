//! Sentence unit extraction
//!
//! A unit runs from the end of the previous unit through a terminal mark
//! and at most one closing quote right after it. Every mark closes its own
//! unit. Units are borrowed slices of the input line, so nothing between
//! them is lost.

use crate::tables::PunctuationTables;

/// Splits one raw line into sentence units
#[derive(Debug, Clone, Default)]
pub struct SentenceExtractor {
    tables: PunctuationTables,
}

impl SentenceExtractor {
    pub fn new(tables: PunctuationTables) -> Self {
        Self { tables }
    }

    /// Extract sentence units in left-to-right order.
    ///
    /// A blank line yields no units. A line without any terminator yields
    /// itself as the only unit. A whitespace-only remainder after the last
    /// terminator is dropped.
    pub fn extract<'a>(&self, line: &'a str) -> Vec<&'a str> {
        if line.trim().is_empty() {
            return Vec::new();
        }

        let mut units = Vec::new();
        let mut start = 0;
        let mut chars = line.char_indices().peekable();

        while let Some((idx, ch)) = chars.next() {
            if !self.tables.is_terminator(ch) {
                continue;
            }

            let mut end = idx + ch.len_utf8();

            if let Some(&(next_idx, next)) = chars.peek() {
                if self.tables.is_closing_quote(next) {
                    end = next_idx + next.len_utf8();
                    chars.next();
                }
            }

            units.push(&line[start..end]);
            start = end;
        }

        let tail = &line[start..];
        if !tail.trim().is_empty() {
            units.push(tail);
        }

        units
    }
}
