//! Bidirectional mapping between display paragraphs and source lines
//!
//! The mapping is built in one pass by [`LineMappingBuilder`] and then
//! frozen into a read-only [`LineMapping`]:
//! - forward: dense `display_index -> source_line`
//! - reverse: sparse ordered `source_line -> display indices`
//!
//! Source lines are 1-based, display indices are 0-based.

use std::collections::BTreeMap;
use std::ops::Range;

/// Integer stand-in for "no such line" at integer-typed boundaries
pub const NOT_FOUND: i64 = -1;

/// Incremental builder used while paginating a document
#[derive(Debug, Default)]
pub struct LineMappingBuilder {
    forward: Vec<usize>,
    reverse: BTreeMap<usize, Range<usize>>,
}

impl LineMappingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the next paragraph as coming from `source_line` and return
    /// its display index.
    ///
    /// # Panics
    ///
    /// In debug builds, if `source_line` is 0 or lower than a line pushed
    /// before it.
    pub fn push(&mut self, source_line: usize) -> usize {
        debug_assert!(source_line >= 1, "source lines are 1-based");
        debug_assert!(
            self.forward.last().map_or(true, |&last| last <= source_line),
            "source lines must be pushed in document order"
        );

        let display_index = self.forward.len();
        self.forward.push(source_line);
        self.reverse
            .entry(source_line)
            .and_modify(|range| range.end = display_index + 1)
            .or_insert(display_index..display_index + 1);

        display_index
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn build(self) -> LineMapping {
        LineMapping {
            forward: self.forward,
            reverse: self.reverse,
        }
    }
}

/// Read-only mapping between display indices and source lines
///
/// Display indices for one source line are contiguous, so the reverse side
/// stores a range per populated line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineMapping {
    forward: Vec<usize>,
    reverse: BTreeMap<usize, Range<usize>>,
}

impl LineMapping {
    /// A mapping with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of display paragraphs covered
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Source line of the paragraph at `display_index`
    pub fn actual_line_number(&self, display_index: usize) -> Option<usize> {
        self.forward.get(display_index).copied()
    }

    /// First display index for `source_line`, or for the nearest populated
    /// line before it when `source_line` produced no paragraphs itself
    pub fn display_line_index(&self, source_line: usize) -> Option<usize> {
        self.reverse
            .range(..=source_line)
            .next_back()
            .map(|(_, range)| range.start)
    }

    /// All display indices produced by exactly `source_line` (no fallback)
    pub fn display_indices(&self, source_line: usize) -> Range<usize> {
        self.reverse
            .get(&source_line)
            .cloned()
            .unwrap_or(0..0)
    }

    /// Populated source lines in ascending order
    pub fn source_lines(&self) -> impl Iterator<Item = usize> + '_ {
        self.reverse.keys().copied()
    }

    /// [`Self::actual_line_number`] over signed integers, `-1` when not found
    pub fn actual_line_number_or_sentinel(&self, display_index: i64) -> i64 {
        usize::try_from(display_index)
            .ok()
            .and_then(|index| self.actual_line_number(index))
            .map_or(NOT_FOUND, |line| line as i64)
    }

    /// [`Self::display_line_index`] over signed integers, `-1` when not found
    pub fn display_line_index_or_sentinel(&self, source_line: i64) -> i64 {
        usize::try_from(source_line)
            .ok()
            .and_then(|line| self.display_line_index(line))
            .map_or(NOT_FOUND, |index| index as i64)
    }
}
