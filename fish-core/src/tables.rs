//! Punctuation class lookup with O(1) membership checks
//!
//! Segmentation touches every character of the document, so each class is
//! a fixed ASCII table plus a small set for the (usually CJK) remainder.

use std::collections::HashSet;

/// Sentence terminators recognized by the extractor.
pub const TERMINATORS: &[char] = &['。', '？', '！'];

/// Closing quotation marks that may directly follow a terminator.
pub const CLOSING_QUOTES: &[char] = &['"', '”'];

/// Preferred cut points for forced splits; the cut goes after the mark.
pub const SOFT_BREAKS: &[char] = &['，', '；', '：', '、'];

/// Fast membership table for one character class
#[derive(Debug, Clone)]
pub struct CharTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// Everything outside ASCII
    non_ascii: HashSet<char>,
}

impl CharTable {
    /// Create from a list of member characters
    pub fn new(chars: &[char]) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for &ch in chars {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }
}

/// The three character classes used during segmentation
#[derive(Debug, Clone)]
pub struct PunctuationTables {
    terminators: CharTable,
    closing_quotes: CharTable,
    soft_breaks: CharTable,
}

impl PunctuationTables {
    pub fn new(terminators: &[char], closing_quotes: &[char], soft_breaks: &[char]) -> Self {
        Self {
            terminators: CharTable::new(terminators),
            closing_quotes: CharTable::new(closing_quotes),
            soft_breaks: CharTable::new(soft_breaks),
        }
    }

    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        self.terminators.contains(ch)
    }

    #[inline]
    pub fn is_closing_quote(&self, ch: char) -> bool {
        self.closing_quotes.contains(ch)
    }

    #[inline]
    pub fn is_soft_break(&self, ch: char) -> bool {
        self.soft_breaks.contains(ch)
    }
}

impl Default for PunctuationTables {
    fn default() -> Self {
        Self::new(TERMINATORS, CLOSING_QUOTES, SOFT_BREAKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminator_lookup() {
        let tables = PunctuationTables::default();

        assert!(tables.is_terminator('。'));
        assert!(tables.is_terminator('？'));
        assert!(tables.is_terminator('！'));

        // ASCII punctuation is not a terminator here
        assert!(!tables.is_terminator('.'));
        assert!(!tables.is_terminator('?'));
        assert!(!tables.is_terminator('，'));
    }

    #[test]
    fn test_closing_quotes_cover_ascii_and_cjk() {
        let tables = PunctuationTables::default();

        assert!(tables.is_closing_quote('"'));
        assert!(tables.is_closing_quote('”'));
        assert!(!tables.is_closing_quote('“'));
        assert!(!tables.is_closing_quote('」'));
    }

    #[test]
    fn test_soft_breaks() {
        let tables = PunctuationTables::default();

        for ch in ['，', '；', '：', '、'] {
            assert!(tables.is_soft_break(ch), "{ch} should be a soft break");
        }
        assert!(!tables.is_soft_break('。'));
        assert!(!tables.is_soft_break(' '));
    }

    #[test]
    fn test_custom_table() {
        let table = CharTable::new(&['.', '!', '。']);
        assert!(table.contains('.'));
        assert!(table.contains('!'));
        assert!(table.contains('。'));
        assert!(!table.contains('?'));
    }
}
