//! Forced splitting of units that cannot fit on a single display line

use crate::tables::PunctuationTables;

/// Cuts oversized text into chunks of at most `max_len` characters.
///
/// The cut for each chunk is searched backward within the last third of
/// the window: a soft break mark wins (the cut goes after it), whitespace
/// is the fallback (the cut goes before it), and a hard cut at the window
/// end is used when neither appears. Chunks always concatenate back to the
/// input.
#[derive(Debug, Clone, Default)]
pub struct ForcedSplitter {
    tables: PunctuationTables,
}

impl ForcedSplitter {
    pub fn new(tables: PunctuationTables) -> Self {
        Self { tables }
    }

    /// Split `text` into length-bounded chunks.
    ///
    /// `max_len` is counted in characters. A zero limit is treated as 1.
    pub fn split<'a>(&self, text: &'a str, max_len: usize) -> Vec<&'a str> {
        let max_len = max_len.max(1);
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let total = chars.len();

        if total <= max_len {
            return vec![text];
        }

        let byte_at = |pos: usize| chars.get(pos).map_or(text.len(), |&(offset, _)| offset);

        let mut chunks = Vec::with_capacity(total.div_ceil(max_len));
        let mut start = 0;

        while start < total {
            let end = (start + max_len).min(total);

            if end == total {
                chunks.push(&text[byte_at(start)..]);
                break;
            }

            let cut = self.find_cut(&chars, start, end, max_len);
            debug_assert!(cut > start && cut <= end);

            chunks.push(&text[byte_at(start)..byte_at(cut)]);
            start = cut;
        }

        chunks
    }

    /// Choose the cut position (in characters) for the window `[start, end)`
    fn find_cut(&self, chars: &[(usize, char)], start: usize, end: usize, max_len: usize) -> usize {
        let floor = start + max_len * 2 / 3;
        let mut whitespace_cut = None;

        for pos in (floor..end).rev() {
            let ch = chars[pos].1;

            if self.tables.is_soft_break(ch) {
                return pos + 1;
            }

            // Cutting before whitespace at `start` would make no progress
            if whitespace_cut.is_none() && pos > start && ch.is_whitespace() {
                whitespace_cut = Some(pos);
            }
        }

        whitespace_cut.unwrap_or(end)
    }
}
