//! Greedy packing of sentence units into display lines

use super::splitter::ForcedSplitter;

/// Packs units into lines of at most `max_line_length` characters
#[derive(Debug, Clone)]
pub struct LinePacker {
    splitter: ForcedSplitter,
    max_line_length: usize,
}

impl LinePacker {
    pub fn new(splitter: ForcedSplitter, max_line_length: usize) -> Self {
        Self {
            splitter,
            max_line_length,
        }
    }

    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// Pack units in order. Units longer than the limit are flushed through
    /// the forced splitter, one line per chunk; everything else is appended
    /// to the current line until the next unit would overflow it.
    pub fn pack(&self, units: &[&str]) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for &unit in units {
            let unit_len = unit.chars().count();

            if unit_len > self.max_line_length {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                lines.extend(
                    self.splitter
                        .split(unit, self.max_line_length)
                        .into_iter()
                        .map(str::to_owned),
                );
            } else if current_len + unit_len > self.max_line_length {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current.push_str(unit);
                current_len = unit_len;
            } else {
                current.push_str(unit);
                current_len += unit_len;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packer(max_line_length: usize) -> LinePacker {
        LinePacker::new(ForcedSplitter::default(), max_line_length)
    }

    #[test]
    fn test_units_share_a_line_when_they_fit() {
        let lines = packer(33).pack(&["天气很好。", "你好吗？"]);
        assert_eq!(lines, vec!["天气很好。你好吗？"]);
    }

    #[test]
    fn test_overflow_starts_new_line() {
        let a = "甲".repeat(20);
        let b = "乙".repeat(20);
        let lines = packer(33).pack(&[&a, &b]);
        assert_eq!(lines, vec![a, b]);
    }

    #[test]
    fn test_exact_fit_stays_on_line() {
        let a = "甲".repeat(20);
        let b = "乙".repeat(13);
        let lines = packer(33).pack(&[&a, &b]);
        assert_eq!(lines, vec![format!("{a}{b}")]);
    }

    #[test]
    fn test_oversized_unit_flushes_and_splits() {
        let short = "短句。";
        let long = "长".repeat(70);
        let tail = "尾。";
        let lines = packer(33).pack(&[short, &long, tail]);

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], short);
        assert_eq!(lines[1].chars().count(), 33);
        assert_eq!(lines[2].chars().count(), 33);
        assert_eq!(lines[3].chars().count(), 4);
        // Units after a forced split start a fresh line
        assert_eq!(lines[4], tail);
    }

    #[test]
    fn test_order_and_content_are_preserved() {
        let units = ["一。", "二二。", "三三三。", "四四四四。"];
        let lines = packer(6).pack(&units);

        assert!(lines.iter().all(|l| l.chars().count() <= 6));
        assert_eq!(lines.concat(), units.concat());
    }

    #[test]
    fn test_empty_input() {
        assert!(packer(33).pack(&[]).is_empty());
    }
}
