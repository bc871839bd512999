//! Grouping of display lines into paragraphs

/// Separator between the two lines of a paragraph
pub const LINE_SEPARATOR: &str = "\n";

/// Join consecutive lines two at a time; an odd last line stands alone.
pub fn pair(lines: &[String]) -> Vec<String> {
    lines
        .chunks(2)
        .map(|pair| pair.join(LINE_SEPARATOR))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_even_number_of_lines() {
        let paragraphs = pair(&owned(&["a", "b", "c", "d"]));
        assert_eq!(paragraphs, vec!["a\nb", "c\nd"]);
    }

    #[test]
    fn test_odd_line_stands_alone() {
        let paragraphs = pair(&owned(&["a", "b", "c"]));
        assert_eq!(paragraphs, vec!["a\nb", "c"]);
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(pair(&owned(&["only"])), vec!["only"]);
        assert!(pair(&[]).is_empty());
    }
}
