//! Script-range tokenization for Ethiopic text.
//!
//! A token is a maximal contiguous run of characters from the Ethiopic
//! code-point ranges below. Everything else (Latin letters, ASCII digits,
//! punctuation, whitespace) separates tokens and is discarded. Note that
//! Ethiopic punctuation such as the wordspace (U+1361) lies inside the main
//! block and therefore does not split a run.

/// Ethiopic, Ethiopic Supplement, and Ethiopic Extended blocks.
const ETHIOPIC_RANGES: [(u32, u32); 3] = [
    (0x1200, 0x137F),
    (0x1380, 0x139F),
    (0x2D80, 0x2DDF),
];

/// Check whether a character belongs to the Ethiopic script ranges.
pub fn is_ethiopic(ch: char) -> bool {
    let code = ch as u32;
    ETHIOPIC_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code))
}

/// Split text into Tigrigna words.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if is_ethiopic(ch) {
            current.push(ch);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_no_ethiopic_characters() {
        assert!(tokenize("hello world 123 !?").is_empty());
    }

    #[test]
    fn test_separators_are_discarded() {
        let words = tokenize("ሰላም, hello ዓለም! 42ማይ");
        assert_eq!(words, vec!["ሰላም", "ዓለም", "ማይ"]);
    }

    #[test]
    fn test_ethiopic_wordspace_does_not_split() {
        // U+1361 is inside the main block, so the run stays intact.
        let words = tokenize("ሰላም፡ዓለም");
        assert_eq!(words, vec!["ሰላም፡ዓለም"]);
    }

    #[test]
    fn test_all_three_blocks() {
        assert!(is_ethiopic('ሀ')); // U+1200, main block
        assert!(is_ethiopic('ᎀ')); // U+1380, supplement
        assert!(is_ethiopic('ⶀ')); // U+2D80, extended
        assert!(!is_ethiopic('a'));
        assert!(!is_ethiopic('\u{13A0}')); // just past the supplement block
    }

    #[test]
    fn test_multiline_text() {
        let words = tokenize("ሰላም\nዓለም\tማይ");
        assert_eq!(words, vec!["ሰላም", "ዓለም", "ማይ"]);
    }
}
