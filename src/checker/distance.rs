//! Levenshtein edit distance over whole characters.

/// Calculate the minimum number of single-character insertions, deletions,
/// or substitutions needed to transform one word into the other.
///
/// Operates on `char`s, so each Ethiopic syllable counts as one unit
/// regardless of its UTF-8 width. Only two table rows are kept, and the
/// shorter operand drives the row width; neither changes the result.
pub fn distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Order operands so the shorter one sets the row width.
    let (longer, shorter) = if a_chars.len() >= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    if shorter.is_empty() {
        return longer.len();
    }

    let mut previous: Vec<usize> = (0..=shorter.len()).collect();
    let mut current: Vec<usize> = vec![0; shorter.len() + 1];

    for (i, &lc) in longer.iter().enumerate() {
        current[0] = i + 1;

        for (j, &sc) in shorter.iter().enumerate() {
            let insertion = previous[j + 1] + 1;
            let deletion = current[j] + 1;
            let substitution = previous[j] + usize::from(lc != sc);
            current[j + 1] = insertion.min(deletion).min(substitution);
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous[shorter.len()]
}
