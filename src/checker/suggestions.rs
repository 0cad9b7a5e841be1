use crate::checker::dictionary::Dictionary;
use crate::checker::distance::distance;

/// Generate correction candidates for a misspelled word, closest first.
///
/// Every dictionary word within `max_distance` edits is a candidate. Ties
/// are broken by lexical order of the candidate so repeated calls against
/// the same dictionary state produce identical output. An empty query or a
/// word already in the dictionary yields no suggestions.
///
/// This is an exhaustive scan over the dictionary, which is fine for word
/// lists in the low tens of thousands. A BK-tree behind the same signature
/// would avoid the full scan if the dictionary outgrows that.
pub fn suggest(
    word: &str,
    dictionary: &Dictionary,
    max_distance: usize,
    max_suggestions: usize,
) -> Vec<String> {
    if word.is_empty() || dictionary.contains(word) {
        return Vec::new();
    }

    let mut candidates: Vec<(usize, &str)> = dictionary
        .all_words()
        .filter_map(|candidate| {
            let dist = distance(word, candidate);
            (dist <= max_distance).then_some((dist, candidate))
        })
        .collect();

    candidates.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    candidates.truncate(max_suggestions);

    candidates
        .into_iter()
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
