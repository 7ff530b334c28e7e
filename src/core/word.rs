//! Word consistency: does every original containing a word carry the expected
//! translation of it?

use super::pair::Pair;

/// Pairs whose original contains `original_word` but whose translation lacks
/// `translated_word`, in input order.
pub fn find_mismatches<'a>(
    pairs: &'a [Pair],
    original_word: &str,
    translated_word: &str,
) -> Vec<&'a Pair> {
    pairs
        .iter()
        .filter(|pair| {
            pair.original.contains(original_word) && !pair.translation.contains(translated_word)
        })
        .collect()
}
