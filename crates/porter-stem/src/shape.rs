//! Word-ending shape tests built on the classifier.

use crate::classify::is_consonant;

/// Whether the word ends in a doubled consonant, as in `hopp` or `fizz`.
pub fn ends_with_double_consonant(word: &[char]) -> bool {
    let len = word.len();
    len >= 2 && word[len - 1] == word[len - 2] && is_consonant(word, len - 1)
}

/// Whether the last three characters are consonant-vowel-consonant.
///
/// Callers add their own check on the final character (`w`, `x`, `y`).
pub fn ends_with_cvc(word: &[char]) -> bool {
    let len = word.len();
    len >= 3
        && is_consonant(word, len - 3)
        && !is_consonant(word, len - 2)
        && is_consonant(word, len - 1)
}

/// The `*o` condition: CVC ending whose final consonant is not `w`, `x` or `y`.
pub(crate) fn ends_with_short_syllable(word: &[char]) -> bool {
    ends_with_cvc(word) && !matches!(word.last(), Some('w' | 'x' | 'y'))
}
