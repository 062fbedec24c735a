//! Proper-suffix matching.

/// Whether `suffix` is a proper suffix of `word`.
///
/// The word must be strictly longer than the suffix, so a word never matches
/// itself: `has_suffix("s", "s")` is false. This keeps every rule from
/// stripping a word down to nothing.
pub fn has_suffix(word: &[char], suffix: &[char]) -> bool {
    let Some(&last) = suffix.last() else {
        return !word.is_empty();
    };
    if word.len() <= suffix.len() || word[word.len() - 1] != last {
        return false;
    }
    word[word.len() - suffix.len()..] == *suffix
}

/// [`has_suffix`] for a literal suffix.
pub fn has_suffix_str(word: &[char], suffix: &str) -> bool {
    let suffix_len = suffix.chars().count();
    if word.len() <= suffix_len {
        return false;
    }
    word[word.len() - suffix_len..]
        .iter()
        .copied()
        .eq(suffix.chars())
}
