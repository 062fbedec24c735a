//! Consonant/vowel classification over a word buffer.

/// Whether the character at `index` is a consonant.
///
/// `a`, `e`, `i`, `o`, `u` are vowels. `y` is a consonant at the start of the
/// word and otherwise the opposite of whatever precedes it, so in `toy` it is
/// a consonant and in `syzygy` it alternates. Everything else is a consonant.
///
/// A run of consecutive `y`s is resolved by walking back to the character
/// before the run instead of recursing once per `y`.
///
/// # Panics
///
/// Panics if `index` is out of bounds. Callers in this crate never pass an
/// index at or beyond the current length.
pub fn is_consonant(word: &[char], index: usize) -> bool {
    match word[index] {
        'a' | 'e' | 'i' | 'o' | 'u' => false,
        'y' => {
            let run_start = word[..index]
                .iter()
                .rposition(|&c| c != 'y')
                .map_or(0, |p| p + 1);
            // Classification of the first `y` in the run.
            let first = if run_start == 0 {
                true
            } else {
                !is_consonant(word, run_start - 1)
            };
            // Each further `y` flips the previous answer.
            if (index - run_start) % 2 == 0 {
                first
            } else {
                !first
            }
        }
        _ => true,
    }
}

/// Whether any character in `word` classifies as a vowel.
pub fn contains_vowel(word: &[char]) -> bool {
    (0..word.len()).any(|i| !is_consonant(word, i))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn classify(s: &str) -> Vec<bool> {
        let word = chars(s);
        (0..word.len()).map(|i| is_consonant(&word, i)).collect()
    }

    #[test]
    fn test_apple() {
        assert_eq!(classify("apple"), vec![false, true, true, true, false]);
    }

    #[test]
    fn test_y_follows_neighbour() {
        // Leading y is a consonant.
        assert_eq!(classify("yes"), vec![true, false, true]);
        // y after a consonant is a vowel.
        assert_eq!(classify("cy"), vec![true, false]);
        // y after a vowel is a consonant.
        assert_eq!(classify("toy"), vec![true, false, true]);
    }

    #[test]
    fn test_y_runs_alternate() {
        // s y z y g y: y after s is a vowel, y after z a vowel, y after g a vowel.
        assert_eq!(classify("syzygy"), vec![true, false, true, false, true, false]);
        // s a y y i d: first y follows a vowel, second y follows a consonant y.
        assert_eq!(classify("sayyid"), vec![true, false, true, false, false, true]);
        assert_eq!(classify("yyy"), vec![true, false, true]);
    }

    #[test]
    fn test_long_y_run_does_not_overflow() {
        let word: Vec<char> = std::iter::repeat('y').take(100_000).collect();
        assert!(is_consonant(&word, 0));
        assert!(!is_consonant(&word, 99_999));
        assert!(is_consonant(&word, 99_998));
    }

    #[test]
    fn test_contains_vowel() {
        let cases = [
            ("apple", true),
            ("f", false),
            ("a", true),
            ("e", true),
            ("i", true),
            ("o", true),
            ("u", true),
            ("y", false),
            ("cy", true),
            ("", false),
            ("rhythm", true),
            ("tsk", false),
        ];
        for (word, expected) in cases {
            assert_eq!(contains_vowel(&chars(word)), expected, "{word}");
        }
    }

    #[test]
    fn test_non_alphabetic_is_consonant() {
        assert_eq!(classify("a1-"), vec![false, true, true]);
    }
}
