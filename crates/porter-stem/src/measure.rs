//! The syllable measure *m*.
//!
//! Any word can be written `[C](VC){m}[V]` where `C` is a maximal run of
//! consonants and `V` a maximal run of vowels. *m* counts the `VC` pairs.

use crate::classify::is_consonant;

/// Count the vowel-run/consonant-run pairs in `word`.
///
/// A leading consonant run and a trailing vowel run do not count. The empty
/// word has measure 0.
pub fn measure(word: &[char]) -> usize {
    let len = word.len();
    let mut i = 0;

    while i < len && is_consonant(word, i) {
        i += 1;
    }
    if i == len {
        return 0;
    }

    let mut m = 0;
    loop {
        while !is_consonant(word, i) {
            i += 1;
            if i >= len {
                return m;
            }
        }
        while is_consonant(word, i) {
            i += 1;
            if i >= len {
                return m + 1;
            }
        }
        m += 1;
    }
}
