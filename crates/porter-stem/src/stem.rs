//! Stemming entry points.
//!
//! Two buffer contracts are offered:
//! - `*_in_place` functions take the caller's `Vec<char>`, rewrite it and
//!   truncate it to the stem. `stem_in_place` also lowercases it.
//! - The copying functions borrow the input and return a fresh buffer; the
//!   caller's characters are never touched.

use serde::Serialize;

use crate::steps::{Step, PIPELINE};

/// Words this short are returned unchanged.
const MIN_STEMMABLE_LEN: usize = 3;

/// Lowercase a character without changing the buffer length.
///
/// Characters whose lowercase form is several characters long keep only the
/// first one.
fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Lowercase `word` and reduce it to its stem, in place.
pub fn stem_in_place(word: &mut Vec<char>) {
    if word.is_empty() {
        return;
    }
    for c in word.iter_mut() {
        *c = fold_case(*c);
    }
    stem_preserving_case_in_place(word);
}

/// Reduce `word` to its stem in place, assuming it is already in the desired case.
pub fn stem_preserving_case_in_place(word: &mut Vec<char>) {
    if word.len() < MIN_STEMMABLE_LEN {
        return;
    }
    for (_, step) in PIPELINE {
        step(word);
    }
}

/// Lowercase and stem a copy of `word`.
pub fn stem(word: &[char]) -> Vec<char> {
    let mut buf = word.to_vec();
    stem_in_place(&mut buf);
    buf
}

/// Stem a copy of `word` without changing its case.
pub fn stem_preserving_case(word: &[char]) -> Vec<char> {
    let mut buf = word.to_vec();
    stem_preserving_case_in_place(&mut buf);
    buf
}

/// Lowercase and stem a string.
pub fn stem_str(word: &str) -> String {
    let mut buf: Vec<char> = word.chars().collect();
    stem_in_place(&mut buf);
    buf.into_iter().collect()
}

/// The word as it stood after one step of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepTrace {
    pub step: Step,
    pub result: String,
    pub changed: bool,
}

/// Lowercase and stem `word`, recording the buffer after every step.
///
/// Words too short to stem produce an empty trace; the last entry otherwise
/// holds the same stem [`stem_str`] returns.
pub fn explain(word: &str) -> Vec<StepTrace> {
    trace_pipeline(word.chars().map(fold_case).collect())
}

/// [`explain`] without lowercasing; the last entry matches
/// [`stem_preserving_case`].
pub fn explain_preserving_case(word: &str) -> Vec<StepTrace> {
    trace_pipeline(word.chars().collect())
}

fn trace_pipeline(mut buf: Vec<char>) -> Vec<StepTrace> {
    if buf.len() < MIN_STEMMABLE_LEN {
        return Vec::new();
    }

    PIPELINE
        .iter()
        .map(|(step, apply)| {
            let before = buf.clone();
            apply(&mut buf);
            StepTrace {
                step: *step,
                result: buf.iter().collect(),
                changed: buf != before,
            }
        })
        .collect()
}
