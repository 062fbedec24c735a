//! Porter Stem — the classical Porter suffix-stripping algorithm for English.
//!
//! The algorithm is deliberately reproduced as published, including the
//! departures (`bli`, `logi`) that the reference output relies on and the
//! known misclassifications of `y`. It does not tokenize: every input is
//! treated as a single word.
//!
//! ```
//! assert_eq!(porter_stem::stem_str("Motoring"), "motor");
//! assert_eq!(porter_stem::stem_str("generalizations"), "gener");
//! ```

pub mod classify;
pub mod measure;
pub mod shape;
pub mod stem;
pub mod steps;
pub mod suffix;

pub use classify::{contains_vowel, is_consonant};
pub use measure::measure;
pub use shape::{ends_with_cvc, ends_with_double_consonant};
pub use stem::{
    explain, explain_preserving_case, stem, stem_in_place, stem_preserving_case,
    stem_preserving_case_in_place, stem_str, StepTrace,
};
pub use steps::{Step, SuffixRule, PIPELINE};
pub use suffix::{has_suffix, has_suffix_str};
