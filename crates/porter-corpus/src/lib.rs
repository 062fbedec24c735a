//! Porter Corpus — the published word list and expected stems, used as an
//! acceptance check for the stemmer.

pub mod corpus;
pub mod fetch;
pub mod verify;

pub use corpus::{Corpus, CorpusEntry};
pub use fetch::{ensure_corpus, FetchSummary};
pub use verify::{print_report, verify, Mismatch, VerifyReport};
