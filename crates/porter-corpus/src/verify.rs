//! Line-by-line comparison of the stemmer against the reference output.

use serde::Serialize;
use tracing::{info, warn};

use crate::corpus::Corpus;

/// A corpus entry the stemmer disagrees with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// 1-based position in the corpus.
    pub line: usize,
    pub word: String,
    pub expected: String,
    pub actual: String,
}

/// Result of verifying a corpus.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerifyReport {
    pub total: usize,
    pub matched: usize,
    pub mismatches: Vec<Mismatch>,
}

impl VerifyReport {
    /// True when every entry matched.
    pub fn is_exact(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Stem every corpus word and compare with its expected stem.
pub fn verify(corpus: &Corpus) -> VerifyReport {
    let mut report = VerifyReport {
        total: corpus.len(),
        ..Default::default()
    };

    for (i, entry) in corpus.entries().iter().enumerate() {
        let actual = porter_stem::stem_str(&entry.word);
        if actual == entry.expected {
            report.matched += 1;
        } else {
            report.mismatches.push(Mismatch {
                line: i + 1,
                word: entry.word.clone(),
                expected: entry.expected.clone(),
                actual,
            });
        }
    }

    if report.is_exact() {
        info!("All {} corpus entries matched", report.total);
    } else {
        warn!(
            "{} of {} corpus entries did not match",
            report.mismatches.len(),
            report.total
        );
    }
    report
}

/// Print a human-readable summary, listing at most `max_listed` mismatches.
pub fn print_report(report: &VerifyReport, max_listed: usize) {
    println!("=== Porter Corpus Verification ===");
    println!();
    println!("Entries:            {}", report.total);
    println!("Matched:            {}", report.matched);
    println!("Mismatched:         {}", report.mismatches.len());

    if !report.mismatches.is_empty() {
        println!();
        println!("Mismatches:");
        for m in report.mismatches.iter().take(max_listed) {
            println!(
                "  - line {}: {} -> {} (expected {})",
                m.line, m.word, m.actual, m.expected
            );
        }
        let hidden = report.mismatches.len().saturating_sub(max_listed);
        if hidden > 0 {
            println!("  ... and {} more", hidden);
        }
    }

    println!();
    if report.is_exact() {
        println!("Status: EXACT MATCH");
    } else {
        println!("Status: MISMATCH");
    }
}
