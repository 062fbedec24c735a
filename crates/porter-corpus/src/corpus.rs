//! Loading the paired word and stem lists.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use porter_core::{CorpusPaths, Error, Result};

/// One input word and the stem the reference output gives for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusEntry {
    pub word: String,
    pub expected: String,
}

/// The reference corpus, in file order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    /// Load `voc.txt` and `output.txt` from the corpus directory.
    pub fn load(paths: &CorpusPaths) -> Result<Self> {
        let words = read_list(&paths.voc)?;
        let stems = read_list(&paths.output)?;
        let corpus = Self::from_lists(&words, &stems)?;
        info!(
            "Loaded {} corpus entries from {}",
            corpus.len(),
            paths.root.display()
        );
        Ok(corpus)
    }

    /// Pair two whitespace-separated lists entry by entry.
    pub fn from_lists(words: &str, stems: &str) -> Result<Self> {
        let words: Vec<&str> = words.split_whitespace().collect();
        let stems: Vec<&str> = stems.split_whitespace().collect();
        if words.len() != stems.len() {
            return Err(Error::Corpus(format!(
                "word list has {} entries but stem list has {}",
                words.len(),
                stems.len()
            )));
        }

        let entries = words
            .into_iter()
            .zip(stems)
            .map(|(word, expected)| CorpusEntry {
                word: word.to_string(),
                expected: expected.to_string(),
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn read_list(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::NotFound(format!(
            "{} (run `porter fetch` to download it)",
            path.display()
        )));
    }
    debug!("Reading {}", path.display());
    Ok(std::fs::read_to_string(path)?)
}
