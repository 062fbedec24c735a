//! Configuration and reference-corpus directory management.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Published location of the reference word list.
pub const DEFAULT_VOC_URL: &str = "http://tartarus.org/martin/PorterStemmer/voc.txt";
/// Published location of the expected stems, one per word in the word list.
pub const DEFAULT_OUTPUT_URL: &str = "http://tartarus.org/martin/PorterStemmer/output.txt";
/// Data directory used when neither a flag nor `PORTER_DATA_DIR` names one.
pub const DEFAULT_DATA_DIR: &str = "testdata";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Paths to the reference corpus files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusPaths {
    /// Root data directory (e.g., `testdata/`).
    pub root: PathBuf,
    /// Input word list (`testdata/voc.txt`).
    pub voc: PathBuf,
    /// Expected stems (`testdata/output.txt`).
    pub output: PathBuf,
}

impl CorpusPaths {
    /// Create corpus paths from a root directory. Creates the directory if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let paths = Self::resolve(root);
        std::fs::create_dir_all(&paths.root)?;
        Ok(paths)
    }

    /// Resolve corpus paths without touching the filesystem.
    pub fn resolve(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            voc: root.join("voc.txt"),
            output: root.join("output.txt"),
            root,
        }
    }

    /// Whether both corpus files are present.
    pub fn is_complete(&self) -> bool {
        self.voc.is_file() && self.output.is_file()
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize)]
pub struct PorterConfig {
    /// Reference corpus locations on disk.
    pub corpus_paths: CorpusPaths,
    /// Where `voc.txt` is downloaded from.
    pub voc_url: String,
    /// Where `output.txt` is downloaded from.
    pub output_url: String,
    /// Per-request timeout for corpus downloads, in seconds.
    pub http_timeout_secs: u64,
}

impl PorterConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let voc_url = std::env::var("PORTER_VOC_URL")
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_VOC_URL.to_string());

        let output_url = std::env::var("PORTER_OUTPUT_URL")
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OUTPUT_URL.to_string());

        let http_timeout_secs = std::env::var("PORTER_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .filter(|t| *t > 0)
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        let corpus_paths = CorpusPaths::new(data_dir)?;

        Ok(Self {
            corpus_paths,
            voc_url,
            output_url,
            http_timeout_secs,
        })
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

/// Resolve the data directory: explicit value, then `PORTER_DATA_DIR`, then `testdata`.
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    std::env::var("PORTER_DATA_DIR")
        .ok()
        .filter(|d| !d.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_paths_layout() {
        let paths = CorpusPaths::resolve("data");
        assert_eq!(paths.root, PathBuf::from("data"));
        assert_eq!(paths.voc, PathBuf::from("data/voc.txt"));
        assert_eq!(paths.output, PathBuf::from("data/output.txt"));
    }

    #[test]
    fn test_corpus_paths_creates_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("corpus");
        let paths = CorpusPaths::new(&root).unwrap();
        assert!(root.is_dir());
        assert!(!paths.is_complete());

        std::fs::write(&paths.voc, "a\n").unwrap();
        assert!(!paths.is_complete());
        std::fs::write(&paths.output, "a\n").unwrap();
        assert!(paths.is_complete());
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let dir = resolve_data_dir(Some(Path::new("/tmp/explicit")));
        assert_eq!(dir, PathBuf::from("/tmp/explicit"));
    }

    #[test]
    fn test_config_serializes() {
        let dir = tempfile::tempdir().unwrap();
        let config = PorterConfig {
            corpus_paths: CorpusPaths::resolve(dir.path()),
            voc_url: DEFAULT_VOC_URL.to_string(),
            output_url: DEFAULT_OUTPUT_URL.to_string(),
            http_timeout_secs: 5,
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["voc_url"], DEFAULT_VOC_URL);
        assert_eq!(json["http_timeout_secs"], 5);
        assert_eq!(config.http_timeout(), Duration::from_secs(5));
    }
}
