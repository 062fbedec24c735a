//! Porter Core — shared error type, configuration, reference-corpus paths.

pub mod config;
pub mod error;

pub use config::{resolve_data_dir, CorpusPaths, PorterConfig};
pub use error::{Error, Result};
