//! Error types for the Porter stemmer workspace.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Corpus error: {0}")]
    Corpus(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, Error>;
