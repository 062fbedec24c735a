//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "porter", version, about = "Porter stemmer for English words")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Stem words given as arguments, or read from stdin
    Stem(StemArgs),
    /// Check the stemmer against the reference corpus
    Verify(VerifyArgs),
    /// Download any missing reference corpus files
    Fetch(DataDirArg),
    /// Print the resolved configuration as JSON
    Config(DataDirArg),
}

#[derive(Debug, Args)]
pub struct StemArgs {
    /// Words to stem; whitespace-separated stdin tokens are used when empty
    pub words: Vec<String>,

    /// Skip lowercasing and stem the words as given
    #[arg(long)]
    pub preserve_case: bool,

    /// Print one JSON object per word
    #[arg(long, conflicts_with = "explain")]
    pub json: bool,

    /// Print the word after each step
    #[arg(long)]
    pub explain: bool,
}

#[derive(Debug, Args)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub data_dir: DataDirArg,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Maximum number of mismatches to list
    #[arg(long, default_value_t = 25)]
    pub max_listed: usize,
}

#[derive(Debug, Args)]
pub struct DataDirArg {
    /// Directory holding voc.txt and output.txt
    #[arg(long, env = "PORTER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}
