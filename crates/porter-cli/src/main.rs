//! porter — stem English words and check the stemmer against the reference corpus.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stemmed output stays clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Stem(args) => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            commands::run_stem(&args, stdin.lock(), std::io::BufWriter::new(stdout.lock()))?;
        }
        Command::Verify(args) => {
            let exact = commands::run_verify(&args)?;
            std::process::exit(if exact { 0 } else { 1 });
        }
        Command::Fetch(args) => commands::run_fetch(&args).await?,
        Command::Config(args) => commands::run_config(&args)?,
    }

    Ok(())
}
