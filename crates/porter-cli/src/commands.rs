//! Subcommand implementations.

use std::io::{BufRead, Write};

use anyhow::Context;
use serde::Serialize;
use tracing::info;

use porter_core::{resolve_data_dir, CorpusPaths, PorterConfig};
use porter_corpus::{ensure_corpus, print_report, verify, Corpus};

use crate::cli::{DataDirArg, StemArgs, VerifyArgs};

#[derive(Serialize)]
struct StemLine<'a> {
    word: &'a str,
    stem: String,
}

fn stem_word(word: &str, preserve_case: bool) -> String {
    if preserve_case {
        let chars: Vec<char> = word.chars().collect();
        porter_stem::stem_preserving_case(&chars).into_iter().collect()
    } else {
        porter_stem::stem_str(word)
    }
}

fn write_word(out: &mut impl Write, word: &str, args: &StemArgs) -> anyhow::Result<()> {
    if args.explain {
        writeln!(out, "{}", word)?;
        let traces = if args.preserve_case {
            porter_stem::explain_preserving_case(word)
        } else {
            porter_stem::explain(word)
        };
        for trace in traces {
            let marker = if trace.changed { "*" } else { " " };
            writeln!(out, "  {:>2} {} {}", trace.step, marker, trace.result)?;
        }
        writeln!(out, "  => {}", stem_word(word, args.preserve_case))?;
    } else if args.json {
        let line = StemLine {
            word,
            stem: stem_word(word, args.preserve_case),
        };
        writeln!(out, "{}", serde_json::to_string(&line)?)?;
    } else {
        writeln!(out, "{}", stem_word(word, args.preserve_case))?;
    }
    Ok(())
}

/// Stem the argument words, or every whitespace-separated token of `input`.
pub fn run_stem(args: &StemArgs, input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
    if args.words.is_empty() {
        for line in input.lines() {
            let line = line.context("Failed to read stdin")?;
            for word in line.split_whitespace() {
                write_word(&mut out, word, args)?;
            }
        }
    } else {
        for word in &args.words {
            write_word(&mut out, word, args)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Verify the corpus. Returns whether every entry matched.
///
/// Reads the data directory as it is; nothing is created.
pub fn run_verify(args: &VerifyArgs) -> anyhow::Result<bool> {
    let paths = CorpusPaths::resolve(resolve_data_dir(args.data_dir.data_dir.as_deref()));
    let corpus = Corpus::load(&paths)?;
    let report = verify(&corpus);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.max_listed);
    }
    Ok(report.is_exact())
}

pub async fn run_fetch(args: &DataDirArg) -> anyhow::Result<()> {
    let config = load_config(args)?;
    let summary = ensure_corpus(&config).await?;
    info!(
        "Corpus ready in {} ({} downloaded, {} already present)",
        config.corpus_paths.root.display(),
        summary.downloaded.len(),
        summary.skipped.len()
    );
    Ok(())
}

pub fn run_config(args: &DataDirArg) -> anyhow::Result<()> {
    let config = load_config(args)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn load_config(args: &DataDirArg) -> anyhow::Result<PorterConfig> {
    let data_dir = resolve_data_dir(args.data_dir.as_deref());
    PorterConfig::from_env(&data_dir)
        .with_context(|| format!("Failed to prepare data directory {}", data_dir.display()))
}
