//! `plagscan` command-line front end.
//!
//! ```bash
//! # Check a text file
//! plagscan check --file essay.txt
//!
//! # Check inline text and print the result as JSON
//! plagscan check --text "Deep learning is part of machine learning" --json
//!
//! # Read from stdin with a custom config
//! cat essay.txt | plagscan --config plagscan.yaml check
//!
//! # List the reference passages
//! plagscan corpus
//! ```

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use plagscan::{AnalysisResult, Analyzer, LoggingConfig, PlagscanConfig, ReferenceCorpus, Segment};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Check a text for overlap with a built-in reference corpus.
#[derive(Parser)]
#[command(name = "plagscan", version, about)]
struct Cli {
    /// Path to a YAML configuration file. Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a text. Reads stdin unless --file or --text is given.
    Check {
        /// Plain-text (.txt) file to analyze.
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Text to analyze, passed inline.
        #[arg(long)]
        text: Option<String>,

        /// Print the analysis result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the reference passages with their source numbers.
    Corpus,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PlagscanConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => PlagscanConfig::default(),
    };
    init_tracing(&config.logging);

    match cli.command {
        Commands::Check { file, text, json } => {
            let input = read_input(file.as_deref(), text)?;
            let analyzer = Analyzer::with_config(config.analysis.clone())?;
            info!(bytes = input.len(), "analyzing input");
            let result = analyzer.analyze(&input);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_report(&result);
            }
        }
        Commands::Corpus => print_corpus(ReferenceCorpus::builtin()),
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_input(file: Option<&Path>, text: Option<String>) -> anyhow::Result<String> {
    let input = match (file, text) {
        (Some(path), _) => {
            let is_txt = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
            if !is_txt {
                bail!(
                    "Invalid file type: {} is not a .txt file; only plain text is supported",
                    path.display()
                );
            }
            std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?
        }
        (None, Some(text)) => text,
        (None, None) => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    if input.trim().is_empty() {
        bail!("Empty Text: please enter or upload some text to analyze");
    }
    Ok(input)
}

fn print_report(result: &AnalysisResult) {
    println!("Plagiarism score: {}%", result.plagiarism_score);
    if result.is_flagged() {
        println!("Verdict: likely plagiarized (above {}%)", AnalysisResult::FLAG_THRESHOLD);
    } else {
        println!("Verdict: likely original");
    }

    println!();
    let mut rendered = String::new();
    for segment in result.segments() {
        match segment {
            Segment::Plain(text) => rendered.push_str(&text),
            Segment::Highlighted(text) => {
                rendered.push_str("[[");
                rendered.push_str(&text);
                rendered.push_str("]]");
            }
        }
    }
    println!("{rendered}");

    println!();
    if result.matched_sources.is_empty() {
        println!("No matching sources.");
        return;
    }
    println!("Matched sources:");
    for source in &result.matched_sources {
        println!(
            "  Source #{} - {}% match",
            source.source_number(),
            source.percent()
        );
        println!("    {}", source.text);
    }
}

fn print_corpus(corpus: &ReferenceCorpus) {
    for (id, passage) in corpus.iter() {
        println!("Source #{}: {passage}", id + 1);
    }
}
