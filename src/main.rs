#![forbid(unsafe_code)]
//! # Question Analysis CLI
//!
//! Command-line interface for the `question_analysis` crate. Loads a CSV
//! corpus of questions, runs every aggregation, prints a summary to stdout,
//! and exports the result tables.
//!
//! ## Example
//! ```bash
//! cargo run --release -- questions.csv --top-k 15 --export-format json
//! ```
//!
//! See `--help` for all available options.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::error;
use question_analysis::{
    AnalysisOptions, ExportFormat, Vocabularies, analyze_csv, export_report, render_summary,
};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// CSV file with the question corpus
    path: PathBuf,

    /// Name of the CSV column holding the question text
    #[arg(long, default_value = "question")]
    question_field: String,

    /// Truncate ranked tables to the top K items (0 = no truncation)
    #[arg(long, default_value_t = 15)]
    top_k: usize,

    /// Number of bins for the word-count histogram
    #[arg(long, default_value_t = 25)]
    bins: usize,

    /// Output format for export (txt, csv, tsv, json)
    #[arg(long, default_value = "txt")]
    export_format: ExportFormat,

    /// Directory the export files are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let opts = AnalysisOptions {
        top_k: if cli.top_k == 0 {
            None
        } else {
            Some(cli.top_k)
        },
        bins: cli.bins,
    };

    let vocabs = Vocabularies::cricket()?;
    let report = analyze_csv(&cli.path, &cli.question_field, &vocabs, &opts)?;

    let summary = render_summary(&report, opts.top_k);
    println!("{summary}");

    let stem = cli
        .path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "questions".to_string());
    let written = export_report(&report, &summary, &stem, &cli.out_dir, cli.export_format)?;
    for path in written {
        log::info!("wrote {}", path.display());
    }
    Ok(())
}
