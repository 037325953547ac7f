//! Command-line screen of files against Benford's Law.
//!
//! # Usage
//!
//! ```bash
//! # Analyse one file
//! benford payments.csv
//!
//! # Every file in a directory, skipping a header row, with charts
//! benford --header --plot-dir charts/ ledgers/
//!
//! # Semicolon-separated input, stricter threshold, JSON output
//! benford --delimiter ';' --alpha 0.01 --json export.txt
//! ```
//!
//! Exits with status 1 if any file could not be analysed.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use benford::output::{format_batch_summary, render_report};
use benford::{run_paths, BatchSummary, Config, FileOutcome, OutputFormat};
use tracing_subscriber::{fmt, EnvFilter};

/// Benford's Law first-digit screen
#[derive(Parser, Debug)]
#[command(name = "benford")]
#[command(about = "Test whether the leading digits of a column follow Benford's Law")]
#[command(version)]
struct Args {
    /// Files (.csv, .txt, .xls, .xlsx) or directories of files to analyse
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Skip the first row of every file
    #[arg(long)]
    header: bool,

    /// Field delimiter for .csv and .txt files
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Significance level below which a file is flagged
    #[arg(short, long, default_value = "0.05")]
    alpha: f64,

    /// Write a PNG chart per analysed file into this directory
    #[arg(long)]
    plot_dir: Option<PathBuf>,

    /// Print reports as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Show debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "benford=debug"
    } else if quiet {
        "benford=warn"
    } else {
        "benford=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_outcome(outcome: &FileOutcome, format: OutputFormat) {
    let Some(report) = outcome.report() else {
        return;
    };
    match render_report(report, format) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => eprintln!("{}: {}", outcome.path().display(), e),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let config = Config {
        significance_level: args.alpha,
        has_header: args.header,
        delimiter: args.delimiter,
        plot_dir: args.plot_dir,
        output_format: if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
    };

    let mut summary = BatchSummary::default();
    let format = config.output_format;
    if let Err(e) = run_paths(&args.paths, &config, |o| print_outcome(o, format), &mut summary) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    // Keep stdout a stream of JSON documents in JSON mode
    if summary.outcomes.len() > 1 || summary.failed() > 0 {
        match format {
            OutputFormat::Text => println!("{}", format_batch_summary(&summary)),
            OutputFormat::Json => eprintln!("{}", format_batch_summary(&summary)),
        }
    }

    if summary.failed() > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
