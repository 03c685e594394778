//! Scan command - extract Bates numbers and write the log.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use bates_core::{FileOutcome, PathSource, RunEvent};

use super::config::load_config;

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Root directory to scan recursively (default: configured root)
    #[arg(conflicts_with = "list")]
    root: Option<PathBuf>,

    /// Read PDF paths from a text file, one per line, instead of scanning
    #[arg(short, long)]
    list: Option<PathBuf>,

    /// Output CSV file (default: configured output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Bates number regular expression (default: configured pattern)
    #[arg(short, long)]
    pattern: Option<String>,
}

pub fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(root) = args.root {
        config.root = root;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    if let Some(pattern) = args.pattern {
        config.pattern = pattern;
    }

    let source = match args.list {
        Some(list) => PathSource::list_file(list),
        None => PathSource::directory(&config.root),
    };

    info!("Using pattern {:?}", config.pattern);

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let result = bates_core::run_with(&config, &source, |event| match event {
        RunEvent::Listed(count) => {
            pb.suspend(|| {
                println!("{} Found {} candidate files", style("ℹ").blue(), count)
            });
            pb.set_length(count as u64);
        }
        RunEvent::Processed { path, outcome } => {
            pb.suspend(|| report_outcome(path, outcome));
            pb.inc(1);
        }
    });
    pb.finish_and_clear();
    let summary = result?;

    println!();
    println!(
        "{} Results written to: {}",
        style("✓").green(),
        config.output.display()
    );
    println!(
        "   {} rows in {:?} ({} missing, {} unreadable, {} not PDF)",
        style(summary.rows.len()).green(),
        start.elapsed(),
        style(summary.skipped_missing).yellow(),
        style(summary.failed).red(),
        summary.skipped_not_pdf
    );

    Ok(())
}

fn report_outcome(path: &std::path::Path, outcome: &FileOutcome) {
    match outcome {
        FileOutcome::NotPdf => {}
        FileOutcome::Missing => {
            println!("{} File not found: {}", style("!").yellow(), path.display());
        }
        FileOutcome::Extracted(row) => {
            println!("Processing: {}", row.filename);
            println!(
                "  First: {}, Last: {}",
                display_bates(&row.beginning_bates),
                display_bates(&row.ending_bates)
            );
        }
        FileOutcome::Failed { row, reason } => {
            println!("Processing: {}", row.filename);
            println!("  {} {}", style("Error:").red(), reason);
        }
    }
}

fn display_bates(value: &str) -> &str {
    if value.is_empty() { "none" } else { value }
}
