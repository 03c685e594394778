//! Core library for building Bates logs from searchable PDFs.
//!
//! This crate provides:
//! - Path sources (recursive directory scan or a list file)
//! - Per-page PDF text access
//! - Bates number matching on the first and last page
//! - CSV log output

pub mod bates;
pub mod config;
pub mod error;
pub mod extract;
pub mod logger;
pub mod pdf;
pub mod report;
pub mod source;

#[cfg(test)]
mod fixtures;

pub use bates::{BatesMatcher, BatesRange, DEFAULT_BATES_PATTERN};
pub use config::BatesConfig;
pub use error::{BatesError, PdfError, Result};
pub use extract::extract_bates_numbers;
pub use logger::{BatesLogger, FileOutcome, LogRow, RunSummary};
pub use report::{write_log, write_log_to, LOG_HEADER};
pub use source::{DirectoryScan, ListFile, PathSource, PdfSource};

use std::path::Path;

/// Progress notifications emitted by [`run_with`].
#[derive(Debug)]
pub enum RunEvent<'a> {
    /// Candidate paths have been listed.
    Listed(usize),
    /// One candidate has been processed.
    Processed { path: &'a Path, outcome: &'a FileOutcome },
}

/// List paths from `source`, extract every document, and write the log to
/// `config.output`.
pub fn run(config: &BatesConfig, source: &PathSource) -> Result<RunSummary> {
    run_with(config, source, |_| {})
}

/// Like [`run`], reporting each step to `on_event` as it happens.
pub fn run_with<F>(config: &BatesConfig, source: &PathSource, mut on_event: F) -> Result<RunSummary>
where
    F: FnMut(RunEvent<'_>),
{
    let logger = BatesLogger::new(config.matcher()?);
    let paths = source.pdf_paths()?;
    on_event(RunEvent::Listed(paths.len()));

    let mut summary = RunSummary::default();
    for path in &paths {
        let outcome = logger.process_file(path);
        on_event(RunEvent::Processed { path, outcome: &outcome });
        summary.record(outcome);
    }

    write_log(&config.output, &summary.rows)?;
    Ok(summary)
}
