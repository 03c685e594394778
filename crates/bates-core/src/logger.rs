//! Per-file extraction driver that turns candidate paths into log rows.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::bates::{BatesMatcher, BatesRange};
use crate::extract::extract_bates_numbers;

/// One row of the Bates log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRow {
    pub beginning_bates: String,
    pub ending_bates: String,
    /// Base name of the file, without directories.
    pub filename: String,
}

impl LogRow {
    pub fn new(range: BatesRange, filename: impl Into<String>) -> Self {
        Self {
            beginning_bates: range.first.unwrap_or_default(),
            ending_bates: range.last.unwrap_or_default(),
            filename: filename.into(),
        }
    }
}

/// What happened to a single candidate path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Extension is not `.pdf`; nothing is logged.
    NotPdf,
    /// File does not exist on disk.
    Missing,
    /// Extraction succeeded.
    Extracted(LogRow),
    /// The document could not be read; the row carries empty Bates fields.
    Failed { row: LogRow, reason: String },
}

impl FileOutcome {
    /// The row to log, if this outcome produces one.
    pub fn row(&self) -> Option<&LogRow> {
        match self {
            FileOutcome::Extracted(row) | FileOutcome::Failed { row, .. } => Some(row),
            FileOutcome::NotPdf | FileOutcome::Missing => None,
        }
    }
}

/// Rows produced by a batch plus skip and failure counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: Vec<LogRow>,
    pub skipped_not_pdf: usize,
    pub skipped_missing: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Fold one outcome into the summary.
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::NotPdf => self.skipped_not_pdf += 1,
            FileOutcome::Missing => self.skipped_missing += 1,
            FileOutcome::Extracted(row) => self.rows.push(row),
            FileOutcome::Failed { row, .. } => {
                self.failed += 1;
                self.rows.push(row);
            }
        }
    }
}

/// Drives Bates extraction over a list of candidate paths.
#[derive(Debug, Clone, Default)]
pub struct BatesLogger {
    matcher: BatesMatcher,
}

impl BatesLogger {
    pub fn new(matcher: BatesMatcher) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &BatesMatcher {
        &self.matcher
    }

    /// Process one candidate path.
    pub fn process_file(&self, path: &Path) -> FileOutcome {
        if !has_pdf_extension(path) {
            debug!("Skipping non-PDF {}", path.display());
            return FileOutcome::NotPdf;
        }

        if !path.exists() {
            warn!("File not found: {}", path.display());
            return FileOutcome::Missing;
        }

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        match extract_bates_numbers(path, &self.matcher) {
            Ok(range) => FileOutcome::Extracted(LogRow::new(range, filename)),
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                FileOutcome::Failed {
                    row: LogRow::new(BatesRange::default(), filename),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Process every candidate in order.
    pub fn process_file_list<P: AsRef<Path>>(&self, paths: &[P]) -> RunSummary {
        let mut summary = RunSummary::default();
        for path in paths {
            summary.record(self.process_file(path.as_ref()));
        }
        summary
    }
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::write_pdf;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_has_pdf_extension() {
        assert!(has_pdf_extension(Path::new("a.pdf")));
        assert!(has_pdf_extension(Path::new("dir/A.PDF")));
        assert!(!has_pdf_extension(Path::new("a.pdf.txt")));
        assert!(!has_pdf_extension(Path::new("pdf")));
    }

    #[test]
    fn test_missing_path_skipped_and_batch_continues() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.pdf");
        write_pdf(&good, &[&["DTB 0001"], &["DTB 0009"]]);

        let paths = vec![
            dir.path().join("missing.pdf"),
            dir.path().join("notes.txt"),
            good,
        ];
        let summary = BatesLogger::default().process_file_list(&paths);

        assert_eq!(summary.skipped_missing, 1);
        assert_eq!(summary.skipped_not_pdf, 1);
        assert_eq!(summary.failed, 0);
        assert_eq!(
            summary.rows,
            vec![LogRow {
                beginning_bates: "DTB 0001".into(),
                ending_bates: "DTB 0009".into(),
                filename: "good.pdf".into(),
            }]
        );
    }

    #[test]
    fn test_uppercase_extension_processed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("SCAN.PDF");
        write_pdf(&path, &[&["DTB 0003"]]);

        let outcome = BatesLogger::default().process_file(&path);
        assert_eq!(
            outcome.row().map(|r| r.filename.as_str()),
            Some("SCAN.PDF")
        );
    }

    #[test]
    fn test_corrupt_pdf_still_emits_row() {
        let dir = TempDir::new().unwrap();
        let broken = dir.path().join("broken.pdf");
        std::fs::write(&broken, b"not a pdf at all").unwrap();
        let after = dir.path().join("after.pdf");
        write_pdf(&after, &[&["DTB 0200"]]);

        let summary = BatesLogger::default().process_file_list(&[broken, after]);

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0], LogRow::new(BatesRange::default(), "broken.pdf"));
        assert_eq!(summary.rows[1].beginning_bates, "DTB 0200");
        assert_eq!(summary.rows[1].ending_bates, "DTB 0200");
    }

    #[test]
    fn test_failed_outcome_keeps_reason() {
        let dir = TempDir::new().unwrap();
        let broken = dir.path().join("broken.pdf");
        std::fs::write(&broken, b"garbage").unwrap();

        match BatesLogger::default().process_file(&broken) {
            FileOutcome::Failed { reason, .. } => assert!(reason.contains("parse")),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_matcher() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("x.pdf");
        write_pdf(&path, &[&["ABC-000010 and DTB 0001"]]);

        let logger = BatesLogger::new(BatesMatcher::new(r"ABC-\d{6}").unwrap());
        let summary = logger.process_file_list(&[PathBuf::from(&path)]);
        assert_eq!(summary.rows[0].beginning_bates, "ABC-000010");
    }
}
