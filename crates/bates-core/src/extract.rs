//! Bates number extraction from the first and last page of a document.

use std::path::Path;

use tracing::debug;

use crate::bates::{BatesMatcher, BatesRange};
use crate::pdf::{PdfExtractor, PdfProcessor, Result};

/// Open the PDF at `path` and extract its Bates range.
///
/// The document is dropped before returning, on success and on error.
pub fn extract_bates_numbers(path: &Path, matcher: &BatesMatcher) -> Result<BatesRange> {
    let extractor = PdfExtractor::open(path)?;
    extract_from(&extractor, matcher)
}

/// Extract the Bates range from an already loaded document.
///
/// The first page yields its first match and the last page its last match.
/// A single-page document is searched twice, once for each side.
pub fn extract_from<P: PdfProcessor>(processor: &P, matcher: &BatesMatcher) -> Result<BatesRange> {
    let first = match processor.first_page() {
        Some(page) => matcher.first_in(&processor.extract_page_text(page)?),
        None => None,
    };

    let last = match processor.last_page() {
        Some(page) => matcher.last_in(&processor.extract_page_text(page)?),
        None => None,
    };

    debug!(
        "Bates range over {} pages: {:?} .. {:?}",
        processor.page_count(),
        first,
        last
    );

    Ok(BatesRange::new(first, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PdfError;
    use crate::fixtures::write_pdf;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn extract(pages: &[&[&str]]) -> BatesRange {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.pdf");
        write_pdf(&path, pages);
        extract_bates_numbers(&path, &BatesMatcher::default()).unwrap()
    }

    #[test]
    fn test_first_and_last_page() {
        let range = extract(&[&["DTB 0001"], &["nothing here"], &["DTB 0042"]]);
        assert_eq!(range, BatesRange::new(Some("DTB 0001".into()), Some("DTB 0042".into())));
    }

    #[test]
    fn test_occurrence_selection() {
        let page: &[&str] = &["DTB 0001", "filler", "DTB 0002"];
        let range = extract(&[page, &["middle"], page]);
        assert_eq!(range.first.as_deref(), Some("DTB 0001"));
        assert_eq!(range.last.as_deref(), Some("DTB 0002"));
    }

    #[test]
    fn test_single_page_searched_twice() {
        let range = extract(&[&["DTB 0007", "DTB 0008"]]);
        assert_eq!(range, BatesRange::new(Some("DTB 0007".into()), Some("DTB 0008".into())));
    }

    #[test]
    fn test_only_first_page_stamped() {
        let range = extract(&[&["DTB 0001"], &["unstamped"]]);
        assert_eq!(range, BatesRange::new(Some("DTB 0001".into()), None));
    }

    #[test]
    fn test_no_matches() {
        let range = extract(&[&["Exhibit A"], &["Exhibit B"]]);
        assert!(range.is_empty());
    }

    #[test]
    fn test_zero_pages() {
        let range = extract(&[]);
        assert!(range.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"%PDF-1.4 truncated").unwrap();

        let result = extract_bates_numbers(&path, &BatesMatcher::default());
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = extract_bates_numbers(&dir.path().join("gone.pdf"), &BatesMatcher::default());
        assert!(matches!(result, Err(PdfError::Io(_))));
    }
}
