//! PDF page text access.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Page number of the first page, if the document has any pages.
    fn first_page(&self) -> Option<u32>;

    /// Page number of the last page, if the document has any pages.
    fn last_page(&self) -> Option<u32>;

    /// Extract text from a specific page (1-indexed).
    fn extract_page_text(&self, page: u32) -> Result<String>;
}
