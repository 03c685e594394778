//! Per-page PDF text extraction using lopdf.

use lopdf::Document;
use std::path::Path;
use tracing::{debug, trace};

use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// PDF page text extractor using lopdf.
///
/// The loaded document is owned by the extractor and released when the
/// extractor is dropped.
pub struct PdfExtractor {
    document: Option<Document>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self { document: None }
    }

    /// Read a PDF from disk and load it.
    pub fn open(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        let mut extractor = Self::new();
        extractor.load(&data)?;
        Ok(extractor)
    }

    fn document(&self) -> Result<&Document> {
        self.document
            .as_ref()
            .ok_or_else(|| PdfError::Parse("No document loaded".to_string()))
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");
        }

        debug!("Loaded PDF with {} pages", doc.get_pages().len());
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn first_page(&self) -> Option<u32> {
        let doc = self.document.as_ref()?;
        doc.get_pages().keys().next().copied()
    }

    fn last_page(&self) -> Option<u32> {
        let doc = self.document.as_ref()?;
        doc.get_pages().keys().next_back().copied()
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        let doc = self.document()?;

        if !doc.get_pages().contains_key(&page) {
            return Err(PdfError::InvalidPage(page));
        }

        let text = doc
            .extract_text(&[page])
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        trace!("Extracted {} chars from page {}", text.len(), page);
        Ok(text)
    }
}
