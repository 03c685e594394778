//! Error types for the bates-core library.

use thiserror::Error;

/// Main error type for the bates library.
#[derive(Error, Debug)]
pub enum BatesError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to write the CSV log.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The Bates pattern is not a valid regular expression.
    #[error("invalid Bates pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The scan root could not be turned into a glob pattern.
    #[error("invalid scan pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to read the file from disk.
    #[error("failed to read PDF: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted with a non-empty password.
    #[error("PDF is encrypted")]
    Encrypted,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Result type for the bates library.
pub type Result<T> = std::result::Result<T, BatesError>;
