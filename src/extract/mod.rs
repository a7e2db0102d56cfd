//! Document text extraction
//!
//! The [`TextExtractor`] trait is the seam between upload handling and the
//! concrete PDF backend, and is what tests swap out for a stub.

mod pdf;

use async_trait::async_trait;
use thiserror::Error;

pub use pdf::PdfExtractor;

/// Text extraction error type.
/// No distinction is made between transient and permanent failures.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The backend could not parse the document
    #[error("Failed to extract text: {0}")]
    Parse(String),

    /// The blocking extraction task died
    #[error("Extraction task failed: {0}")]
    Task(String),
}

/// Extracts plain text from an uploaded document
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract the concatenated text of all pages
    async fn extract_text(&self, data: &[u8]) -> Result<String, ExtractError>;
}
