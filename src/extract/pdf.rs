//! PDF text extraction via `pdf-extract`

use async_trait::async_trait;

use super::{ExtractError, TextExtractor};

/// PDF implementation of [`TextExtractor`]
///
/// Parsing is CPU-bound, so it runs on the blocking pool. A panic inside
/// the parser surfaces as a join error, not a crashed worker.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

#[async_trait]
impl TextExtractor for PdfExtractor {
    async fn extract_text(&self, data: &[u8]) -> Result<String, ExtractError> {
        let data = data.to_vec();

        tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&data)
                .map_err(|e| ExtractError::Parse(format!("{:?}", e)))
        })
        .await
        .map_err(|e| ExtractError::Task(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn garbage_bytes_error_cleanly() {
        let result = PdfExtractor.extract_text(b"this is not a pdf").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn empty_input_errors_cleanly() {
        let result = PdfExtractor.extract_text(b"").await;
        assert!(result.is_err());
    }
}
