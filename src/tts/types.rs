//! Speech synthesis types

use thiserror::Error;

/// Speech synthesis error type
#[derive(Debug, Error)]
pub enum TtsError {
    /// Nothing to synthesize
    #[error("No text to synthesize")]
    EmptyText,

    /// The HTTP request itself failed
    #[error("TTS request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success status
    #[error("TTS endpoint returned {status}: {message}")]
    Api { status: u16, message: String },
}
