//! Speech synthesis service
//!
//! Chunks text below the provider's input ceiling and concatenates the
//! per-chunk MP3 bodies into one stream.

use std::sync::Arc;

use super::provider::SpeechProvider;
use super::types::TtsError;
use crate::config::TtsConfig;

/// Character ceiling per provider request
const MAX_CHUNK_CHARS: usize = 200;

/// Speech synthesis service
#[derive(Clone)]
pub struct TtsService {
    provider: Arc<dyn SpeechProvider>,
    config: TtsConfig,
}

impl TtsService {
    pub fn new(provider: Arc<dyn SpeechProvider>, config: TtsConfig) -> Self {
        Self { provider, config }
    }

    /// Synthesize `text` into a single MP3 byte stream
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, TtsError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TtsError::EmptyText);
        }

        let chunks = split_chunks(text, MAX_CHUNK_CHARS);
        let mut audio = Vec::new();
        for chunk in &chunks {
            let bytes = self
                .provider
                .synthesize_chunk(chunk, &self.config.language)
                .await?;
            audio.extend_from_slice(&bytes);
        }

        tracing::debug!(
            provider = self.provider.name(),
            chunks = chunks.len(),
            audio_bytes = audio.len(),
            "Synthesized speech"
        );

        Ok(audio)
    }
}

/// Pack whitespace-separated words into chunks of at most `max_chars`
/// characters. A single word longer than the ceiling becomes its own chunk
/// rather than being split mid-word.
fn split_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if current_chars > 0 && current_chars + 1 + word_chars > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        if current_chars > 0 {
            current.push(' ');
            current_chars += 1;
        }
        current.push_str(word);
        current_chars += word_chars;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
