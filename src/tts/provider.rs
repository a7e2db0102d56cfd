//! Speech providers
//!
//! Defines the provider trait and the HTTP-backed implementation.

use async_trait::async_trait;

use super::types::TtsError;

/// Speech synthesis provider trait
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Provider name, for logging
    fn name(&self) -> &'static str;

    /// Synthesize one chunk of text into MP3 bytes
    async fn synthesize_chunk(&self, text: &str, language: &str) -> Result<Vec<u8>, TtsError>;
}

/// Google Translate TTS provider
///
/// The unofficial endpoint behind the translate widget: one GET per chunk,
/// MP3 bytes in the body. Inputs past roughly 200 characters get rejected,
/// which is why [`super::TtsService`] chunks before calling here.
pub struct GoogleTranslateProvider {
    endpoint: String,
    client: reqwest::Client,
}

impl GoogleTranslateProvider {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SpeechProvider for GoogleTranslateProvider {
    fn name(&self) -> &'static str {
        "google-translate"
    }

    async fn synthesize_chunk(&self, text: &str, language: &str) -> Result<Vec<u8>, TtsError> {
        let url = format!(
            "{}?ie=UTF-8&client=tw-ob&tl={}&q={}",
            self.endpoint,
            language,
            urlencoding::encode(text)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TtsError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TtsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TtsError::Request(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

/// Mock provider for testing
#[cfg(test)]
pub struct MockProvider {
    pub audio: Vec<u8>,
}

#[cfg(test)]
#[async_trait]
impl SpeechProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn synthesize_chunk(&self, _text: &str, _language: &str) -> Result<Vec<u8>, TtsError> {
        Ok(self.audio.clone())
    }
}
