//! Speech synthesis
//!
//! Turns summary text into an MP3 byte stream. Backends implement
//! [`SpeechProvider`]; the default is the public Google Translate TTS
//! endpoint, reached over plain HTTP GETs. [`TtsService`] chunks long text
//! below the endpoint's input ceiling and concatenates the returned MP3
//! frames, which is valid for MP3 frame streams.

mod provider;
mod service;
mod types;

pub use provider::{GoogleTranslateProvider, SpeechProvider};
pub use service::TtsService;
pub use types::TtsError;
