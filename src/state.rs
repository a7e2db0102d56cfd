//! Application state management

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::extract::TextExtractor;
use crate::storage::UploadStore;
use crate::summarize::Summarizer;
use crate::tts::TtsService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    db: SqlitePool,
    extractor: Arc<dyn TextExtractor>,
    tts: TtsService,
    summarizer: Summarizer,
    upload_store: UploadStore,
}

impl AppState {
    /// Create a new application state.
    /// The extractor and TTS service come in through their trait seams so
    /// tests can substitute stubs.
    pub fn new(
        config: Config,
        db: SqlitePool,
        extractor: Arc<dyn TextExtractor>,
        tts: TtsService,
        upload_store: UploadStore,
    ) -> Self {
        let summarizer = Summarizer::new(config.summary.max_sentences);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                db,
                extractor,
                tts,
                summarizer,
                upload_store,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the database pool
    pub fn db(&self) -> &SqlitePool {
        &self.inner.db
    }

    /// Get the text extractor
    pub fn extractor(&self) -> &dyn TextExtractor {
        self.inner.extractor.as_ref()
    }

    /// Get the speech synthesis service
    pub fn tts(&self) -> &TtsService {
        &self.inner.tts
    }

    /// Get the summarizer
    pub fn summarizer(&self) -> &Summarizer {
        &self.inner.summarizer
    }

    /// Get the upload archive
    pub fn upload_store(&self) -> &UploadStore {
        &self.inner.upload_store
    }
}
