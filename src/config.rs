//! Configuration management for the Audiobrief server
//!
//! The session secret, database URL, and upload directory are explicit
//! startup configuration, never hard-coded constants.

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub tts: TtsConfig,
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory the original uploaded PDFs are archived under
    pub upload_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Secret used to sign session tokens
    pub session_secret: String,
    /// Session lifetime in hours
    pub session_ttl_hours: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    /// Base URL of the speech synthesis endpoint
    pub endpoint: String,
    /// Language code passed to the synthesizer
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryConfig {
    /// Maximum number of sentences per summary
    pub max_sentences: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: "sqlite:./audiobrief.db".to_string(),
            },
            storage: StorageConfig {
                upload_dir: PathBuf::from("./uploads"),
            },
            auth: AuthConfig {
                session_secret: "dev-secret-change-me".to_string(),
                session_ttl_hours: 24,
            },
            tts: TtsConfig {
                endpoint: "https://translate.google.com/translate_tts".to_string(),
                language: "en".to_string(),
            },
            summary: SummaryConfig { max_sentences: 5 },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite:./audiobrief.db".to_string()),
            },
            storage: StorageConfig {
                upload_dir: env::var("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("./uploads")),
            },
            auth: AuthConfig {
                session_secret: env::var("SESSION_SECRET")?,
                session_ttl_hours: env::var("SESSION_TTL_HOURS")
                    .unwrap_or_else(|_| "24".to_string())
                    .parse()
                    .unwrap_or(24),
            },
            tts: TtsConfig {
                endpoint: env::var("TTS_ENDPOINT")
                    .unwrap_or_else(|_| "https://translate.google.com/translate_tts".to_string()),
                language: env::var("TTS_LANGUAGE").unwrap_or_else(|_| "en".to_string()),
            },
            summary: SummaryConfig {
                max_sentences: env::var("SUMMARY_MAX_SENTENCES")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .unwrap_or(5),
            },
        })
    }
}
