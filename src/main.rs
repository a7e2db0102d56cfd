//! Audiobrief Server
//!
//! A self-hosted web service that summarizes uploaded PDFs and reads the
//! summary back as synthesized speech, keeping a per-user history of both.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use audiobrief_server::config::Config;
use audiobrief_server::db;
use audiobrief_server::extract::PdfExtractor;
use audiobrief_server::routes;
use audiobrief_server::state::AppState;
use audiobrief_server::storage::UploadStore;
use audiobrief_server::tts::{GoogleTranslateProvider, TtsService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "audiobrief_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    let config = Config::from_env().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config from env: {}, using defaults", e);
        Config::default()
    });

    tracing::info!("Starting Audiobrief Server v{}", env!("CARGO_PKG_VERSION"));

    // Prepare the upload archive
    let upload_store = UploadStore::new(&config.storage.upload_dir);
    upload_store
        .ensure_root()
        .await
        .with_context(|| format!("Failed to create upload dir {:?}", config.storage.upload_dir))?;
    tracing::info!("Upload archive at {:?}", config.storage.upload_dir);

    // Initialize database
    let db_pool = db::create_pool(&config.database.url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database initialized at {}", config.database.url);

    // Wire up the pipeline: PDF extraction and speech synthesis
    let provider = Arc::new(GoogleTranslateProvider::new(&config.tts.endpoint));
    let tts = TtsService::new(provider, config.tts.clone());
    let state = AppState::new(
        config.clone(),
        db_pool,
        Arc::new(PdfExtractor),
        tts,
        upload_store,
    );

    // Build router
    let app = routes::app(state);

    // Start server with graceful shutdown
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Audiobrief Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind listener")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
