//! Route modules for the Audiobrief server

pub mod auth;
pub mod history;
pub mod home;

use axum::{extract::State, response::Redirect, routing::get, Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check(State(_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(auth::router())
        .merge(home::router())
        .merge(history::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Redirect carrying a user-facing notice in the query string
pub(crate) fn redirect_with_message(path: &str, message: &str) -> Redirect {
    Redirect::to(&format!("{}?message={}", path, urlencoding::encode(message)))
}

/// Redirect carrying a user-facing error in the query string
pub(crate) fn redirect_with_error(path: &str, error: &str) -> Redirect {
    Redirect::to(&format!("{}?error={}", path, urlencoding::encode(error)))
}
