//! History audio routes
//!
//! Serves the stored MP3 for a history entry, owner only. A missing id and
//! an id owned by someone else are indistinguishable: both are 404.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    routing::get,
    Router,
};

use crate::auth::CurrentUser;
use crate::db::HistoryRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Create the history router
pub fn router() -> Router<AppState> {
    Router::new().route("/history/:id/audio", get(serve_audio))
}

async fn serve_audio(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Response> {
    let audio = HistoryRepository::new(state.db())
        .get_audio(&id, &user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Audio not found".to_string()))?;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "audio/mpeg")
        .header(header::CONTENT_LENGTH, audio.len())
        .header(
            header::CONTENT_DISPOSITION,
            "inline; filename=\"summary.mp3\"",
        )
        .body(Body::from(audio))
        .map_err(|e| AppError::Internal(e.to_string()))?)
}
