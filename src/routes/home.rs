//! Home page and upload handling
//!
//! `GET /` renders the upload form plus the user's history. `POST /` runs
//! the whole pipeline for one document: archive the file, extract its
//! text, summarize, synthesize speech, persist one history row, and render
//! the result. Any reportable failure re-renders the page with a message
//! and persists nothing.

use axum::{
    extract::{Multipart, State},
    response::Html,
    routing::get,
    Router,
};

use crate::auth::CurrentUser;
use crate::db::HistoryRepository;
use crate::error::{AppError, Result};
use crate::html;
use crate::state::AppState;

/// Create the home router
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home).post(upload))
}

async fn home(State(state): State<AppState>, user: CurrentUser) -> Result<Html<String>> {
    let history = HistoryRepository::new(state.db())
        .list_for_user(&user.id)
        .await?;

    Ok(Html(html::home_page(&user.username, None, None, &history)))
}

async fn upload(
    State(state): State<AppState>,
    user: CurrentUser,
    mut multipart: Multipart,
) -> Result<Html<String>> {
    // Pull the uploaded file out of the form
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;
            upload = Some((file_name, data.to_vec()));
            break;
        }
    }

    let Some((file_name, data)) = upload else {
        return render_with_error(&state, &user, "No file part").await;
    };
    if file_name.is_empty() {
        return render_with_error(&state, &user, "No selected file").await;
    }

    let text = match state.extractor().extract_text(&data).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(user_id = %user.id, file_name = %file_name, error = %e, "Text extraction failed");
            return render_with_error(&state, &user, "No text could be extracted from the PDF.")
                .await;
        }
    };
    if text.trim().is_empty() {
        return render_with_error(&state, &user, "No text could be extracted from the PDF.").await;
    }

    let summary = state.summarizer().summarize(&text);
    if summary.is_empty() {
        return render_with_error(&state, &user, "Nothing to summarize was found in the PDF.")
            .await;
    }

    let audio = match state.tts().synthesize(&summary.join(" ")).await {
        Ok(audio) => audio,
        Err(e) => {
            tracing::warn!(user_id = %user.id, file_name = %file_name, error = %e, "Speech synthesis failed");
            return render_with_error(
                &state,
                &user,
                "Speech synthesis failed. Please try again later.",
            )
            .await;
        }
    };

    let repo = HistoryRepository::new(state.db());
    let entry = repo
        .create(&user.id, &file_name, &summary.join("\n"), &audio)
        .await?;

    // The archive copy is auxiliary; losing it does not fail the upload
    if let Err(e) = state
        .upload_store()
        .save(&entry.id, &file_name, &data)
        .await
    {
        tracing::warn!(entry_id = %entry.id, error = %e, "Failed to archive uploaded PDF");
    }

    tracing::info!(
        entry_id = %entry.id,
        user_id = %user.id,
        file_name = %file_name,
        sentences = summary.len(),
        audio_bytes = audio.len(),
        "Upload summarized"
    );

    let history = repo.list_for_user(&user.id).await?;
    Ok(Html(html::home_page(
        &user.username,
        Some(&summary),
        None,
        &history,
    )))
}

/// Re-render the home page with a user-facing error
async fn render_with_error(
    state: &AppState,
    user: &CurrentUser,
    error: &str,
) -> Result<Html<String>> {
    let history = HistoryRepository::new(state.db())
        .list_for_user(&user.id)
        .await?;

    Ok(Html(html::home_page(
        &user.username,
        None,
        Some(error),
        &history,
    )))
}
