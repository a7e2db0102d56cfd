//! Registration, login, and logout routes
//!
//! Form posts with redirect-carried notices. Login issues the session
//! cookie; logout clears it.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use super::{redirect_with_error, redirect_with_message};
use crate::auth::{password, session};
use crate::db::UserRepository;
use crate::error::AppError;
use crate::html;
use crate::state::AppState;

/// Create the auth router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", get(register_page).post(register))
        .route("/login", get(login_page).post(login))
        .route("/logout", get(logout))
}

/// Notice/error carried across a redirect
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub message: Option<String>,
    pub error: Option<String>,
}

/// Username/password form, shared by register and login
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

async fn register_page(Query(query): Query<PageQuery>) -> Html<String> {
    Html(html::register_page(
        query.message.as_deref(),
        query.error.as_deref(),
    ))
}

async fn register(State(state): State<AppState>, Form(form): Form<CredentialsForm>) -> Response {
    let username = form.username.trim();
    if username.is_empty() || form.password.is_empty() {
        return redirect_with_error("/register", "Username and password required.")
            .into_response();
    }

    let password_hash = match password::hash(&form.password) {
        Ok(hash) => hash,
        Err(e) => return e.into_response(),
    };

    match UserRepository::new(state.db())
        .create(username, &password_hash)
        .await
    {
        Ok(user) => {
            tracing::info!(user_id = %user.id, username = %user.username, "User registered");
            redirect_with_message("/login", "Registration successful. Please log in.")
                .into_response()
        }
        Err(AppError::Conflict(_)) => {
            redirect_with_error("/register", "Username already exists.").into_response()
        }
        Err(e) => e.into_response(),
    }
}

async fn login_page(Query(query): Query<PageQuery>) -> Html<String> {
    Html(html::login_page(
        query.message.as_deref(),
        query.error.as_deref(),
    ))
}

async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CredentialsForm>,
) -> Response {
    let user = match UserRepository::new(state.db())
        .find_by_username(form.username.trim())
        .await
    {
        Ok(user) => user,
        Err(e) => return e.into_response(),
    };

    let Some(user) = user.filter(|u| password::verify(&form.password, &u.password)) else {
        return redirect_with_error("/login", "Invalid credentials.").into_response();
    };

    let token = match session::issue_token(&state.config().auth, &user.id, &user.username) {
        Ok(token) => token,
        Err(e) => return e.into_response(),
    };

    tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

    (
        jar.add(session::session_cookie(token)),
        Redirect::to("/"),
    )
        .into_response()
}

async fn logout(jar: CookieJar) -> Response {
    (
        jar.remove(session::clear_session_cookie()),
        redirect_with_message("/login", "You have logged out."),
    )
        .into_response()
}
