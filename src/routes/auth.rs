//! Auth routes: login and logout for the single shared account

use axum::response::{IntoResponse, Response};
use axum::http::StatusCode;
use axum::{Json, Router, extract::State, routing::post};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use ring::constant_time::verify_slices_are_equal;

use crate::auth::SESSION_COOKIE;
use crate::auth::jwt::SESSION_TTL_DAYS;
use crate::auth::models::{LoginRequest, LoginResponse};
use crate::server::AppState;

/// Constant-time equality over the configured credential bytes
fn credentials_match(provided: &str, expected: &str) -> bool {
    verify_slices_are_equal(provided.as_bytes(), expected.as_bytes()).is_ok()
}

/// `POST /api/login`: check the shared credentials and set the session cookie.
///
/// Wrong credentials get a 401 with an inline message and no cookie; the form
/// stays on the page and remains editable.
pub async fn login(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Response {
    let auth = &app_state.config.auth;

    // Evaluate both comparisons before branching
    let username_ok = credentials_match(&payload.username, &auth.username);
    let password_ok = credentials_match(&payload.password, &auth.password);

    if !(username_ok & password_ok) {
        tracing::warn!("[Auth] Failed login attempt for username {:?}", payload.username);
        return (
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse::failure("Invalid credentials")),
        )
            .into_response();
    }

    let token = match app_state.sessions.issue_token() {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("[Auth] Failed to issue session token: {:?}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(app_state.config.server.production);
    cookie.set_path("/");
    cookie.set_max_age(time::Duration::days(SESSION_TTL_DAYS));

    tracing::info!("[Auth] Login succeeded, session issued");
    (jar.add(cookie), Json(LoginResponse::success())).into_response()
}

/// `POST /api/logout`: drop the session cookie. Idempotent when no cookie is
/// present.
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let mut removal = Cookie::from(SESSION_COOKIE);
    removal.set_path("/");

    tracing::info!("[Auth] Logout, session cookie cleared");
    (jar.remove(removal), Json(LoginResponse::success()))
}

pub fn create_auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
}
