//! Session Gate Middleware
//!
//! Axum middleware guarding every route except the login flow and static
//! assets. Requests without a verifiable session cookie are redirected to the
//! login page.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::{SESSION_COOKIE, jwt::SessionService};

/// Session gate guarding browser-facing routes
pub struct SessionGate;

impl SessionGate {
    /// Middleware function enforcing the session requirement.
    ///
    /// The gate verifies signature and expiry itself, so a forged or expired
    /// cookie behaves exactly like a missing one.
    pub async fn require_session(
        State(sessions): State<Arc<SessionService>>,
        req: Request,
        next: Next,
    ) -> Response {
        let request_id = Uuid::new_v4();
        let path = req.uri().path().to_string();
        tracing::info!("[SessionGate] {} {} {}", request_id, req.method(), path);

        if Self::is_public_path(&path) {
            return next.run(req).await;
        }

        let token = extract_session_cookie(&req);

        match token {
            Some(token) if sessions.verify(&token) => next.run(req).await,
            Some(_) => {
                tracing::warn!("[SessionGate] {} invalid session cookie, redirecting", request_id);
                Redirect::to("/login").into_response()
            }
            None => {
                tracing::info!("[SessionGate] {} no session cookie, redirecting", request_id);
                Redirect::to("/login").into_response()
            }
        }
    }

    /// Paths reachable without a session: the login page, the login API,
    /// static assets and the liveness probe.
    fn is_public_path(path: &str) -> bool {
        path == "/login"
            || path.starts_with("/api/login")
            || path.starts_with("/assets/")
            || path == "/favicon.ico"
            || path == "/ping"
    }
}

/// Pull the session token out of the Cookie header, if present
fn extract_session_cookie(req: &Request) -> Option<String> {
    req.headers()
        .get(header::COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            for cookie in cookie_str.split(';') {
                let cookie = cookie.trim();
                if let Some(rest) = cookie.strip_prefix(SESSION_COOKIE) {
                    if let Some(value) = rest.strip_prefix('=') {
                        return Some(value.to_string());
                    }
                }
            }
            None
        })
}
