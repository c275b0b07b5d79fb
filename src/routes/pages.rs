//! Static pages
//!
//! Presentation only: the login form, the generator form, and the shared
//! stylesheet. All behavior lives in the API routes these pages call.

use axum::http::header;
use axum::response::{Html, IntoResponse};

/// `GET /`: the company/role form and email output
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}

/// `GET /login`: the shared-credential login form
pub async fn login_page() -> Html<&'static str> {
    Html(include_str!("../../templates/login.html"))
}

/// `GET /assets/app.css`
pub async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../../templates/app.css"),
    )
}
