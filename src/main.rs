//! # Paismo Web
//!
//! Internal email-generation front-end: a small Axum server that keeps the
//! tool behind a shared-credential session gate and proxies form submissions
//! to the external research backend.
//!
//! ## Architecture
//! - `server`: router assembly and startup
//! - `config`: environment variable configuration management
//! - `auth`: session token service + gate middleware
//! - `research`: typed client for the research backend
//! - `routes`: HTTP handlers (pages, auth API, research proxy, health)
//!
//! ## Environment Setup
//! Copy `.env.example` to `.env` and set `APP_COOKIE_SECRET`, `APP_USERNAME`
//! and `APP_PASSWORD`; the server refuses to boot without them.
//!
//! ## Running
//! ```bash
//! cargo run
//! ```
//! The server starts on `http://127.0.0.1:3000` by default; verify with
//! `curl http://localhost:3000/ping`.

mod auth;
mod config;
mod research;
mod routes;
mod server;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Console output with compact formatting; RUST_LOG controls verbosity
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();

    tracing::info!("🏁 Starting Paismo web...");
    tracing::info!(
        "📦 Package: {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    // Runs until the process is terminated
    server::start().await;
}
