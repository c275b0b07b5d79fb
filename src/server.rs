//! # Server Module
//!
//! HTTP server setup and route configuration for the Paismo web tool.

use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::auth::jwt::SessionService;
use crate::auth::middleware::SessionGate;
use crate::config::{CONFIG, Config};
use crate::research::ResearchClient;
use crate::routes::{health::ping, pages};

/// Application state shared across all route handlers.
///
/// Everything here is read-only after startup; requests share it through
/// cheap `Arc` clones.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: Arc<SessionService>,
    pub research: Arc<ResearchClient>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let sessions = Arc::new(SessionService::new(&config.auth.cookie_secret));
        let research = Arc::new(ResearchClient::new(config.research_api_url.clone()));

        Self {
            config: Arc::new(config),
            sessions,
            research,
        }
    }
}

/// Assemble the full router: pages, auth API, research proxy, health check,
/// all behind the session gate (the gate itself lets the login flow, assets
/// and `/ping` through).
pub fn build_router(app_state: AppState) -> Router {
    let sessions = app_state.sessions.clone();

    Router::new()
        .route("/", get(pages::index))
        .route("/login", get(pages::login_page))
        .route("/assets/app.css", get(pages::stylesheet))
        .route("/ping", get(ping))
        .merge(crate::routes::auth::create_auth_routes())
        .merge(crate::routes::research::create_research_routes())
        .layer(middleware::from_fn_with_state(
            sessions,
            SessionGate::require_session,
        ))
        .with_state(app_state)
}

/// Starts the Paismo HTTP server.
///
/// Forces configuration loading up front: a missing cookie secret or missing
/// credentials abort startup before anything binds.
pub async fn start() {
    let config = CONFIG.clone();
    let app_state = AppState::new(config);
    let app = build_router(app_state.clone());

    // Use $PORT if set (Heroku-style), otherwise the configured port
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(app_state.config.server.port);
    let host: std::net::IpAddr = app_state
        .config
        .server
        .host
        .parse()
        .unwrap_or(std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST));
    let addr = std::net::SocketAddr::from((host, port));

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address - port may already be in use");

    tracing::info!("🚀 Paismo web starting...");
    tracing::info!("📡 Listening on http://{}", addr);
    tracing::info!("🏥 Health check available at http://{}/ping", addr);
    tracing::info!(
        "🔬 Research backend: {}",
        app_state.config.research_api_url
    );

    axum::serve(listener, app).await.unwrap();
}
