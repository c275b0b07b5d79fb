//! Research Backend Client
//!
//! Typed wrapper around the external research/email-generation API. Every
//! failure mode (transport, upstream HTTP, malformed payload) is normalized
//! into a single [`ApiError`] shape so callers only handle one kind of error.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;

use crate::research::models::{
    EmailResponse, HealthResponse, ResearchRequest, TaskResponse, TaskStatus,
};

/// The one error shape surfaced by the client.
///
/// `status` carries the upstream HTTP status, or 0 when the backend could not
/// be reached (or returned something unparseable).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: u16,
}

impl ApiError {
    /// Upstream returned a non-success status; use its `detail` message when
    /// the body provides one.
    fn upstream(status: u16, detail: Option<String>) -> Self {
        Self {
            message: detail.unwrap_or_else(|| format!("HTTP error! status: {}", status)),
            status,
        }
    }

    fn unreachable() -> Self {
        Self {
            message: "Unable to connect to the research backend. Please make sure it is running."
                .to_string(),
            status: 0,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            return Self::unreachable();
        }
        Self {
            message: format!("Unexpected response from the research backend: {}", err),
            status: 0,
        }
    }
}

/// Map the typed error onto a browser-facing response: status 0 becomes
/// 502 Bad Gateway, upstream statuses pass through; the body always carries
/// `{"detail": message}` so the page script displays every failure the same way.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.status {
            0 => StatusCode::BAD_GATEWAY,
            code => StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY),
        };
        tracing::warn!("[ResearchClient] upstream failure {}: {}", self.status, self.message);
        (status, Json(json!({ "detail": self.message }))).into_response()
    }
}

/// Client for the research backend
pub struct ResearchClient {
    client: Client,
    base_url: String,
}

impl ResearchClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// No request timeout is set: a call blocks until the network layer
    /// resolves or fails, and the page shows one outcome per submission.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Synchronous generation: research the company and return the email in
    /// one call.
    pub async fn generate_email_instant(
        &self,
        request: &ResearchRequest,
    ) -> Result<EmailResponse, ApiError> {
        self.execute(
            self.client
                .post(format!("{}/research/instant", self.base_url))
                .json(request),
        )
        .await
    }

    /// Submit a background research task
    pub async fn start_research_task(
        &self,
        request: &ResearchRequest,
    ) -> Result<TaskResponse, ApiError> {
        self.execute(
            self.client
                .post(format!("{}/research", self.base_url))
                .json(request),
        )
        .await
    }

    /// Poll the status of a background task. Polling cadence is the caller's
    /// concern; this is a single-shot lookup.
    pub async fn get_task_status(&self, task_id: &str) -> Result<TaskStatus, ApiError> {
        self.execute(
            self.client
                .get(format!("{}/research/{}", self.base_url, task_id)),
        )
        .await
    }

    /// Fetch the result of a completed task
    pub async fn get_task_result(&self, task_id: &str) -> Result<EmailResponse, ApiError> {
        self.execute(
            self.client
                .get(format!("{}/research/{}/result", self.base_url, task_id)),
        )
        .await
    }

    /// Backend reachability check
    pub async fn health_check(&self) -> Result<HealthResponse, ApiError> {
        self.execute(self.client.get(format!("{}/", self.base_url)))
            .await
    }

    /// Send a request and normalize every outcome into `Result<T, ApiError>`
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| body.get("detail")?.as_str().map(String::from));
            return Err(ApiError::upstream(status.as_u16(), detail));
        }

        Ok(response.json::<T>().await?)
    }
}
