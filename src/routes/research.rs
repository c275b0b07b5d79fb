//! Research proxy routes
//!
//! Gate-protected endpoints the page script calls; each forwards through the
//! typed [`ResearchClient`](crate::research::ResearchClient) so every failure
//! reaches the browser as `{"detail": message}`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use crate::research::models::ResearchRequest;
use crate::server::AppState;

/// Form payload from the page; `current_year` is optional and defaults to the
/// current UTC year.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
    pub current_year: Option<String>,
    pub target_role: Option<String>,
}

impl GenerateRequest {
    fn into_research_request(self) -> ResearchRequest {
        let mut request = ResearchRequest::new(self.topic, self.target_role);
        if let Some(year) = self.current_year {
            request.current_year = year;
        }
        request
    }
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "detail": message }))).into_response()
}

/// `POST /api/research/instant`: synchronous research + email generation
pub async fn generate_instant(
    State(app_state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Response {
    if payload.topic.trim().is_empty() {
        return bad_request("company name is required");
    }

    let request = payload.into_research_request();
    tracing::info!("[Research] Instant generation for topic {:?}", request.topic);

    match app_state.research.generate_email_instant(&request).await {
        Ok(email) => Json(email).into_response(),
        Err(e) => e.into_response(),
    }
}

/// `POST /api/research`: submit a background research task
pub async fn start_task(
    State(app_state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Response {
    if payload.topic.trim().is_empty() {
        return bad_request("company name is required");
    }

    let request = payload.into_research_request();
    tracing::info!("[Research] Task submission for topic {:?}", request.topic);

    match app_state.research.start_research_task(&request).await {
        Ok(task) => Json(task).into_response(),
        Err(e) => e.into_response(),
    }
}

/// `GET /api/research/{task_id}`: poll a task's status
pub async fn task_status(
    State(app_state): State<AppState>,
    Path(task_id): Path<String>,
) -> Response {
    match app_state.research.get_task_status(&task_id).await {
        Ok(status) => Json(status).into_response(),
        Err(e) => e.into_response(),
    }
}

/// `GET /api/research/{task_id}/result`: fetch a completed task's email
pub async fn task_result(
    State(app_state): State<AppState>,
    Path(task_id): Path<String>,
) -> Response {
    match app_state.research.get_task_result(&task_id).await {
        Ok(email) => Json(email).into_response(),
        Err(e) => e.into_response(),
    }
}

pub fn create_research_routes() -> Router<AppState> {
    Router::new()
        .route("/api/research/instant", post(generate_instant))
        .route("/api/research", post(start_task))
        .route("/api/research/{task_id}", get(task_status))
        .route("/api/research/{task_id}/result", get(task_result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthConfig, Config, ServerConfig};
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn state_for(backend_url: &str) -> AppState {
        AppState::new(Config {
            research_api_url: backend_url.to_string(),
            auth: AuthConfig {
                cookie_secret: "test_secret".to_string(),
                username: "team".to_string(),
                password: "hunter2".to_string(),
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                production: false,
            },
        })
    }

    fn instant_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/research/instant")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_blank_topic_is_rejected_before_any_outbound_call() {
        // Backend deliberately unreachable: validation must trip first
        let app = create_research_routes().with_state(state_for("http://127.0.0.1:9"));

        let response = app
            .oneshot(instant_request(serde_json::json!({"topic": "   "})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["detail"], "company name is required");
    }

    #[tokio::test]
    async fn test_unreachable_backend_maps_to_bad_gateway() {
        let app = create_research_routes().with_state(state_for("http://127.0.0.1:9"));

        let response = app
            .oneshot(instant_request(serde_json::json!({"topic": "Acme"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(body["detail"].as_str().unwrap().contains("Unable to connect"));
    }

    #[tokio::test]
    async fn test_upstream_status_and_detail_pass_through() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/research/instant"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(serde_json::json!({"detail": "boom"})),
            )
            .mount(&server)
            .await;

        let app = create_research_routes().with_state(state_for(&server.uri()));
        let response = app
            .oneshot(instant_request(serde_json::json!({"topic": "Acme"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["detail"], "boom");
    }

    #[tokio::test]
    async fn test_successful_generation_returns_email_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/research/instant"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "topic": "Acme",
                "current_year": "2026",
                "email_content": "Dear team at Acme,",
                "research_summary": "Acme builds anvils.",
                "generated_at": "2026-08-23T10:00:00",
                "processing_time_seconds": 3.2
            })))
            .mount(&server)
            .await;

        let app = create_research_routes().with_state(state_for(&server.uri()));
        let response = app
            .oneshot(instant_request(serde_json::json!({"topic": "Acme"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["email_content"], "Dear team at Acme,");
    }
}
