//! Research Backend Models
//!
//! Wire types exchanged with the external research/email-generation backend.
//! These mirror the backend's JSON shapes; nothing here is persisted.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A single research request: company name plus an optional target role.
/// Constructed per form submission, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchRequest {
    /// Company name to research
    pub topic: String,
    /// Year the backend should anchor its research to
    pub current_year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_role: Option<String>,
}

impl ResearchRequest {
    /// Build a request for `topic`, defaulting `current_year` to the current
    /// UTC year.
    pub fn new(topic: impl Into<String>, target_role: Option<String>) -> Self {
        Self {
            topic: topic.into(),
            current_year: Utc::now().year().to_string(),
            target_role,
        }
    }
}

/// Generated email plus the research behind it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailResponse {
    pub topic: String,
    pub current_year: String,
    pub email_content: String,
    pub research_summary: String,
    pub generated_at: String,
    pub processing_time_seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_role: Option<String>,
}

/// Acknowledgement returned when a background task is submitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResponse {
    pub task_id: String,
    pub status: String,
    pub message: String,
}

/// Lifecycle of a background research task.
/// Owned by the backend; this side only polls and renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Pending,
    Running,
    Completed,
    Failed,
}

/// Pollable status of a background research task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskStatus {
    pub task_id: String,
    pub status: TaskState,
    pub topic: String,
    pub current_year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_role: Option<String>,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

/// Backend root endpoint response, used as a reachability check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
    pub version: String,
}
