//! Response payloads and error mapping.
//!
//! # Responsibilities
//! - Define the JSON shapes returned by every endpoint
//! - Map handler errors to HTTP status codes
//!
//! # Design Decisions
//! - Validation failures answer 422 with a JSON body, never clamp
//! - Text blobs (logs, commits) travel as a single JSON string field

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generator::ServiceMetrics;

/// Body of `GET /`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootStatus {
    pub status: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsResponse {
    pub cluster_name: String,
    pub total_services: usize,
    pub services: Vec<String>,
    pub log_count: usize,
    pub time_range: TimeRange,
    /// Newline-joined log lines, oldest first.
    pub logs: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitHistoryResponse {
    pub cluster_name: String,
    pub total_commits: usize,
    pub services: Vec<String>,
    pub time_range: TimeRange,
    /// Newline-joined git-log blocks, newest first.
    pub commits: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub timestamp: String,
    pub cluster_name: String,
    pub services: Vec<ServiceMetrics>,
}

/// JSON body for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub detail: String,
}

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Query parameter missing its declared bounds or not parseable.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.kind().to_string(),
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
