//! Error handling for the backend API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::rae::UpstreamError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream error: status {status}")]
    Upstream { status: u16, body: String },

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<UpstreamError> for ApiError {
    fn from(e: UpstreamError) -> Self {
        match e {
            UpstreamError::Status { status, body } => ApiError::Upstream { status, body },
            UpstreamError::Request(e) => ApiError::Fetch(e.to_string()),
            UpstreamError::Config(msg) => ApiError::Internal(msg),
        }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Upstream { .. } => (StatusCode::BAD_GATEWAY, "upstream_error"),
            ApiError::Fetch(_) => (StatusCode::INTERNAL_SERVER_ERROR, "fetch_error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let (upstream_status, upstream_body) = match &self {
            ApiError::Upstream { status, body } => (Some(*status), Some(body.clone())),
            _ => (None, None),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            status: upstream_status,
            body: upstream_body,
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
