// src/api/error.rs
// Centralized error handling for HTTP API responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use tracing::warn;

use crate::error::TrackerError;

/// Standard API error response format
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
    pub error_code: Option<String>,
}

impl ApiError {
    /// Create a new not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::NOT_FOUND,
            error_code: Some("NOT_FOUND".to_string()),
        }
    }

    /// Create a new bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::BAD_REQUEST,
            error_code: Some("BAD_REQUEST".to_string()),
        }
    }

    /// Identifier collision on create. Reported as 400, not 409.
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self {
            error_code: Some("ALREADY_EXISTS".to_string()),
            ..Self::bad_request(message)
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<TrackerError> for ApiError {
    fn from(err: TrackerError) -> Self {
        let api_err = match err {
            TrackerError::NotFound(_) => ApiError::not_found(err.to_string()),
            TrackerError::AlreadyExists(_) => ApiError::already_exists(err.to_string()),
        };
        warn!(status = api_err.status_code.as_u16(), "{}", api_err.message);
        api_err
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response_json = json!({
            "error": true,
            "message": self.message,
            "status": self.status_code.as_u16()
        });

        if let Some(error_code) = self.error_code {
            response_json["error_code"] = json!(error_code);
        }

        (self.status_code, Json(response_json)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EntityKind;

    #[test]
    fn test_not_found_maps_to_404() {
        let error: ApiError = TrackerError::NotFound(EntityKind::Project).into();
        assert_eq!(error.status_code, StatusCode::NOT_FOUND);
        assert_eq!(error.message, "Project not found");
        assert_eq!(error.error_code.as_deref(), Some("NOT_FOUND"));
    }

    #[test]
    fn test_already_exists_maps_to_400() {
        let error: ApiError = TrackerError::AlreadyExists(EntityKind::User).into();
        assert_eq!(error.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(error.message, "User already exists");
        assert_eq!(error.error_code.as_deref(), Some("ALREADY_EXISTS"));
    }

    #[test]
    fn test_into_response_uses_status() {
        let response = ApiError::not_found("Task not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_display_is_message() {
        let error = ApiError::bad_request("nope");
        assert_eq!(error.to_string(), "nope");
    }
}
