// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// HTTP API error with appropriate status codes and client-facing bodies.
///
/// Credential failures carry a generic message body; token failures on
/// protected routes are bare status codes with no body, keeping the
/// "no credentials" vs "rejected credentials" signals distinct.
#[derive(Debug)]
pub enum ApiError {
    // 401 Unauthorized with {"message": ...} body (bad client credentials)
    Unauthorized(String),

    // 401 Unauthorized, empty body (no bearer token supplied)
    MissingToken,

    // 403 Forbidden, empty body (token present but rejected)
    InvalidToken,

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::InvalidToken => StatusCode::FORBIDDEN,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message, if this error carries a body at all
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized(msg) => Some(msg),
            ApiError::InternalServerError(msg) => Some(msg),
            ApiError::MissingToken | ApiError::InvalidToken => None,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Option<Value> {
        self.message().map(|msg| json!({ "message": msg }))
    }
}

// Static constructor methods
impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(msg) => write!(f, "{}", msg),
            None => write!(f, "{}", self.status_code()),
        }
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        match self.to_json() {
            Some(body) => (status, Json(body)).into_response(),
            None => status.into_response(),
        }
    }
}
