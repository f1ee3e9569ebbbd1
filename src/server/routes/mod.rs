//! Route handler modules
//!
//! - ask_routes: single-agent question endpoints (/ask_crow, /ask_falcon,
//!   /ask_phoenix, /ask_owl)
//! - batch_routes: the sequential multi-agent endpoint (/ask_multi)

pub mod ask_routes;
pub mod batch_routes;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Error type returned by the route handlers.
///
/// Serializes as `{"error": <message>}` with the carried status code, so
/// validation failures and remote failures both reach the caller as
/// structured JSON.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Caller-fault validation error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// Remote-call failure surfaced to the caller
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_carries_400() {
        let err = ApiError::bad_request("Missing question");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Missing question");
    }

    #[test]
    fn test_bad_gateway_carries_502() {
        let err = ApiError::bad_gateway("upstream unavailable");
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_into_response_preserves_status() {
        let response = ApiError::bad_request("Missing question").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
