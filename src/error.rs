//! Error types for the gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Gateway Error Enum ==
/// Unified error type for the gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Transport-level failure reaching the upstream API
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("upstream returned status {0}")]
    UpstreamStatus(StatusCode),

    /// Upstream body could not be decoded
    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Requested item does not exist upstream
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid request data from the client
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            GatewayError::Upstream(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
            // Pass the upstream status through so clients see what the
            // indexing API answered.
            GatewayError::UpstreamStatus(code) => (*code, self.to_string()),
            GatewayError::Decode(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
            GatewayError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            GatewayError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            GatewayError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            GatewayError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gateway.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let cases = vec![
            (
                GatewayError::UpstreamStatus(StatusCode::SERVICE_UNAVAILABLE),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                GatewayError::NotFound("tx1".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                GatewayError::InvalidRequest("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                GatewayError::Config("bad url".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                GatewayError::Internal("oops".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[tokio::test]
    async fn test_error_body_has_error_field() {
        let response = GatewayError::InvalidRequest("missing pattern".to_string()).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["error"].as_str().unwrap(), "missing pattern");
    }
}
