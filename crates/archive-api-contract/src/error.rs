//! Error types for API contract parsing

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while parsing contract values
#[derive(Debug, Error)]
pub enum ApiContractError {
    #[error("Invalid workflow phase: {0}")]
    InvalidPhase(String),
}

/// Error body returned by the server's grpc-gateway on non-2xx statuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// gRPC status code (5 = NotFound, 7 = PermissionDenied, ...)
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub details: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_body_parsing() {
        let body = r#"{"code":5,"message":"not found","details":[]}"#;
        let parsed: ApiErrorBody = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.code, 5);
        assert_eq!(parsed.message, "not found");
        assert!(parsed.error.is_none());
        assert!(parsed.details.is_empty());
    }
}
