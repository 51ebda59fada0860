//! Error types for the REST client

use archive_api_contract::ApiErrorBody;
pub use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the archive server
#[derive(Debug, Error)]
pub enum RestClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Server returned error status {status}: {}", .details.message)]
    ServerError {
        status: StatusCode,
        details: ApiErrorBody,
    },

    #[error("Unexpected response ({status}): {body}")]
    UnexpectedResponse { status: StatusCode, body: String },
}

impl RestClientError {
    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RestClientError::ServerError { status, .. }
            | RestClientError::UnexpectedResponse { status, .. } => Some(*status),
            RestClientError::Http(err) => err.status(),
            _ => None,
        }
    }
}

/// Result type alias for REST client operations
pub type RestClientResult<T> = Result<T, RestClientError>;
