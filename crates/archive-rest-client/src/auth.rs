//! Authentication methods for the archive client

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::error::{RestClientError, RestClientResult};

/// Authentication methods accepted by the Argo server
#[derive(Debug, Clone, Default)]
pub enum AuthMethod {
    /// Bearer token (`Authorization: Bearer <token>`)
    Bearer(String),
    /// HTTP basic auth (`Authorization: Basic <base64>`)
    Basic { username: String, password: String },
    /// No authentication
    #[default]
    None,
}

impl AuthMethod {
    /// Apply authentication headers to a request
    pub fn apply_to_headers(&self, headers: &mut HeaderMap) -> RestClientResult<()> {
        let value = match self {
            AuthMethod::Bearer(token) => {
                // `argo auth token` prints the token with its scheme already attached
                if token.starts_with("Bearer ") {
                    token.clone()
                } else {
                    format!("Bearer {}", token)
                }
            }
            AuthMethod::Basic { username, password } => {
                format!("Basic {}", STANDARD.encode(format!("{}:{}", username, password)))
            }
            AuthMethod::None => return Ok(()),
        };

        let mut value =
            HeaderValue::from_str(&value).map_err(|e| RestClientError::Auth(e.to_string()))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    /// Create bearer token authentication
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(token.into())
    }

    /// Create basic authentication
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Authentication configuration for the client
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub method: AuthMethod,
}

impl AuthConfig {
    pub fn with_bearer(token: impl Into<String>) -> Self {
        Self {
            method: AuthMethod::bearer(token),
        }
    }

    pub fn with_basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            method: AuthMethod::basic(username, password),
        }
    }

    /// Get headers for this authentication configuration
    pub fn headers(&self) -> RestClientResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        self.method.apply_to_headers(&mut headers)?;
        Ok(headers)
    }
}
