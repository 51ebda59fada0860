//! HTTP transport used by the archive service

use archive_api_contract::ApiErrorBody;
use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, Response};
use tracing::debug;
use url::Url;

use crate::auth::AuthConfig;
use crate::error::{RestClientError, RestClientResult};

/// Request helper the service delegates network I/O to
///
/// `path` is relative to the transport's base URL and may carry a query
/// string. Implementations return the parsed JSON body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> RestClientResult<serde_json::Value>;

    async fn delete(&self, path: &str) -> RestClientResult<serde_json::Value>;
}

/// reqwest-backed transport talking to an Argo server
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: HttpClient,
    base_url: Url,
    auth: AuthConfig,
}

impl HttpTransport {
    pub fn new(base_url: Url, auth: AuthConfig) -> RestClientResult<Self> {
        let http_client = HttpClient::builder()
            .user_agent(concat!("argo-archive/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            base_url: with_trailing_slash(base_url),
            auth,
        })
    }

    /// Create a transport from a base URL string
    pub fn from_url(base_url: &str, auth: AuthConfig) -> RestClientResult<Self> {
        Self::new(Url::parse(base_url)?, auth)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    /// Resolve a relative request path against the base URL
    pub fn resolve(&self, path: &str) -> RestClientResult<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    async fn request(&self, method: Method, path: &str) -> RestClientResult<serde_json::Value> {
        let url = self.resolve(path)?;
        debug!(%method, %url, "sending archive request");

        let response = self
            .http_client
            .request(method, url)
            .headers(self.auth.headers()?)
            .send()
            .await?;

        handle_response(response).await
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> RestClientResult<serde_json::Value> {
        self.request(Method::GET, path).await
    }

    async fn delete(&self, path: &str) -> RestClientResult<serde_json::Value> {
        self.request(Method::DELETE, path).await
    }
}

// Without the slash, `Url::join` drops the last path segment of the base.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

async fn handle_response(response: Response) -> RestClientResult<serde_json::Value> {
    let status = response.status();
    let text = response.text().await?;
    debug!(%status, bytes = text.len(), "archive response received");

    if status.is_success() {
        if text.trim().is_empty() {
            return Ok(serde_json::Value::Object(Default::default()));
        }
        serde_json::from_str(&text).map_err(RestClientError::from)
    } else {
        match serde_json::from_str::<ApiErrorBody>(&text) {
            Ok(details) => Err(RestClientError::ServerError { status, details }),
            Err(_) => Err(RestClientError::UnexpectedResponse { status, body: text }),
        }
    }
}
