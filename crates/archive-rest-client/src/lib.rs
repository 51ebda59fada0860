//! REST client for the Argo workflow archive
//!
//! Lists, fetches and deletes archived workflows and lists the label keys
//! and values available for filtering. Query construction lives in
//! [`query`]; network I/O goes through the [`Transport`] trait so tests can
//! substitute a fake.

pub mod auth;
pub mod error;
pub mod query;
pub mod service;
pub mod transport;

pub use auth::*;
pub use error::*;
pub use service::*;
pub use transport::*;

use archive_api_contract::*;
use archive_client_api::{ArchivedWorkflowsApi, ClientApiError, ClientApiResult};
use async_trait::async_trait;

/// Archive client talking HTTP to an Argo server
pub type RestClient = ArchivedWorkflowsService<HttpTransport>;

impl ArchivedWorkflowsService<HttpTransport> {
    /// Create a client from a base URL string
    pub fn from_url(base_url: &str, auth: AuthConfig) -> RestClientResult<Self> {
        Ok(Self::new(HttpTransport::from_url(base_url, auth)?))
    }
}

impl From<RestClientError> for ClientApiError {
    fn from(err: RestClientError) -> Self {
        match err.status() {
            Some(StatusCode::NOT_FOUND) => ClientApiError::NotFound(err.to_string()),
            Some(_) => ClientApiError::Server(err.to_string()),
            None => ClientApiError::Transport(err.to_string()),
        }
    }
}

#[async_trait]
impl<T: Transport> ArchivedWorkflowsApi for ArchivedWorkflowsService<T> {
    async fn list(&self, filter: &ArchivedWorkflowFilter) -> ClientApiResult<WorkflowList> {
        Ok(ArchivedWorkflowsService::list(self, filter).await?)
    }

    async fn get(&self, uid: &str) -> ClientApiResult<Workflow> {
        Ok(ArchivedWorkflowsService::get(self, uid).await?)
    }

    async fn delete(&self, uid: &str) -> ClientApiResult<ArchivedWorkflowDeletedResponse> {
        Ok(ArchivedWorkflowsService::delete(self, uid).await?)
    }

    async fn list_label_keys(&self) -> ClientApiResult<Labels> {
        Ok(ArchivedWorkflowsService::list_label_keys(self).await?)
    }

    async fn list_label_values(&self, key: &str) -> ClientApiResult<Labels> {
        Ok(ArchivedWorkflowsService::list_label_values(self, key).await?)
    }
}
