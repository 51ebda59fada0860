//! Client API trait for the workflow archive

use archive_api_contract::*;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientApiError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("transport error: {0}")]
    Transport(String),
}

pub type ClientApiResult<T> = Result<T, ClientApiError>;

/// Operations offered by the workflow archive
#[async_trait]
pub trait ArchivedWorkflowsApi: Send + Sync {
    async fn list(&self, filter: &ArchivedWorkflowFilter) -> ClientApiResult<WorkflowList>;

    async fn get(&self, uid: &str) -> ClientApiResult<Workflow>;

    async fn delete(&self, uid: &str) -> ClientApiResult<ArchivedWorkflowDeletedResponse>;

    async fn list_label_keys(&self) -> ClientApiResult<Labels>;

    /// `key` is sent verbatim as the label selector
    async fn list_label_values(&self, key: &str) -> ClientApiResult<Labels>;
}
