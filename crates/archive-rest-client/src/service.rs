//! Archived workflow operations over a [`Transport`]

use archive_api_contract::*;
use serde::de::DeserializeOwned;

use crate::error::RestClientResult;
use crate::query;
use crate::transport::Transport;

const ARCHIVED_WORKFLOWS: &str = "api/v1/archived-workflows";
const LABEL_KEYS: &str = "api/v1/archived-workflows-label-keys";
const LABEL_VALUES: &str = "api/v1/archived-workflows-label-values";

/// Client for the workflow archive endpoints
///
/// Holds no state besides its transport; every call builds its request
/// from its own arguments.
#[derive(Debug, Clone)]
pub struct ArchivedWorkflowsService<T> {
    transport: T,
}

impl<T: Transport> ArchivedWorkflowsService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// List archived workflows matching `filter`
    pub async fn list(&self, filter: &ArchivedWorkflowFilter) -> RestClientResult<WorkflowList> {
        let path = query::with_query(ARCHIVED_WORKFLOWS, filter);
        self.fetch(&path).await
    }

    /// Get a single archived workflow
    pub async fn get(&self, uid: &str) -> RestClientResult<Workflow> {
        self.fetch(&format!("{}/{}", ARCHIVED_WORKFLOWS, uid)).await
    }

    /// Delete an archived workflow
    pub async fn delete(&self, uid: &str) -> RestClientResult<ArchivedWorkflowDeletedResponse> {
        let body = self
            .transport
            .delete(&format!("{}/{}", ARCHIVED_WORKFLOWS, uid))
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// List label keys present on archived workflows
    pub async fn list_label_keys(&self) -> RestClientResult<Labels> {
        self.fetch(LABEL_KEYS).await
    }

    /// List the values seen for a label key
    pub async fn list_label_values(&self, key: &str) -> RestClientResult<Labels> {
        self.fetch(&format!("{}?listOptions.labelSelector={}", LABEL_VALUES, key))
            .await
    }

    async fn fetch<R: DeserializeOwned>(&self, path: &str) -> RestClientResult<R> {
        let body = self.transport.get(path).await?;
        Ok(serde_json::from_value(body)?)
    }
}
