//! Wire types for the workflow archive endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ApiContractError;

/// Label key under which the workflow controller records the phase
pub const PHASE_LABEL: &str = "workflows.argoproj.io/phase";

/// Workflow lifecycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkflowPhase {
    Pending,
    Running,
    Succeeded,
    Failed,
    Error,
    /// Empty or unrecognised phase
    #[serde(other)]
    Unknown,
}

impl WorkflowPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowPhase::Pending => "Pending",
            WorkflowPhase::Running => "Running",
            WorkflowPhase::Succeeded => "Succeeded",
            WorkflowPhase::Failed => "Failed",
            WorkflowPhase::Error => "Error",
            WorkflowPhase::Unknown => "Unknown",
        }
    }

    /// Whether the workflow has stopped running
    pub fn is_completed(&self) -> bool {
        matches!(
            self,
            WorkflowPhase::Succeeded | WorkflowPhase::Failed | WorkflowPhase::Error
        )
    }
}

impl fmt::Display for WorkflowPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkflowPhase {
    type Err = ApiContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(WorkflowPhase::Pending),
            "Running" => Ok(WorkflowPhase::Running),
            "Succeeded" => Ok(WorkflowPhase::Succeeded),
            "Failed" => Ok(WorkflowPhase::Failed),
            "Error" => Ok(WorkflowPhase::Error),
            other => Err(ApiContractError::InvalidPhase(other.to_string())),
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Kubernetes object metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_name: Option<String>,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub annotations: BTreeMap<String, String>,
}

/// Observed workflow state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<WorkflowPhase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<u64>,
}

/// An archived workflow record
///
/// `spec` is kept as raw JSON; the archive returns whatever template the
/// workflow ran with and this client never inspects it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: serde_json::Value,
    #[serde(default)]
    pub status: WorkflowStatus,
}

impl Workflow {
    pub fn phase(&self) -> WorkflowPhase {
        self.status.phase.unwrap_or(WorkflowPhase::Unknown)
    }
}

/// List metadata carrying the continuation token
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    #[serde(rename = "continue", skip_serializing_if = "Option::is_none")]
    pub continue_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_item_count: Option<i64>,
}

/// Workflow list response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowList {
    #[serde(default)]
    pub metadata: ListMeta,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Workflow>,
}

impl WorkflowList {
    /// Continuation token for the next page, if the server reported one
    pub fn next_offset(&self) -> Option<&str> {
        self.metadata
            .continue_token
            .as_deref()
            .filter(|token| !token.is_empty())
    }
}

/// Label keys or label values response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<String>,
}

/// Acknowledgement returned by the archive delete endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivedWorkflowDeletedResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_list_parsing() {
        let body = r#"{
            "metadata": {"continue": "2"},
            "items": [{
                "metadata": {
                    "name": "hello-world-abc",
                    "namespace": "argo",
                    "uid": "7f3b5c1e-0000-4000-8000-000000000001",
                    "labels": {"workflows.argoproj.io/phase": "Succeeded"}
                },
                "spec": {"entrypoint": "main"},
                "status": {
                    "phase": "Succeeded",
                    "startedAt": "2023-01-01T00:00:00Z",
                    "finishedAt": "2023-01-01T00:01:00Z"
                }
            }]
        }"#;

        let list: WorkflowList = serde_json::from_str(body).unwrap();
        assert_eq!(list.next_offset(), Some("2"));
        assert_eq!(list.items.len(), 1);

        let wf = &list.items[0];
        assert_eq!(wf.metadata.name, "hello-world-abc");
        assert_eq!(wf.phase(), WorkflowPhase::Succeeded);
        assert_eq!(
            wf.metadata.labels.get(PHASE_LABEL).map(String::as_str),
            Some("Succeeded")
        );
        assert_eq!(wf.spec["entrypoint"], "main");
    }

    #[test]
    fn test_null_items_become_empty() {
        let list: WorkflowList =
            serde_json::from_str(r#"{"metadata": {}, "items": null}"#).unwrap();
        assert!(list.items.is_empty());
        assert_eq!(list.next_offset(), None);

        let labels: Labels = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(labels.items.is_empty());

        let labels: Labels = serde_json::from_str("{}").unwrap();
        assert!(labels.items.is_empty());
    }

    #[test]
    fn test_empty_continue_token_is_not_a_next_page() {
        let list: WorkflowList =
            serde_json::from_str(r#"{"metadata": {"continue": ""}}"#).unwrap();
        assert_eq!(list.next_offset(), None);
    }

    #[test]
    fn test_unknown_phase() {
        let status: WorkflowStatus = serde_json::from_str(r#"{"phase": ""}"#).unwrap();
        assert_eq!(status.phase, Some(WorkflowPhase::Unknown));

        let status: WorkflowStatus = serde_json::from_str(r#"{"phase": "Omitted"}"#).unwrap();
        assert_eq!(status.phase, Some(WorkflowPhase::Unknown));
    }

    #[test]
    fn test_phase_from_str() {
        assert_eq!("Running".parse::<WorkflowPhase>().unwrap(), WorkflowPhase::Running);
        assert!("running".parse::<WorkflowPhase>().is_err());
        assert!(WorkflowPhase::Failed.is_completed());
        assert!(!WorkflowPhase::Pending.is_completed());
    }

    #[test]
    fn test_delete_response_parsing() {
        let ack: ArchivedWorkflowDeletedResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(ack, ArchivedWorkflowDeletedResponse {});
    }
}
