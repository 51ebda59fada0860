//! Fake transport and in-memory archive client for tests

use archive_api_contract::*;
use archive_client_api::{ArchivedWorkflowsApi, ClientApiError, ClientApiResult};
use archive_rest_client::{RestClientError, RestClientResult, StatusCode, Transport};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

/// A request observed by [`RecordingTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
}

#[derive(Debug, Clone)]
enum CannedResponse {
    Ok(serde_json::Value),
    Err {
        status: StatusCode,
        body: serde_json::Value,
    },
}

/// Transport that records request paths and answers with canned JSON
///
/// Paths without a registered response answer `{}`.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<HashMap<String, CannedResponse>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests for exactly `path` with `body`
    pub fn respond_to(&self, path: impl Into<String>, body: serde_json::Value) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.into(), CannedResponse::Ok(body));
        self
    }

    /// Fail requests for exactly `path` with `status` and error `body`
    pub fn fail_with(
        &self,
        path: impl Into<String>,
        status: u16,
        body: serde_json::Value,
    ) -> &Self {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.responses
            .lock()
            .unwrap()
            .insert(path.into(), CannedResponse::Err { status, body });
        self
    }

    /// All requests seen so far, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_path(&self) -> Option<String> {
        self.requests.lock().unwrap().last().map(|r| r.path.clone())
    }

    fn answer(&self, method: &'static str, path: &str) -> RestClientResult<serde_json::Value> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
        });

        let canned = self.responses.lock().unwrap().get(path).cloned();
        match canned {
            None => Ok(serde_json::json!({})),
            Some(CannedResponse::Ok(body)) => Ok(body),
            Some(CannedResponse::Err { status, body }) => {
                match serde_json::from_value::<ApiErrorBody>(body.clone()) {
                    Ok(details) => Err(RestClientError::ServerError { status, details }),
                    Err(_) => Err(RestClientError::UnexpectedResponse {
                        status,
                        body: body.to_string(),
                    }),
                }
            }
        }
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, path: &str) -> RestClientResult<serde_json::Value> {
        self.answer("GET", path)
    }

    async fn delete(&self, path: &str) -> RestClientResult<serde_json::Value> {
        self.answer("DELETE", path)
    }
}

/// In-memory archive implementing [`ArchivedWorkflowsApi`]
///
/// The continuation token is the decimal index of the next item.
pub struct MockClient {
    workflows: Mutex<Vec<Workflow>>,
}

impl MockClient {
    pub fn new(workflows: Vec<Workflow>) -> Self {
        Self {
            workflows: Mutex::new(workflows),
        }
    }

    /// A small archive spread over two namespaces
    pub fn with_demo_data() -> Self {
        let day = |d: u32| Utc.with_ymd_and_hms(2024, 3, d, 9, 0, 0).unwrap();
        Self::new(vec![
            demo_workflow(
                ("argo", "hello-world-x7k2p", "uid-1"),
                WorkflowPhase::Succeeded,
                day(1),
                &[("team", "infra")],
            ),
            demo_workflow(
                ("argo", "nightly-build-4fj9s", "uid-2"),
                WorkflowPhase::Failed,
                day(2),
                &[("team", "infra"), ("env", "prod")],
            ),
            demo_workflow(
                ("argo", "nightly-build-9ax0c", "uid-3"),
                WorkflowPhase::Succeeded,
                day(3),
                &[("env", "prod")],
            ),
            demo_workflow(
                ("ml", "train-model-q2w8e", "uid-4"),
                WorkflowPhase::Error,
                day(4),
                &[("env", "staging")],
            ),
        ])
    }

    fn labels(&self) -> Vec<(String, String)> {
        let workflows = self.workflows.lock().unwrap();
        workflows
            .iter()
            .flat_map(|wf| wf.metadata.labels.iter())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

fn demo_workflow(
    (namespace, name, uid): (&str, &str, &str),
    phase: WorkflowPhase,
    started_at: DateTime<Utc>,
    labels: &[(&str, &str)],
) -> Workflow {
    let mut metadata = ObjectMeta {
        name: name.into(),
        namespace: namespace.into(),
        uid: uid.into(),
        creation_timestamp: Some(started_at),
        ..Default::default()
    };
    metadata.labels.insert(PHASE_LABEL.into(), phase.to_string());
    for (k, v) in labels {
        metadata.labels.insert((*k).into(), (*v).into());
    }

    Workflow {
        metadata,
        spec: serde_json::json!({"entrypoint": "main"}),
        status: WorkflowStatus {
            phase: Some(phase),
            started_at: Some(started_at),
            finished_at: Some(started_at + chrono::Duration::minutes(5)),
            ..Default::default()
        },
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn matches_filter(wf: &Workflow, filter: &ArchivedWorkflowFilter) -> bool {
    let meta = &wf.metadata;

    if non_empty(&filter.namespace).is_some_and(|ns| meta.namespace != ns) {
        return false;
    }
    if non_empty(&filter.name).is_some_and(|name| meta.name != name) {
        return false;
    }
    if non_empty(&filter.name_prefix).is_some_and(|prefix| !meta.name.starts_with(prefix)) {
        return false;
    }
    if !filter.phases.is_empty() && !filter.phases.iter().any(|p| p == wf.phase().as_str()) {
        return false;
    }

    let label_ok = filter.labels.iter().all(|token| match token.split_once('=') {
        Some((key, value)) => meta.labels.get(key).is_some_and(|v| v == value),
        None => meta.labels.contains_key(token.as_str()),
    });
    if !label_ok {
        return false;
    }

    let started = wf.status.started_at;
    if let Some(min) = filter.min_started_at {
        if started.map_or(true, |s| s <= min) {
            return false;
        }
    }
    if let Some(max) = filter.max_started_at {
        if started.map_or(true, |s| s >= max) {
            return false;
        }
    }
    true
}

#[async_trait]
impl ArchivedWorkflowsApi for MockClient {
    async fn list(&self, filter: &ArchivedWorkflowFilter) -> ClientApiResult<WorkflowList> {
        let matching: Vec<Workflow> = {
            let workflows = self.workflows.lock().unwrap();
            workflows
                .iter()
                .filter(|wf| matches_filter(wf, filter))
                .cloned()
                .collect()
        };

        let start = match non_empty(&filter.pagination.offset) {
            Some(token) => token
                .parse::<usize>()
                .map_err(|_| ClientApiError::Server(format!("invalid continue token: {token}")))?,
            None => 0,
        };
        let limit = filter
            .pagination
            .limit
            .filter(|l| *l > 0)
            .map_or(usize::MAX, |l| l as usize);

        let end = start.saturating_add(limit).min(matching.len());
        let items = matching.get(start..end).map(<[Workflow]>::to_vec).unwrap_or_default();
        let continue_token = (end < matching.len()).then(|| end.to_string());

        Ok(WorkflowList {
            metadata: ListMeta {
                remaining_item_count: continue_token
                    .as_ref()
                    .map(|_| (matching.len() - end) as i64),
                continue_token,
            },
            items,
        })
    }

    async fn get(&self, uid: &str) -> ClientApiResult<Workflow> {
        self.workflows
            .lock()
            .unwrap()
            .iter()
            .find(|wf| wf.metadata.uid == uid)
            .cloned()
            .ok_or_else(|| ClientApiError::NotFound(uid.to_string()))
    }

    async fn delete(&self, uid: &str) -> ClientApiResult<ArchivedWorkflowDeletedResponse> {
        let mut workflows = self.workflows.lock().unwrap();
        let before = workflows.len();
        workflows.retain(|wf| wf.metadata.uid != uid);
        if workflows.len() == before {
            return Err(ClientApiError::NotFound(uid.to_string()));
        }
        Ok(ArchivedWorkflowDeletedResponse {})
    }

    async fn list_label_keys(&self) -> ClientApiResult<Labels> {
        let keys: BTreeSet<String> = self.labels().into_iter().map(|(k, _)| k).collect();
        Ok(Labels {
            items: keys.into_iter().collect(),
        })
    }

    async fn list_label_values(&self, key: &str) -> ClientApiResult<Labels> {
        let values: BTreeSet<String> = self
            .labels()
            .into_iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v)
            .collect();
        Ok(Labels {
            items: values.into_iter().collect(),
        })
    }
}
