use archive_api_contract::{ArchivedWorkflowFilter, Pagination};
use archive_client_api::{ArchivedWorkflowsApi, ClientApiError};
use archive_rest_client::{ArchivedWorkflowsService, RestClientError};
use archive_rest_client_mock::{RecordedRequest, RecordingTransport};
use chrono::{TimeZone, Utc};
use serde_json::json;

fn service() -> ArchivedWorkflowsService<RecordingTransport> {
    ArchivedWorkflowsService::new(RecordingTransport::new())
}

#[tokio::test]
async fn test_empty_filter_lists_without_query() {
    let service = service();
    service.list(&ArchivedWorkflowFilter::default()).await.unwrap();

    assert_eq!(
        service.transport().requests(),
        vec![RecordedRequest {
            method: "GET",
            path: "api/v1/archived-workflows".into(),
        }]
    );
}

#[tokio::test]
async fn test_full_filter_query_order() {
    let service = service();
    let filter = ArchivedWorkflowFilter::new()
        .with_namespace("default")
        .with_name("my-wf")
        .with_name_prefix("my-")
        .with_phases(["Running", "Failed"])
        .with_labels(["env=prod"])
        .with_started_after(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap())
        .with_pagination(Pagination::new(Some("abc".into()), Some(50)));

    service.list(&filter).await.unwrap();

    assert_eq!(
        service.transport().last_path().unwrap(),
        "api/v1/archived-workflows?\
         listOptions.fieldSelector=metadata.namespace=default,metadata.name=my-wf,\
         spec.startedAt>2023-01-01T00:00:00.000Z&\
         listOptions.labelSelector=workflows.argoproj.io/phase in (Running,Failed),env=prod&\
         listOptions.continue=abc&\
         listOptions.limit=50&\
         namePrefix=my-"
    );
}

#[tokio::test]
async fn test_list_is_pure_in_its_inputs() {
    let service = service();
    let filter = ArchivedWorkflowFilter::new()
        .with_namespace("argo")
        .with_labels(["team=infra"]);

    service.list(&filter).await.unwrap();
    service.list(&filter).await.unwrap();

    let requests = service.transport().requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
}

#[tokio::test]
async fn test_get_and_delete_target_uid_path() {
    let service = service();
    service
        .list(&ArchivedWorkflowFilter::new().with_namespace("argo"))
        .await
        .unwrap();
    service.get("3c7e").await.unwrap();
    service.delete("3c7e").await.unwrap();

    let requests = service.transport().requests();
    assert_eq!(
        requests[1],
        RecordedRequest {
            method: "GET",
            path: "api/v1/archived-workflows/3c7e".into(),
        }
    );
    assert_eq!(
        requests[2],
        RecordedRequest {
            method: "DELETE",
            path: "api/v1/archived-workflows/3c7e".into(),
        }
    );
}

#[tokio::test]
async fn test_label_endpoints() {
    let service = service();
    service
        .transport()
        .respond_to("api/v1/archived-workflows-label-keys", json!({"items": ["env"]}))
        .respond_to(
            "api/v1/archived-workflows-label-values?listOptions.labelSelector=env",
            json!({"items": ["prod"]}),
        );

    assert_eq!(service.list_label_keys().await.unwrap().items, vec!["env"]);
    assert_eq!(service.list_label_values("env").await.unwrap().items, vec!["prod"]);
}

#[tokio::test]
async fn test_label_value_key_is_not_escaped() {
    let service = service();
    service.list_label_values("a b&c").await.unwrap();

    assert_eq!(
        service.transport().last_path().unwrap(),
        "api/v1/archived-workflows-label-values?listOptions.labelSelector=a b&c"
    );
}

#[tokio::test]
async fn test_list_parses_workflow_collection() {
    let service = service();
    service.transport().respond_to(
        "api/v1/archived-workflows?listOptions.limit=1",
        json!({
            "metadata": {"continue": "1"},
            "items": [{"metadata": {"name": "wf", "uid": "u1"}}]
        }),
    );

    let list = service
        .list(&ArchivedWorkflowFilter::new().with_pagination(Pagination::with_limit(1)))
        .await
        .unwrap();
    assert_eq!(list.items[0].metadata.uid, "u1");
    assert_eq!(list.next_offset(), Some("1"));
}

#[tokio::test]
async fn test_errors_pass_through_unchanged() {
    let service = service();
    service.transport().fail_with(
        "api/v1/archived-workflows/gone",
        404,
        json!({"code": 5, "message": "archived workflow not found"}),
    );

    match service.get("gone").await.unwrap_err() {
        RestClientError::ServerError { status, details } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(details.message, "archived workflow not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let api: &dyn ArchivedWorkflowsApi = &service;
    assert!(matches!(api.get("gone").await, Err(ClientApiError::NotFound(_))));
    assert_eq!(service.transport().requests().len(), 2);
}

#[tokio::test]
async fn test_malformed_body_is_json_error() {
    let service = service();
    service
        .transport()
        .respond_to("api/v1/archived-workflows-label-keys", json!({"items": "env"}));

    assert!(matches!(
        service.list_label_keys().await,
        Err(RestClientError::Json(_))
    ));
}
