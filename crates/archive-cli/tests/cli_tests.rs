use archive_cli::archive::ListArgs;
use archive_cli::{Cli, Commands, OutputFormat, Parser};
use archive_rest_client_mock::MockClient;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn test_cli_parsing_list_filters() {
    let cli = parse(&[
        "argo-archive",
        "list",
        "--namespace",
        "argo",
        "--phase",
        "Failed",
        "--phase",
        "Error",
        "-l",
        "env=prod",
        "--started-after",
        "2024-03-01T00:00:00Z",
        "--continue",
        "abc",
        "--limit",
        "20",
    ]);

    let Commands::List(args) = cli.command else {
        panic!("expected list command");
    };
    let filter = args.to_filter();
    assert_eq!(filter.namespace.as_deref(), Some("argo"));
    assert_eq!(filter.phases, vec!["Failed", "Error"]);
    assert_eq!(filter.labels, vec!["env=prod"]);
    assert!(filter.min_started_at.is_some());
    assert_eq!(filter.pagination.offset.as_deref(), Some("abc"));
    assert_eq!(filter.pagination.limit, Some(20));
}

#[test]
fn test_cli_rejects_unknown_phase() {
    assert!(Cli::try_parse_from(["argo-archive", "list", "--phase", "Done"]).is_err());
}

#[test]
fn test_cli_rejects_bad_timestamp() {
    assert!(Cli::try_parse_from(["argo-archive", "list", "--started-before", "today"]).is_err());
}

#[test]
fn test_cli_parsing_global_options_after_subcommand() {
    let cli = parse(&[
        "argo-archive",
        "get",
        "uid-1",
        "--server",
        "https://localhost:2746",
        "-o",
        "wide",
    ]);
    assert!(matches!(cli.command, Commands::Get { ref uid } if uid == "uid-1"));
    assert_eq!(cli.output, OutputFormat::Wide);
    assert_eq!(cli.connection.server.as_deref(), Some("https://localhost:2746"));
}

#[test]
fn test_cli_parsing_label_commands() {
    assert!(matches!(
        parse(&["argo-archive", "label-keys"]).command,
        Commands::LabelKeys
    ));
    assert!(matches!(
        parse(&["argo-archive", "label-values", "env"]).command,
        Commands::LabelValues { ref key } if key == "env"
    ));
}

#[tokio::test]
async fn test_list_wide_output() {
    let client = MockClient::with_demo_data();
    let command = Commands::List(ListArgs {
        namespace: Some("ml".into()),
        ..Default::default()
    });

    let out = command.execute(&client, OutputFormat::Wide).await.unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("NAMESPACE\tNAME"));
    assert!(lines[1].starts_with("ml\ttrain-model-q2w8e\tuid-4\tError\t2024-03-04T09:00:00Z"));
}

#[tokio::test]
async fn test_list_wide_output_reports_next_page() {
    let client = MockClient::with_demo_data();
    let command = Commands::List(ListArgs {
        limit: Some(1),
        ..Default::default()
    });

    let out = command.execute(&client, OutputFormat::Wide).await.unwrap();
    assert!(out.ends_with("# more results: --continue 1"));
}

#[tokio::test]
async fn test_get_json_output() {
    let client = MockClient::with_demo_data();
    let command = Commands::Get { uid: "uid-2".into() };

    let out = command.execute(&client, OutputFormat::Json).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["metadata"]["name"], "nightly-build-4fj9s");
    assert_eq!(value["status"]["phase"], "Failed");
}

#[tokio::test]
async fn test_delete_then_get_fails() {
    let client = MockClient::with_demo_data();

    let out = Commands::Delete { uid: "uid-3".into() }
        .execute(&client, OutputFormat::Wide)
        .await
        .unwrap();
    assert_eq!(out, "deleted uid-3");

    let err = Commands::Get { uid: "uid-3".into() }
        .execute(&client, OutputFormat::Json)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("uid-3"));
}

#[tokio::test]
async fn test_label_values_wide_output() {
    let client = MockClient::with_demo_data();
    let out = Commands::LabelValues { key: "team".into() }
        .execute(&client, OutputFormat::Wide)
        .await
        .unwrap();
    assert_eq!(out, "infra");
}
