//! Archive commands

use anyhow::Result;
use archive_api_contract::{ArchivedWorkflowFilter, Pagination, WorkflowPhase};
use archive_client_api::ArchivedWorkflowsApi;
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use tracing::info;

use crate::output::{self, OutputFormat};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List archived workflows
    List(ListArgs),
    /// Show one archived workflow
    Get {
        /// Workflow UID
        uid: String,
    },
    /// Delete an archived workflow
    Delete {
        /// Workflow UID
        uid: String,
    },
    /// List label keys used by archived workflows
    LabelKeys,
    /// List the values seen for a label key
    LabelValues {
        /// Label key, sent unescaped
        key: String,
    },
}

/// Filters for `list`
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    #[arg(long, short)]
    pub namespace: Option<String>,

    /// Exact workflow name
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub name_prefix: Option<String>,

    /// Phase to include; repeat for several
    #[arg(long = "phase", value_parser = parse_phase)]
    pub phases: Vec<String>,

    /// Label selector token (`key=value` or `key`); repeat for several
    #[arg(long = "label", short = 'l')]
    pub labels: Vec<String>,

    /// Only workflows started after this RFC 3339 time
    #[arg(long, value_parser = parse_timestamp)]
    pub started_after: Option<DateTime<Utc>>,

    /// Only workflows started before this RFC 3339 time
    #[arg(long, value_parser = parse_timestamp)]
    pub started_before: Option<DateTime<Utc>>,

    /// Continuation token from a previous page
    #[arg(long = "continue")]
    pub continue_token: Option<String>,

    /// Page size
    #[arg(long)]
    pub limit: Option<u32>,
}

fn parse_phase(value: &str) -> Result<String, String> {
    value
        .parse::<WorkflowPhase>()
        .map(|phase| phase.to_string())
        .map_err(|e| e.to_string())
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {}", e))
}

impl ListArgs {
    pub fn to_filter(&self) -> ArchivedWorkflowFilter {
        ArchivedWorkflowFilter {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            name_prefix: self.name_prefix.clone(),
            phases: self.phases.clone(),
            labels: self.labels.clone(),
            min_started_at: self.started_after,
            max_started_at: self.started_before,
            pagination: Pagination::new(self.continue_token.clone(), self.limit),
        }
    }
}

impl Commands {
    /// Run the command against `api` and render its result
    pub async fn execute(
        &self,
        api: &dyn ArchivedWorkflowsApi,
        format: OutputFormat,
    ) -> Result<String> {
        match self {
            Commands::List(args) => {
                let list = api.list(&args.to_filter()).await?;
                output::render_workflow_list(&list, format)
            }
            Commands::Get { uid } => {
                let wf = api.get(uid).await?;
                output::render_workflow(&wf, format)
            }
            Commands::Delete { uid } => {
                api.delete(uid).await?;
                info!(uid = %uid, "deleted archived workflow");
                output::render_deleted(uid, format)
            }
            Commands::LabelKeys => {
                let labels = api.list_label_keys().await?;
                output::render_labels(&labels, format)
            }
            Commands::LabelValues { key } => {
                let labels = api.list_label_values(key).await?;
                output::render_labels(&labels, format)
            }
        }
    }
}
