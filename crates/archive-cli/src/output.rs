//! Rendering of command results

use anyhow::Result;
use archive_api_contract::{Labels, Workflow, WorkflowList};
use chrono::{DateTime, SecondsFormat, Utc};
use clap::ValueEnum;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON as returned by the server
    Json,
    /// Tab-separated rows
    Wide,
}

const WORKFLOW_HEADER: &str = "NAMESPACE\tNAME\tUID\tPHASE\tSTARTED\tFINISHED";

fn timestamp(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| "-".to_string())
}

fn workflow_row(wf: &Workflow) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        wf.metadata.namespace,
        wf.metadata.name,
        wf.metadata.uid,
        wf.phase(),
        timestamp(wf.status.started_at),
        timestamp(wf.status.finished_at),
    )
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn render_workflow_list(list: &WorkflowList, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(list),
        OutputFormat::Wide => {
            let mut lines = vec![WORKFLOW_HEADER.to_string()];
            lines.extend(list.items.iter().map(workflow_row));
            if let Some(next) = list.next_offset() {
                lines.push(format!("# more results: --continue {}", next));
            }
            Ok(lines.join("\n"))
        }
    }
}

pub fn render_workflow(wf: &Workflow, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(wf),
        OutputFormat::Wide => Ok(format!("{}\n{}", WORKFLOW_HEADER, workflow_row(wf))),
    }
}

pub fn render_labels(labels: &Labels, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(labels),
        OutputFormat::Wide => Ok(labels.items.join("\n")),
    }
}

pub fn render_deleted(uid: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&json!({ "deleted": uid })),
        OutputFormat::Wide => Ok(format!("deleted {}", uid)),
    }
}
