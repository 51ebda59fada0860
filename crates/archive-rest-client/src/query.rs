//! Query-string construction for archive list calls
//!
//! Selector values are inserted as given. Nothing here percent-encodes; the
//! transport's URL handling is responsible for that.

use archive_api_contract::{ArchivedWorkflowFilter, PHASE_LABEL};
use chrono::{DateTime, SecondsFormat, Utc};

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// `2023-01-01T00:00:00.000Z`
fn iso_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Comma-joined field selector, empty when no field criteria are set
pub fn field_selector(filter: &ArchivedWorkflowFilter) -> String {
    let mut clauses = Vec::new();

    if let Some(namespace) = present(&filter.namespace) {
        clauses.push(format!("metadata.namespace={}", namespace));
    }
    if let Some(name) = present(&filter.name) {
        clauses.push(format!("metadata.name={}", name));
    }
    if let Some(min) = &filter.min_started_at {
        clauses.push(format!("spec.startedAt>{}", iso_timestamp(min)));
    }
    if let Some(max) = &filter.max_started_at {
        clauses.push(format!("spec.startedAt<{}", iso_timestamp(max)));
    }

    clauses.join(",")
}

/// Phase set-membership clause followed by the raw label tokens
pub fn label_selector(phases: &[String], labels: &[String]) -> String {
    let mut clauses = Vec::new();

    if !phases.is_empty() {
        clauses.push(format!("{} in ({})", PHASE_LABEL, phases.join(",")));
    }
    if !labels.is_empty() {
        clauses.push(labels.join(","));
    }

    clauses.join(",")
}

/// Ordered `key=value` parameters for a list call
pub fn query_params(filter: &ArchivedWorkflowFilter) -> Vec<String> {
    let mut params = Vec::new();

    let fields = field_selector(filter);
    if !fields.is_empty() {
        params.push(format!("listOptions.fieldSelector={}", fields));
    }

    let labels = label_selector(&filter.phases, &filter.labels);
    if !labels.is_empty() {
        params.push(format!("listOptions.labelSelector={}", labels));
    }

    if let Some(offset) = present(&filter.pagination.offset) {
        params.push(format!("listOptions.continue={}", offset));
    }
    // A zero limit means "no limit" to the server, so it is not sent
    if let Some(limit) = filter.pagination.limit.filter(|l| *l > 0) {
        params.push(format!("listOptions.limit={}", limit));
    }

    if let Some(prefix) = present(&filter.name_prefix) {
        params.push(format!("namePrefix={}", prefix));
    }

    params
}

/// Append the filter's parameters to `base`, omitting `?` when there are none
pub fn with_query(base: &str, filter: &ArchivedWorkflowFilter) -> String {
    let params = query_params(filter);
    if params.is_empty() {
        base.to_string()
    } else {
        format!("{}?{}", base, params.join("&"))
    }
}
