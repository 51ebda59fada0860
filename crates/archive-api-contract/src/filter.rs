//! Filter shapes accepted by the archive list endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Page request for list calls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Opaque continuation token from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
    /// Page size; `0` means no limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl Pagination {
    pub fn new(offset: Option<String>, limit: Option<u32>) -> Self {
        Self { offset, limit }
    }

    /// First page with the given size
    pub fn with_limit(limit: u32) -> Self {
        Self {
            offset: None,
            limit: Some(limit),
        }
    }
}

/// Criteria for listing archived workflows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedWorkflowFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_prefix: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub phases: Vec<String>,
    /// Raw `key=value` or `key` selector tokens
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pagination: Pagination,
}

impl ArchivedWorkflowFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_name_prefix(mut self, name_prefix: impl Into<String>) -> Self {
        self.name_prefix = Some(name_prefix.into());
        self
    }

    pub fn with_phases<I, S>(mut self, phases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phases = phases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_started_after(mut self, min_started_at: DateTime<Utc>) -> Self {
        self.min_started_at = Some(min_started_at);
        self
    }

    pub fn with_started_before(mut self, max_started_at: DateTime<Utc>) -> Self {
        self.max_started_at = Some(max_started_at);
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }
}
