//! Query configuration types
//!
//! A [`QueryConfig`] describes one pass of the query pipeline run by
//! [`EventLog::run`](crate::EventLog::run): optional sort, optional kind and
//! source filters, and an optional time threshold.

use crate::types::{Event, EventKind, QueryError, Result, SortOrder};
use serde::{Deserialize, Serialize};

/// Configuration for a query pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Whether to sort by timestamp before filtering (false = keep source order)
    #[serde(default = "default_true")]
    pub sort: bool,

    /// Sort direction, used when `sort` is set
    #[serde(default)]
    pub order: SortOrder,

    /// Optional: only keep events of this kind
    #[serde(default)]
    pub kind: Option<EventKind>,

    /// Optional: only keep events from this source (exact match)
    #[serde(default)]
    pub source: Option<String>,

    /// Optional: report the first event strictly after this many seconds
    #[serde(default)]
    pub after: Option<f64>,
}

fn default_true() -> bool {
    true
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            sort: true,
            order: SortOrder::default(),
            kind: None,
            source: None,
            after: None,
        }
    }
}

impl QueryConfig {
    /// Create a new query configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: enable or disable sorting
    pub fn with_sorting(mut self, enabled: bool) -> Self {
        self.sort = enabled;
        self
    }

    /// Builder method: set sort direction
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Builder method: set kind filter
    pub fn with_kind(mut self, kind: EventKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Builder method: set source filter
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Builder method: set time threshold
    pub fn with_threshold(mut self, after: f64) -> Self {
        self.after = Some(after);
        self
    }

    /// Reject configurations the pipeline cannot answer meaningfully
    pub fn validate(&self) -> Result<()> {
        if let Some(after) = self.after {
            if !after.is_finite() {
                return Err(QueryError::InvalidConfig(format!(
                    "threshold must be finite, got {}",
                    after
                )));
            }
        }
        Ok(())
    }

    /// Check if an event passes the kind filter
    pub fn matches_kind(&self, event: &Event) -> bool {
        match self.kind {
            Some(kind) => event.kind() == kind,
            None => true,
        }
    }

    /// Check if an event passes the source filter
    pub fn matches_source(&self, event: &Event) -> bool {
        match &self.source {
            Some(source) => event.source() == source.as_str(),
            None => true,
        }
    }

    /// Check if an event should be kept based on filters
    pub fn matches(&self, event: &Event) -> bool {
        self.matches_kind(event) && self.matches_source(event)
    }
}
