//! Query session API
//!
//! [`EventLog`] owns the events for one query session and is the entry point
//! for running queries. It wraps the free functions in [`crate::query`] and
//! adds [`EventLog::run`], which applies a whole [`QueryConfig`] at once.

use crate::config::QueryConfig;
use crate::query;
use crate::source::EventSource;
use crate::types::{Event, EventKind, Result, SortOrder};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// An ordered, owned sequence of events plus read-only queries over it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new log from already materialised events
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Load all events from a source
    ///
    /// # Example
    /// ```
    /// use sim_event_query::{fixtures::ReferenceEvents, EventLog};
    ///
    /// let log = EventLog::from_source(&ReferenceEvents).unwrap();
    /// assert_eq!(log.len(), 11);
    /// ```
    pub fn from_source<S: EventSource + ?Sized>(source: &S) -> Result<Self> {
        let events = source.events()?;
        log::info!("Loaded {} events from {}", events.len(), source.name());
        Ok(Self::new(events))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// The events in their current order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Sort the owned events in place; the only mutating query
    pub fn sort_by_time(&mut self, order: SortOrder) {
        query::sort_by_time(&mut self.events, order);
    }

    pub fn sorted_by_time(&self, order: SortOrder) -> Vec<Event> {
        query::sorted_by_time(&self.events, order)
    }

    pub fn filter_by_kind(&self, kind: EventKind) -> Vec<Event> {
        query::filter_by_kind(&self.events, kind)
    }

    pub fn filter_by_source(&self, source: &str) -> Vec<Event> {
        query::filter_by_source(&self.events, source)
    }

    pub fn group_by_source(&self) -> HashMap<String, Vec<Event>> {
        query::group_by_source(&self.events)
    }

    pub fn group_by_kind(&self) -> HashMap<EventKind, Vec<Event>> {
        query::group_by_kind(&self.events)
    }

    pub fn count_by_kind(&self) -> HashMap<EventKind, usize> {
        query::count_by_kind(&self.events)
    }

    pub fn sum_by_source(&self, source: &str) -> f64 {
        query::sum_by_source(&self.events, source)
    }

    pub fn sum_by_kind(&self, kind: EventKind) -> f64 {
        query::sum_by_kind(&self.events, kind)
    }

    pub fn mean_by_source(&self, source: &str) -> Option<f64> {
        query::mean_by_source(&self.events, source)
    }

    pub fn mean_by_kind(&self, kind: EventKind) -> Option<f64> {
        query::mean_by_kind(&self.events, kind)
    }

    /// First event by position after `threshold` (see [`query::first_after`])
    pub fn first_after(&self, threshold: f64) -> Option<&Event> {
        query::first_after(&self.events, threshold)
    }

    /// Run a configured query pipeline without touching the owned events
    ///
    /// Steps: sort a copy (if enabled), keep the events matching the kind and
    /// source filters, then summarise the selection. The first-after lookup
    /// scans the selection in its final order.
    pub fn run(&self, config: &QueryConfig) -> Result<QueryOutcome> {
        config.validate()?;

        let ordered = if config.sort {
            self.sorted_by_time(config.order)
        } else {
            self.events.clone()
        };

        let selection: Vec<Event> = ordered.into_iter().filter(|e| config.matches(e)).collect();
        log::debug!("Query selected {} of {} events", selection.len(), self.len());

        let source_groups = query::group_by_source(&selection);
        let sources: BTreeMap<String, SourceSummary> = source_groups
            .iter()
            .map(|(source, group)| {
                let summary = SourceSummary {
                    count: group.len(),
                    total: query::sum_by_source(group, source),
                    mean: query::mean_by_source(group, source),
                };
                (source.clone(), summary)
            })
            .collect();

        let counts = query::count_by_kind(&selection);
        let kinds: Vec<KindSummary> = EventKind::ALL
            .into_iter()
            .filter_map(|kind| {
                counts.get(&kind).map(|&count| KindSummary {
                    kind,
                    count,
                    total: query::sum_by_kind(&selection, kind),
                })
            })
            .collect();

        let first_after = config
            .after
            .and_then(|threshold| query::first_after(&selection, threshold))
            .cloned();

        Ok(QueryOutcome {
            config: config.clone(),
            total_events: self.len(),
            selection,
            sources,
            kinds,
            first_after,
        })
    }
}

impl From<Vec<Event>> for EventLog {
    fn from(events: Vec<Event>) -> Self {
        Self::new(events)
    }
}

/// Per-source aggregate within a query outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceSummary {
    pub count: usize,
    pub total: f64,
    pub mean: Option<f64>,
}

/// Per-kind aggregate within a query outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindSummary {
    pub kind: EventKind,
    pub count: usize,
    pub total: f64,
}

/// Everything [`EventLog::run`] computed for one configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOutcome {
    /// The configuration that produced this outcome
    pub config: QueryConfig,
    /// Number of events in the log before filtering
    pub total_events: usize,
    /// Matching events, in pipeline order
    pub selection: Vec<Event>,
    /// Aggregates keyed by source, in key order
    pub sources: BTreeMap<String, SourceSummary>,
    /// Aggregates for each kind present in the selection, in declaration order
    pub kinds: Vec<KindSummary>,
    /// First selected event after the configured threshold, if one was asked for and found
    pub first_after: Option<Event>,
}
