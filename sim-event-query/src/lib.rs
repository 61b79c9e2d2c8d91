//! Simulation Event Query Library
//!
//! A small, stateless library for querying in-memory sequences of timestamped
//! simulation events (sensor readings, control inputs, actuator commands).
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on querying:
//! - Sorts events by timestamp (stable, copy or in place)
//! - Filters and groups events by kind or source
//! - Accumulates event values (sums, means) for a kind or source
//! - Finds the first event after a time threshold, by position
//!
//! The library does NOT:
//! - Read log files or streams
//! - Validate event payloads
//! - Render reports
//!
//! Report rendering and configuration files live in the application layer
//! (sim-event-cli).
//!
//! # Example Usage
//!
//! ```
//! use sim_event_query::{fixtures::ReferenceEvents, EventKind, EventLog, SortOrder};
//!
//! let log = EventLog::from_source(&ReferenceEvents).unwrap();
//!
//! assert_eq!(log.sum_by_source("pilot"), 310.0);
//! assert_eq!(log.filter_by_kind(EventKind::ControlInput).len(), 4);
//!
//! // "First after" follows the current order; sort first for the earliest one
//! let sorted = log.sorted_by_time(SortOrder::Ascending);
//! let next = sim_event_query::query::first_after(&sorted, 6.0).unwrap();
//! assert_eq!(next.timestamp(), 7.5);
//! ```

// Public modules
pub mod config;
pub mod fixtures;
pub mod query;
pub mod session;
pub mod source;
pub mod types;

// Re-export main types for convenience
pub use config::QueryConfig;
pub use session::{EventLog, KindSummary, QueryOutcome, SourceSummary};
pub use source::EventSource;
pub use types::{Event, EventKind, QueryError, Result, SortOrder, Timestamp};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: an empty log answers every query with an empty result
        let log = EventLog::default();
        assert!(log.is_empty());
        assert_eq!(log.sum_by_kind(EventKind::Reading), 0.0);
        assert!(log.first_after(0.0).is_none());
    }
}
