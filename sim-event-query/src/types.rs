//! Core types for the simulation event query library
//!
//! This module defines the event record, its closed set of kinds, the sort
//! order used by the query functions and the library error type. Events are
//! plain values: they carry no identity beyond their fields and are never
//! modified once constructed.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Absolute wall-clock timestamp
pub type Timestamp = DateTime<Utc>;

/// Result type for library operations
pub type Result<T> = std::result::Result<T, QueryError>;

/// Errors that can occur while building or configuring queries
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Unknown event kind: {0}")]
    UnknownKind(String),

    #[error("Unknown sort order: {0}")]
    UnknownSortOrder(String),

    #[error("Invalid query configuration: {0}")]
    InvalidConfig(String),

    #[error("Event source failed: {0}")]
    Source(String),
}

/// Category of a simulation event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A sensor reading (altitude, RPM, ...)
    Reading,
    /// An operator input (throttle, stick, ...)
    ControlInput,
    /// A command sent to an actuator (flaps, rudder, ...)
    ActuatorCommand,
}

impl EventKind {
    /// All kinds, in declaration order
    pub const ALL: [EventKind; 3] = [
        EventKind::Reading,
        EventKind::ControlInput,
        EventKind::ActuatorCommand,
    ];

    /// Short upper-case label used in reports
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Reading => "READING",
            EventKind::ControlInput => "CONTROL",
            EventKind::ActuatorCommand => "ACTUATOR",
        }
    }

    fn name(self) -> &'static str {
        match self {
            EventKind::Reading => "reading",
            EventKind::ControlInput => "control_input",
            EventKind::ActuatorCommand => "actuator_command",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for EventKind {
    type Err = QueryError;

    /// Accepts either the snake_case name or the report label, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        EventKind::ALL
            .into_iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(wanted) || kind.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| QueryError::UnknownKind(s.to_string()))
    }
}

/// Direction of a timestamp sort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ascending"),
            SortOrder::Descending => write!(f, "descending"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(QueryError::UnknownSortOrder(s.to_string())),
        }
    }
}

/// One discrete occurrence in a simulated system
///
/// The meaning of `value` depends on the kind and source (a percentage for a
/// throttle input, feet for an altimeter reading, ...) and is never checked.
/// Fields are only readable through accessors; an event cannot change after
/// [`Event::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    timestamp: f64,
    kind: EventKind,
    source: String,
    value: f64,
}

impl Event {
    /// Create a new event
    pub fn new(timestamp: f64, kind: EventKind, source: impl Into<String>, value: f64) -> Self {
        Self {
            timestamp,
            kind,
            source: source.into(),
            value,
        }
    }

    /// Seconds since simulation start (may tie with other events)
    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    /// What kind of event this is
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Originating component, e.g. "engine1" or "pilot"
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Context-dependent payload
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Place this event on the wall clock, given the instant the simulation started
    ///
    /// Returns `None` if the offset is not finite or falls outside the
    /// representable range.
    pub fn wall_clock(&self, start: Timestamp) -> Option<Timestamp> {
        if !self.timestamp.is_finite() {
            return None;
        }
        let nanos = self.timestamp * 1_000_000_000.0;
        if nanos.abs() > i64::MAX as f64 {
            return None;
        }
        start.checked_add_signed(Duration::nanoseconds(nanos.round() as i64))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t={}s kind={} source={} value={}",
            self.timestamp, self.kind, self.source, self.value
        )
    }
}
