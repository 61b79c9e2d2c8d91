//! Event sources
//!
//! An [`EventSource`] hands a finite, fully materialised sequence of events to
//! an [`EventLog`](crate::EventLog). The library only ships in-memory sources;
//! a log-file reader would implement the same trait and report unreadable
//! records through [`QueryError::Source`](crate::QueryError::Source).

use crate::types::{Event, Result};

/// Common trait for anything that can supply events to a query session
pub trait EventSource {
    /// Short name used in log output
    fn name(&self) -> &str;

    /// Produce the events, in the order the source holds them
    fn events(&self) -> Result<Vec<Event>>;
}

impl EventSource for Vec<Event> {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn events(&self) -> Result<Vec<Event>> {
        Ok(self.clone())
    }
}

impl EventSource for [Event] {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn events(&self) -> Result<Vec<Event>> {
        Ok(self.to_vec())
    }
}
