//! Reference event set
//!
//! The eleven-event flight simulation log used by the CLI demo and the tests.
//! Kept apart from [`Event`] so the query code never depends on where its
//! data comes from.

use crate::source::EventSource;
use crate::types::{Event, EventKind, Result};

/// The reference events in insertion order (deliberately not time-sorted)
pub fn reference_events() -> Vec<Event> {
    vec![
        Event::new(5.0, EventKind::ActuatorCommand, "flaps", 15.0),
        Event::new(1.5, EventKind::ControlInput, "pilot", 75.0),
        Event::new(10.5, EventKind::ControlInput, "pilot", 85.0),
        Event::new(0.0, EventKind::Reading, "engine1", 100.0),
        Event::new(3.2, EventKind::Reading, "altimeter", 5000.0),
        Event::new(4.5, EventKind::ControlInput, "pilot", 80.0),
        Event::new(9.2, EventKind::Reading, "altimeter", 6000.0),
        Event::new(2.0, EventKind::ActuatorCommand, "rudder", 30.0),
        Event::new(6.0, EventKind::Reading, "engine2", 110.0),
        Event::new(7.5, EventKind::ControlInput, "pilot", 70.0),
        Event::new(8.0, EventKind::ActuatorCommand, "aileron", 20.0),
    ]
}

/// [`EventSource`] yielding [`reference_events`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceEvents;

impl EventSource for ReferenceEvents {
    fn name(&self) -> &str {
        "reference"
    }

    fn events(&self) -> Result<Vec<Event>> {
        Ok(reference_events())
    }
}
