//! Seeded event generators shared by the integration tests

#![allow(dead_code)]

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sim_event_query::{Event, EventKind};

const SOURCES: [&str; 5] = ["engine1", "engine2", "pilot", "altimeter", "rudder"];

/// Generate `count` events with coarse timestamps so ties are common
pub fn generate_events(rng: &mut impl Rng, count: usize) -> Vec<Event> {
    (0..count)
        .map(|_| {
            let timestamp = rng.gen_range(0..20) as f64 * 0.5;
            let kind = EventKind::ALL[rng.gen_range(0..EventKind::ALL.len())];
            let source = SOURCES[rng.gen_range(0..SOURCES.len())];
            let value = rng.gen_range(0..1000) as f64;
            Event::new(timestamp, kind, source, value)
        })
        .collect()
}

/// A handful of independent event sets, including the empty one
pub fn sample_sets() -> Vec<Vec<Event>> {
    (0..24u64)
        .map(|seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let len = (seed as usize * 7) % 40;
            generate_events(&mut rng, len)
        })
        .collect()
}

/// Order-insensitive view of a sequence, for multiset comparisons
pub fn multiset(events: &[Event]) -> Vec<String> {
    let mut keys: Vec<String> = events
        .iter()
        .map(|e| format!("{:?}|{}|{:?}|{}", e.timestamp(), e.source(), e.kind(), e.value()))
        .collect();
    keys.sort();
    keys
}
