//! Query operations over event sequences
//!
//! Every function here is a single pass (or a sort) over an explicit input
//! slice. None of them keep state between calls, and only [`sort_by_time`]
//! touches its input.

use crate::types::{Event, EventKind, SortOrder};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Ascending timestamp order with every NaN above every number
///
/// NaNs compare equal to each other whatever their sign or payload bits, and
/// `-0.0` ties with `0.0`.
fn ascending_timestamps(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Compare two events by timestamp in the requested direction
///
/// Descending flips the comparator rather than the sequence, which keeps ties
/// in their original relative order in both directions.
fn compare_timestamps(a: &Event, b: &Event, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => ascending_timestamps(a.timestamp(), b.timestamp()),
        SortOrder::Descending => ascending_timestamps(b.timestamp(), a.timestamp()),
    }
}

/// Sort events by timestamp in place (stable)
pub fn sort_by_time(events: &mut [Event], order: SortOrder) {
    if events.iter().any(|e| e.timestamp().is_nan()) {
        log::warn!("Sorting {} events containing NaN timestamps", events.len());
    }
    events.sort_by(|a, b| compare_timestamps(a, b, order));
    log::trace!("Sorted {} events ({})", events.len(), order);
}

/// Return a copy of the events sorted by timestamp, leaving the input untouched
///
/// Produces exactly the ordering [`sort_by_time`] would produce on the same input.
pub fn sorted_by_time(events: &[Event], order: SortOrder) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sort_by_time(&mut sorted, order);
    sorted
}

/// Events of the given kind, in their original relative order
pub fn filter_by_kind(events: &[Event], kind: EventKind) -> Vec<Event> {
    let filtered: Vec<Event> = events.iter().filter(|e| e.kind() == kind).cloned().collect();
    log::debug!("filter_by_kind({}): {} of {} events", kind, filtered.len(), events.len());
    filtered
}

/// Events whose source matches exactly (case-sensitive), in original relative order
pub fn filter_by_source(events: &[Event], source: &str) -> Vec<Event> {
    let filtered: Vec<Event> = events.iter().filter(|e| e.source() == source).cloned().collect();
    log::debug!("filter_by_source({}): {} of {} events", source, filtered.len(), events.len());
    filtered
}

/// Partition events by source
///
/// Only sources present in the input get an entry. Within each group the
/// events keep their original relative order.
pub fn group_by_source(events: &[Event]) -> HashMap<String, Vec<Event>> {
    let mut grouped: HashMap<String, Vec<Event>> = HashMap::new();
    for event in events {
        grouped
            .entry(event.source().to_string())
            .or_insert_with(Vec::new)
            .push(event.clone());
    }
    log::debug!("group_by_source: {} events in {} groups", events.len(), grouped.len());
    grouped
}

/// Partition events by kind (see [`group_by_source`])
pub fn group_by_kind(events: &[Event]) -> HashMap<EventKind, Vec<Event>> {
    let mut grouped: HashMap<EventKind, Vec<Event>> = HashMap::new();
    for event in events {
        grouped.entry(event.kind()).or_insert_with(Vec::new).push(event.clone());
    }
    log::debug!("group_by_kind: {} events in {} groups", events.len(), grouped.len());
    grouped
}

/// Number of events of each kind that occurs in the input
pub fn count_by_kind(events: &[Event]) -> HashMap<EventKind, usize> {
    let mut counts = HashMap::new();
    for event in events {
        *counts.entry(event.kind()).or_insert(0) += 1;
    }
    counts
}

/// Left fold over the events, adding `value` where the predicate holds
///
/// Seeded with `0.0`; the summation order is the sequence order.
pub fn sum_where<P>(events: &[Event], predicate: P) -> f64
where
    P: Fn(&Event) -> bool,
{
    events
        .iter()
        .fold(0.0, |sum, e| sum + if predicate(e) { e.value() } else { 0.0 })
}

/// Total `value` of events from the given source (`0.0` if none match)
pub fn sum_by_source(events: &[Event], source: &str) -> f64 {
    sum_where(events, |e| e.source() == source)
}

/// Total `value` of events of the given kind (`0.0` if none match)
pub fn sum_by_kind(events: &[Event], kind: EventKind) -> f64 {
    sum_where(events, |e| e.kind() == kind)
}

fn mean_where<P>(events: &[Event], predicate: P) -> Option<f64>
where
    P: Fn(&Event) -> bool,
{
    let (sum, count) = events
        .iter()
        .filter(|e| predicate(*e))
        .fold((0.0, 0usize), |(sum, count), e| (sum + e.value(), count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Mean `value` of events from the given source, `None` if none match
pub fn mean_by_source(events: &[Event], source: &str) -> Option<f64> {
    mean_where(events, |e| e.source() == source)
}

/// Mean `value` of events of the given kind, `None` if none match
pub fn mean_by_kind(events: &[Event], kind: EventKind) -> Option<f64> {
    mean_where(events, |e| e.kind() == kind)
}

/// First event, by position, whose timestamp is strictly greater than `threshold`
///
/// The scan follows the slice's current order. On unsorted input this is the
/// first qualifying event by position, not the earliest one in time; sort
/// ascending first to get the earliest event after `threshold`.
pub fn first_after(events: &[Event], threshold: f64) -> Option<&Event> {
    events.iter().find(|e| e.timestamp() > threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::reference_events;

    fn timestamps(events: &[Event]) -> Vec<f64> {
        events.iter().map(|e| e.timestamp()).collect()
    }

    #[test]
    fn test_sorted_by_time_leaves_input_untouched() {
        let events = reference_events();
        let sorted = sorted_by_time(&events, SortOrder::Ascending);

        assert_eq!(events, reference_events());
        assert_eq!(sorted[0].timestamp(), 0.0);
        assert_eq!(sorted[10].timestamp(), 10.5);
    }

    #[test]
    fn test_descending_sort() {
        let sorted = sorted_by_time(&reference_events(), SortOrder::Descending);
        assert_eq!(
            timestamps(&sorted),
            vec![10.5, 9.2, 8.0, 7.5, 6.0, 5.0, 4.5, 3.2, 2.0, 1.5, 0.0]
        );
    }

    #[test]
    fn test_in_place_matches_copy() {
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let mut events = reference_events();
            let copy = sorted_by_time(&events, order);
            sort_by_time(&mut events, order);
            assert_eq!(events, copy);
        }
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let events = vec![
            Event::new(1.0, EventKind::Reading, "a", 1.0),
            Event::new(0.5, EventKind::Reading, "b", 2.0),
            Event::new(1.0, EventKind::Reading, "c", 3.0),
            Event::new(1.0, EventKind::Reading, "d", 4.0),
        ];

        let ascending = sorted_by_time(&events, SortOrder::Ascending);
        let sources: Vec<&str> = ascending.iter().map(|e| e.source()).collect();
        assert_eq!(sources, vec!["b", "a", "c", "d"]);

        let descending = sorted_by_time(&events, SortOrder::Descending);
        let sources: Vec<&str> = descending.iter().map(|e| e.source()).collect();
        assert_eq!(sources, vec!["a", "c", "d", "b"]);
    }

    #[test]
    fn test_nan_sorts_last_ascending() {
        // 0.0 / 0.0 evaluated at runtime gives a NaN with the sign bit set on x86
        let runtime_nan = std::hint::black_box(0.0_f64) / std::hint::black_box(0.0_f64);
        let events = vec![
            Event::new(f64::NAN, EventKind::Reading, "positive", 0.0),
            Event::new(1.0, EventKind::Reading, "a", 0.0),
            Event::new(runtime_nan, EventKind::Reading, "runtime", 0.0),
            Event::new(-f64::NAN, EventKind::Reading, "negative", 0.0),
            Event::new(2.0, EventKind::Reading, "b", 0.0),
        ];

        let ascending = sorted_by_time(&events, SortOrder::Ascending);
        let sources: Vec<&str> = ascending.iter().map(|e| e.source()).collect();
        assert_eq!(sources, vec!["a", "b", "positive", "runtime", "negative"]);

        let descending = sorted_by_time(&events, SortOrder::Descending);
        let sources: Vec<&str> = descending.iter().map(|e| e.source()).collect();
        assert_eq!(sources, vec!["positive", "runtime", "negative", "b", "a"]);
    }

    #[test]
    fn test_signed_zero_ties_keep_order() {
        let events = vec![
            Event::new(0.0, EventKind::Reading, "first", 0.0),
            Event::new(-0.0, EventKind::Reading, "second", 0.0),
        ];
        let sorted = sorted_by_time(&events, SortOrder::Ascending);
        assert_eq!(sorted[0].source(), "first");
        assert_eq!(sorted[1].source(), "second");
    }

    #[test]
    fn test_filters() {
        let events = reference_events();

        let control = filter_by_kind(&events, EventKind::ControlInput);
        assert_eq!(control.len(), 4);
        assert_eq!(timestamps(&control), vec![1.5, 10.5, 4.5, 7.5]);

        let altimeter = filter_by_source(&events, "altimeter");
        assert_eq!(timestamps(&altimeter), vec![3.2, 9.2]);

        assert!(filter_by_source(&events, "Pilot").is_empty());
    }

    #[test]
    fn test_grouping() {
        let events = reference_events();

        let by_source = group_by_source(&events);
        assert_eq!(by_source.len(), 7);
        assert_eq!(by_source["altimeter"].len(), 2);
        assert_eq!(timestamps(&by_source["pilot"]), vec![1.5, 10.5, 4.5, 7.5]);
        assert!(!by_source.contains_key("tower"));

        let by_kind = group_by_kind(&events);
        assert_eq!(by_kind[&EventKind::Reading].len(), 4);
        assert_eq!(by_kind[&EventKind::ControlInput].len(), 4);
        assert_eq!(by_kind[&EventKind::ActuatorCommand].len(), 3);

        let counts = count_by_kind(&events);
        assert_eq!(counts[&EventKind::ActuatorCommand], 3);
    }

    #[test]
    fn test_group_omits_unseen_kinds() {
        let events = vec![Event::new(0.0, EventKind::Reading, "engine1", 1.0)];
        let by_kind = group_by_kind(&events);
        assert_eq!(by_kind.len(), 1);
        assert!(!by_kind.contains_key(&EventKind::ControlInput));
    }

    #[test]
    fn test_sums() {
        let events = reference_events();
        assert_eq!(sum_by_source(&events, "pilot"), 310.0);
        assert_eq!(sum_by_source(&events, "nobody"), 0.0);
        assert_eq!(sum_by_kind(&events, EventKind::ActuatorCommand), 65.0);
        assert_eq!(sum_by_kind(&events, EventKind::Reading), 11210.0);
    }

    #[test]
    fn test_means() {
        let events = reference_events();
        assert_eq!(mean_by_source(&events, "pilot"), Some(77.5));
        assert_eq!(mean_by_source(&events, "altimeter"), Some(5500.0));
        assert_eq!(mean_by_source(&events, "nobody"), None);
        assert_eq!(mean_by_kind(&[], EventKind::Reading), None);
    }

    #[test]
    fn test_empty_input() {
        let events: Vec<Event> = Vec::new();
        assert!(sorted_by_time(&events, SortOrder::Ascending).is_empty());
        assert!(filter_by_kind(&events, EventKind::Reading).is_empty());
        assert!(filter_by_source(&events, "pilot").is_empty());
        assert!(group_by_source(&events).is_empty());
        assert!(group_by_kind(&events).is_empty());
        assert_eq!(sum_by_source(&events, "pilot"), 0.0);
        assert_eq!(sum_by_kind(&events, EventKind::Reading), 0.0);
        assert!(first_after(&events, 0.0).is_none());
    }

    #[test]
    fn test_first_after_follows_position() {
        let events = reference_events();

        let found = first_after(&events, 6.0).unwrap();
        assert_eq!(found, &events[2]);
        assert_eq!(found.timestamp(), 10.5);

        let sorted = sorted_by_time(&events, SortOrder::Ascending);
        let found = first_after(&sorted, 6.0).unwrap();
        assert_eq!(found, &Event::new(7.5, EventKind::ControlInput, "pilot", 70.0));
    }

    #[test]
    fn test_first_after_is_strict() {
        let events = reference_events();
        let sorted = sorted_by_time(&events, SortOrder::Ascending);
        assert_eq!(first_after(&sorted, 5.0).unwrap().timestamp(), 6.0);
        assert!(first_after(&events, 10.5).is_none());
        assert!(first_after(&events, 100.0).is_none());
    }
}
