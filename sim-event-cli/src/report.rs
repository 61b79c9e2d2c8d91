//! Report generation
//!
//! Renders a [`QueryOutcome`] as plain text or JSON. Nothing here queries
//! events; the outcome already holds every number that gets printed.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sim_event_query::{Event, QueryOutcome};
use std::fmt::{self, Write};

const RULE: &str = "----------------------------------------";

/// Render one event as a single line, with wall-clock time if a start instant is known
pub fn event_line(event: &Event, start: Option<DateTime<Utc>>) -> String {
    match start.and_then(|s| event.wall_clock(s)) {
        Some(at) => format!("{} [{}]", event, at.format("%Y-%m-%d %H:%M:%S%.3f UTC")),
        None => event.to_string(),
    }
}

/// Plain-text report: event listing, groups, totals and the threshold lookup
pub fn render_txt(outcome: &QueryOutcome, start: Option<DateTime<Utc>>) -> Result<String> {
    let mut out = String::new();
    write_txt(&mut out, outcome, start)?;
    Ok(out)
}

fn write_txt(out: &mut String, outcome: &QueryOutcome, start: Option<DateTime<Utc>>) -> fmt::Result {
    writeln!(out, "Events ({} of {})", outcome.selection.len(), outcome.total_events)?;
    writeln!(out, "{}", RULE)?;
    for event in &outcome.selection {
        writeln!(out, "{}", event_line(event, start))?;
    }
    writeln!(out, "{}", RULE)?;

    writeln!(out, "\nBy source:")?;
    for (source, summary) in &outcome.sources {
        let mean = summary
            .mean
            .map(|m| format!("{:.3}", m))
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "  {:<12} count={:<3} total={:.3} mean={}",
            source, summary.count, summary.total, mean
        )?;
    }

    writeln!(out, "\nBy kind:")?;
    for summary in &outcome.kinds {
        writeln!(
            out,
            "  {:<12} count={:<3} total={:.3}",
            summary.kind, summary.count, summary.total
        )?;
    }

    if let Some(threshold) = outcome.config.after {
        writeln!(out)?;
        match &outcome.first_after {
            Some(event) => writeln!(out, "First event after {}s: {}", threshold, event_line(event, start))?,
            None => writeln!(out, "First event after {}s: none", threshold)?,
        }
    }

    Ok(())
}

/// JSON report: the outcome serialized as-is
pub fn render_json(outcome: &QueryOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}
