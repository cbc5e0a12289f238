//! Event projector
//!
//! Walks `total_days` civil days forward from a start date, pairing each day
//! with its slot in the cycle and keeping the event days.
//!
//! Both output modes share one selection path and always wrap the cyclic
//! index, so horizons longer than the remaining cycle never read past the
//! end of the expansion.

use chrono::{Days, NaiveDate};
use chroney_domain::{ChroneyError, Pattern, ProjectedEvent, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::render::render_text;
use super::slots::DaySlots;

/// How projected events are handed back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-readable text block
    Text,
    /// The event list, for calendar-file encoders
    Structured,
}

impl OutputMode {
    pub const fn from_text_only(text_only: bool) -> Self {
        if text_only {
            Self::Text
        } else {
            Self::Structured
        }
    }
}

/// Result of a projection in the requested mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionOutput {
    Text(String),
    Events(Vec<ProjectedEvent>),
}

/// Project the event days of `pattern` onto the calendar
///
/// `current_day_of_pattern` is the slot of `start_date`. Any value is
/// accepted; it is reduced with a true modulo, so anchors below zero or
/// beyond one cycle land on the expected slot.
///
/// # Errors
/// - `Validation` on `pattern[i].span` when an element spans zero days
/// - `Validation` on `cycleLength` when `cycle_length` does not match the
///   pattern
/// - `MalformedInput` on `totalDays` when the horizon runs past the last
///   representable date
pub fn project_events(
    pattern: &Pattern,
    start_date: NaiveDate,
    cycle_length: u64,
    current_day_of_pattern: i64,
    total_days: u32,
) -> Result<Vec<ProjectedEvent>> {
    pattern.ensure_positive_spans()?;

    if pattern.is_empty() || total_days == 0 {
        return Ok(Vec::new());
    }

    let slots = DaySlots::expand(pattern);
    let cycle = i64::try_from(cycle_length)
        .ok()
        .filter(|_| slots.len() == cycle_length)
        .ok_or_else(|| {
            ChroneyError::validation(
                "cycleLength",
                format!(
                    "cycle length {cycle_length} does not match the {} days of the pattern",
                    slots.len()
                ),
            )
        })?;

    // rem_euclid keeps negative anchors in [0, cycle)
    let origin = u64::try_from(current_day_of_pattern.rem_euclid(cycle)).map_err(|_| {
        ChroneyError::validation("currentDayOfPattern", "anchor does not fit the cycle")
    })?;

    if start_date.checked_add_days(Days::new(u64::from(total_days - 1))).is_none() {
        return Err(ChroneyError::malformed(
            "totalDays",
            total_days.to_string(),
            format!("horizon from {start_date} runs past the last representable date"),
        ));
    }

    let calendar = std::iter::successors(Some(start_date), |day| day.succ_opt());
    let events: Vec<ProjectedEvent> = calendar
        .zip(slots.cycle_from(origin))
        .take(total_days as usize)
        .filter(|(_, element)| element.is_event())
        .map(|(date, element)| {
            ProjectedEvent::new(date, element.title.clone(), element.description.clone())
        })
        .collect();

    debug!(
        start_date = %start_date,
        cycle_length,
        origin,
        total_days,
        event_count = events.len(),
        "Projected pattern onto calendar"
    );

    Ok(events)
}

/// Project and render in one step
///
/// # Errors
/// Same as [`project_events`].
pub fn project(
    pattern: &Pattern,
    start_date: NaiveDate,
    cycle_length: u64,
    current_day_of_pattern: i64,
    total_days: u32,
    mode: OutputMode,
) -> Result<ProjectionOutput> {
    let events =
        project_events(pattern, start_date, cycle_length, current_day_of_pattern, total_days)?;

    Ok(match mode {
        OutputMode::Text => ProjectionOutput::Text(render_text(&events)),
        OutputMode::Structured => ProjectionOutput::Events(events),
    })
}
