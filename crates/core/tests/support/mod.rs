//! Shared test helpers for `chroney-core` integration tests.
//!
//! Fixtures for the patterns the scenario tests keep coming back to, so each
//! test can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

use chrono::NaiveDate;
use chroney_domain::{Pattern, PatternElement, ProjectedEvent};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// 6 on, 2 off, 5 on, 2 off (cycle length 15)
pub fn rotation_6_2_5_2() -> Pattern {
    Pattern::from(vec![
        PatternElement::placeholder(6, "Work", "Work block"),
        PatternElement::event(2, "Day Off", "First break"),
        PatternElement::placeholder(5, "Work", "Work block"),
        PatternElement::event(2, "Day Off", "Second break"),
    ])
}

/// One event day then six placeholder days (cycle length 7)
pub fn weekly() -> Pattern {
    Pattern::from(vec![
        PatternElement::event(1, "Rest", "Weekly rest day"),
        PatternElement::placeholder(6, "Work", ""),
    ])
}

pub fn placeholders_only() -> Pattern {
    Pattern::from(vec![
        PatternElement::placeholder(3, "Work", ""),
        PatternElement::placeholder(4, "Travel", ""),
    ])
}

/// Whole-day offsets of `events` from `start`
pub fn day_offsets(start: NaiveDate, events: &[ProjectedEvent]) -> Vec<i64> {
    events.iter().map(|event| (event.date - start).num_days()).collect()
}
