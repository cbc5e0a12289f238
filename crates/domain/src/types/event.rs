//! Projection output

use chrono::{Datelike, NaiveDate};
use chroney_common::civil_date_triple;
use serde::{Deserialize, Serialize};

use crate::constants::EVENT_DURATION_DAYS;

/// Length of a projected event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDuration {
    pub days: u32,
}

impl Default for EventDuration {
    fn default() -> Self {
        Self { days: EVENT_DURATION_DAYS }
    }
}

/// One all-day calendar event produced by projection
///
/// Serializes in the attribute shape calendar-file encoders consume:
/// `{"start": [year, month, day], "title", "description", "duration": {"days": 1}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedEvent {
    #[serde(rename = "start", with = "civil_date_triple")]
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    pub duration: EventDuration,
}

impl ProjectedEvent {
    /// Create a one-day event on `date`
    pub fn new<T: Into<String>, D: Into<String>>(date: NaiveDate, title: T, description: D) -> Self {
        Self {
            date,
            title: title.into(),
            description: description.into(),
            duration: EventDuration::default(),
        }
    }

    /// Start date as a `(year, month, day)` triple
    pub fn start(&self) -> (i32, u32, u32) {
        (self.date.year(), self.date.month(), self.date.day())
    }
}
