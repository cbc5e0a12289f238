//! Mock date clock for deterministic testing
//!
//! Lets tests pin "today" and move it manually instead of depending on the
//! wall clock.

// Test utility: panics on a poisoned mutex so tests fail early
#![allow(clippy::missing_panics_doc)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::time::DateClock;

/// Mock clock for deterministic testing
///
/// Clones share the same instant, so advancing one advances all of them.
#[derive(Debug, Clone)]
pub struct MockDateClock {
    instant: Arc<Mutex<DateTime<Utc>>>,
}

impl MockDateClock {
    /// Create a clock fixed at `instant`
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self { instant: Arc::new(Mutex::new(instant)) }
    }

    /// Create a clock fixed at noon UTC on `date`
    ///
    /// Noon keeps the civil date stable for every offset within ±11:59.
    pub fn at_date(date: NaiveDate) -> Self {
        let noon = date.and_hms_opt(12, 0, 0).unwrap_or_default();
        Self::at(Utc.from_utc_datetime(&noon))
    }

    /// Move the clock forward (or backward, for a negative duration)
    pub fn advance(&self, by: Duration) {
        let mut instant = self.instant.lock().expect("mutex poisoned");
        *instant += by;
    }

    /// Replace the current instant
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.instant.lock().expect("mutex poisoned") = instant;
    }
}

impl DateClock for MockDateClock {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.lock().expect("mutex poisoned")
    }
}
