//! Clock abstraction for civil dates
//!
//! "Today" is the only ambient input the projection core has. Reading it
//! through [`DateClock`] keeps every other operation a pure function of its
//! arguments and lets tests pin the date.

use chrono::{DateTime, NaiveDate, Utc};

use super::offset::ReferenceOffset;

/// Source of the current instant
pub trait DateClock: Send + Sync {
    /// Current wall-clock instant in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// Today's civil date at the given reference offset.
    fn today_in(&self, offset: ReferenceOffset) -> NaiveDate {
        offset.civil_date(self.now())
    }
}

/// Real system clock implementation
///
/// Use this in production code.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDateClock;

impl DateClock for SystemDateClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
