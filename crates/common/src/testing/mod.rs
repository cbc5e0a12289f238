//! Testing utilities and helpers
//!
//! - **[`time`]**: a settable [`DateClock`](crate::time::DateClock) for
//!   deterministic "today"
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{Duration, NaiveDate};
//! use chroney_common::testing::MockDateClock;
//! use chroney_common::time::{DateClock, ReferenceOffset};
//!
//! let clock = MockDateClock::at_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
//! clock.advance(Duration::days(2));
//! assert_eq!(
//!     clock.today_in(ReferenceOffset::utc()),
//!     NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
//! );
//! ```

pub mod time;

// Re-export commonly used items
pub use time::MockDateClock;
