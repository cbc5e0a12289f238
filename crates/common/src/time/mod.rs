//! Civil-date utilities
//!
//! This module provides the date handling shared by the projection core:
//! - **[`offset`]**: the single fixed reference UTC offset
//! - **[`clock`]**: the injectable "what day is it" abstraction
//! - **[`format`]**: ISO and long-form date rendering
//!
//! All arithmetic downstream of this module happens on
//! [`chrono::NaiveDate`]; the host's local timezone is never consulted.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use chroney_common::time::{format_long_date, ReferenceOffset};
//!
//! let offset: ReferenceOffset = "-07:00".parse().unwrap();
//! let instant = Utc.with_ymd_and_hms(2024, 1, 2, 3, 0, 0).unwrap();
//!
//! // 03:00 UTC is still the previous evening at UTC-07:00
//! assert_eq!(offset.civil_date(instant), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
//! assert_eq!(format_long_date(offset.civil_date(instant)), "Monday, January 1, 2024");
//! ```

pub mod clock;
pub mod format;
pub mod offset;

// Re-export commonly used items
pub use clock::{DateClock, SystemDateClock};
pub use format::{format_iso_date, format_long_date};
pub use offset::ReferenceOffset;
