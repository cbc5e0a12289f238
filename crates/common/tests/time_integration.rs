//! Integration tests for the `time` module.
//!
//! Covers the reference offset, the clock abstraction and date formatting
//! together, the way the projection service consumes them.

#![cfg(feature = "test-utils")]

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use chroney_common::testing::MockDateClock;
use chroney_common::time::{
    format_iso_date, format_long_date, DateClock, ReferenceOffset, SystemDateClock,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// "Today" depends on the configured offset, never on the host zone.
#[test]
fn test_today_follows_reference_offset() {
    // 2024-07-01 05:00 UTC
    let clock = MockDateClock::at(Utc.with_ymd_and_hms(2024, 7, 1, 5, 0, 0).unwrap());

    let mountain = ReferenceOffset::default();
    let utc = ReferenceOffset::utc();
    let tokyo: ReferenceOffset = "+09:00".parse().unwrap();

    assert_eq!(format_iso_date(clock.today_in(mountain)), "2024-06-30");
    assert_eq!(format_iso_date(clock.today_in(utc)), "2024-07-01");
    assert_eq!(format_iso_date(clock.today_in(tokyo)), "2024-07-01");
}

/// Advancing the mock clock across a month boundary changes the long form.
#[test]
fn test_mock_clock_advances_across_month_end() {
    let clock = MockDateClock::at_date(date(2024, 1, 31));
    let offset = ReferenceOffset::default();

    assert_eq!(format_long_date(clock.today_in(offset)), "Wednesday, January 31, 2024");

    clock.advance(Duration::days(1));
    assert_eq!(format_long_date(clock.today_in(offset)), "Thursday, February 1, 2024");
}

/// The system clock can be used through a trait object.
#[test]
fn test_system_clock_behind_trait_object() {
    let clock: Box<dyn DateClock> = Box::new(SystemDateClock);
    let today = clock.today_in(ReferenceOffset::utc());
    let formatted = format_iso_date(today);

    assert_eq!(formatted.len(), 10);
    assert_eq!(NaiveDate::parse_from_str(&formatted, "%Y-%m-%d").unwrap(), today);
}

/// Offsets survive a display/parse cycle in their canonical form.
#[test]
fn test_offset_canonical_form() {
    for raw in ["-07:00", "+00:00", "+05:45", "-11:30"] {
        let parsed: ReferenceOffset = raw.parse().unwrap();
        assert_eq!(parsed.to_string(), raw);
    }
    assert_eq!("Z".parse::<ReferenceOffset>().unwrap().to_string(), "+00:00");
}
