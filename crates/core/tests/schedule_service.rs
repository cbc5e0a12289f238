//! `ScheduleService` wiring with a pinned clock.

mod support;

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use chroney_common::testing::MockDateClock;
use chroney_common::ReferenceOffset;
use chroney_core::{OutputMode, ProjectionOutput, ScheduleRequest, ScheduleService};
use chroney_domain::{ChroneyError, Pattern, PatternElement};
use support::{date, rotation_6_2_5_2, weekly};

#[test]
fn omitted_start_date_defaults_to_today_at_reference() {
    // 03:00 UTC on Jan 8 is still Jan 7 at -07:00
    let clock = MockDateClock::at(Utc.with_ymd_and_hms(2024, 1, 8, 3, 0, 0).unwrap());
    let service = ScheduleService::new(Arc::new(clock), ReferenceOffset::default());

    let request = ScheduleRequest::new(weekly(), 0, 1).with_mode(OutputMode::Structured);
    let ProjectionOutput::Events(events) = service.generate(&request).unwrap() else {
        panic!("expected structured output");
    };

    assert_eq!(events[0].date, date(2024, 1, 7));
}

#[test]
fn other_reference_offsets_shift_today() {
    let instant = Utc.with_ymd_and_hms(2024, 1, 8, 3, 0, 0).unwrap();

    let utc = ScheduleService::new(Arc::new(MockDateClock::at(instant)), ReferenceOffset::utc());
    assert_eq!(utc.current_date_string(), "2024-01-08");

    let tokyo = ScheduleService::new(
        Arc::new(MockDateClock::at(instant)),
        "+09:00".parse::<ReferenceOffset>().unwrap(),
    );
    assert_eq!(tokyo.current_date_string(), "2024-01-08");

    let honolulu = ScheduleService::new(
        Arc::new(MockDateClock::at(instant)),
        "-10:00".parse::<ReferenceOffset>().unwrap(),
    );
    assert_eq!(honolulu.current_date_string(), "2024-01-07");
}

#[test]
fn explicit_start_date_ignores_the_clock() {
    let clock = MockDateClock::at_date(date(2030, 1, 1));
    let service = ScheduleService::new(Arc::new(clock.clone()), ReferenceOffset::default());
    let request = ScheduleRequest::new(rotation_6_2_5_2(), 0, 15).with_start_date("2024-01-01");

    let first = service.generate(&request).unwrap();
    clock.advance(Duration::days(400));
    let second = service.generate(&request).unwrap();

    assert_eq!(first, second);
}

#[test]
fn totals_and_anchor() {
    let service = ScheduleService::new(
        Arc::new(MockDateClock::at_date(date(2024, 1, 1))),
        ReferenceOffset::default(),
    );
    let pattern = rotation_6_2_5_2();

    assert_eq!(service.total_days_in_pattern(&pattern), 15);
    assert_eq!(service.total_days_in_pattern(&Pattern::default()), 0);
    assert_eq!(service.current_day_of_pattern(&pattern, 2, 3).unwrap(), 10);

    let err = service.current_day_of_pattern(&pattern, 9, 0).unwrap_err();
    assert!(matches!(err, ChroneyError::Validation { ref field, .. } if field == "index"));
}

#[test]
fn zero_span_is_rejected_through_the_service() {
    let service = ScheduleService::new(
        Arc::new(MockDateClock::at_date(date(2024, 1, 1))),
        ReferenceOffset::default(),
    );
    let pattern = Pattern::from(vec![
        PatternElement::event(2, "Off", ""),
        PatternElement::placeholder(0, "Nothing", ""),
    ]);

    let err = service.generate(&ScheduleRequest::new(pattern, 0, 10)).unwrap_err();
    assert_eq!(err.field(), Some("pattern[1].span"));
}

#[test]
fn malformed_start_date_is_reported() {
    let service = ScheduleService::new(
        Arc::new(MockDateClock::at_date(date(2024, 1, 1))),
        ReferenceOffset::default(),
    );
    let request = ScheduleRequest::new(weekly(), 0, 7).with_start_date("2024-13-40");

    let err = service.generate(&request).unwrap_err();
    assert!(matches!(
        err,
        ChroneyError::MalformedInput { ref field, ref value, .. }
            if field == "startDate" && value == "2024-13-40"
    ));
}
