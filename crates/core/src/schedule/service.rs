//! Schedule service - core business logic

use std::sync::Arc;

use chrono::NaiveDate;
use chroney_common::{format_iso_date, DateClock, ReferenceOffset};
use chroney_domain::constants::ISO_DATE_FORMAT;
use chroney_domain::{ChroneyError, Config, Pattern, Result};
use tracing::{debug, info};

use crate::projection::{anchor, cycle_length, project, OutputMode, ProjectionOutput};

/// Everything needed to generate one schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRequest {
    pub pattern: Pattern,
    /// ISO `YYYY-MM-DD`; today at the reference offset when absent
    pub start_date: Option<String>,
    pub current_day_of_pattern: i64,
    pub total_days: u32,
    /// Falls back to the service default when absent
    pub mode: Option<OutputMode>,
}

impl ScheduleRequest {
    pub fn new(pattern: Pattern, current_day_of_pattern: i64, total_days: u32) -> Self {
        Self { pattern, start_date: None, current_day_of_pattern, total_days, mode: None }
    }

    pub fn with_start_date<S: Into<String>>(mut self, start_date: S) -> Self {
        self.start_date = Some(start_date.into());
        self
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

/// Schedule service
pub struct ScheduleService {
    clock: Arc<dyn DateClock>,
    reference: ReferenceOffset,
    default_mode: OutputMode,
}

impl ScheduleService {
    /// Create a service reading "today" from `clock` at `reference`
    pub fn new(clock: Arc<dyn DateClock>, reference: ReferenceOffset) -> Self {
        Self { clock, reference, default_mode: OutputMode::Text }
    }

    /// Create a service from application configuration
    pub fn from_config(clock: Arc<dyn DateClock>, config: &Config) -> Self {
        Self::new(clock, config.reference.utc_offset)
            .with_default_mode(OutputMode::from_text_only(config.projection.default_text_only))
    }

    /// Output mode used when a request does not name one
    pub fn with_default_mode(mut self, mode: OutputMode) -> Self {
        self.default_mode = mode;
        self
    }

    pub fn reference(&self) -> ReferenceOffset {
        self.reference
    }

    pub fn default_mode(&self) -> OutputMode {
        self.default_mode
    }

    pub fn total_days_in_pattern(&self, pattern: &Pattern) -> u64 {
        cycle_length(pattern)
    }

    /// Linear position of "`offset` days into element `index`"
    ///
    /// # Errors
    /// See [`anchor`].
    pub fn current_day_of_pattern(
        &self,
        pattern: &Pattern,
        index: usize,
        offset: i64,
    ) -> Result<i64> {
        anchor(pattern, index, offset)
    }

    /// Today's civil date at the reference offset
    pub fn current_date(&self) -> NaiveDate {
        self.clock.today_in(self.reference)
    }

    /// Today as `YYYY-MM-DD`
    pub fn current_date_string(&self) -> String {
        format_iso_date(self.current_date())
    }

    /// Parse an explicit start date, or read today from the clock
    ///
    /// A blank string counts as absent.
    ///
    /// # Errors
    /// Returns `MalformedInput` on `startDate` when the value is not a valid
    /// `YYYY-MM-DD` date.
    pub fn resolve_start_date(&self, raw: Option<&str>) -> Result<NaiveDate> {
        match raw.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).map_err(|err| {
                ChroneyError::malformed("startDate", value, format!("expected YYYY-MM-DD: {err}"))
            }),
            None => {
                let today = self.current_date();
                debug!(today = %today, reference = %self.reference, "Defaulted start date to today");
                Ok(today)
            }
        }
    }

    /// Generate the schedule described by `request`
    ///
    /// The clock is read at most once, while resolving the start date.
    ///
    /// # Errors
    /// Propagates start-date parsing and projection errors.
    pub fn generate(&self, request: &ScheduleRequest) -> Result<ProjectionOutput> {
        let start_date = self.resolve_start_date(request.start_date.as_deref())?;
        let cycle = cycle_length(&request.pattern);
        let mode = request.mode.unwrap_or(self.default_mode);

        let output = project(
            &request.pattern,
            start_date,
            cycle,
            request.current_day_of_pattern,
            request.total_days,
            mode,
        )?;

        info!(
            start_date = %start_date,
            cycle_length = cycle,
            total_days = request.total_days,
            mode = ?mode,
            "Generated schedule"
        );

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use chroney_common::testing::MockDateClock;
    use chroney_domain::PatternElement;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service_at(clock: MockDateClock) -> ScheduleService {
        ScheduleService::new(Arc::new(clock), ReferenceOffset::default())
    }

    #[test]
    fn test_current_date_uses_reference_offset() {
        // 05:30 UTC on March 1 is still February 29 at UTC-07:00
        let clock = MockDateClock::at(Utc.with_ymd_and_hms(2024, 3, 1, 5, 30, 0).unwrap());
        let service = service_at(clock.clone());

        assert_eq!(service.current_date_string(), "2024-02-29");

        clock.advance(Duration::hours(2));
        assert_eq!(service.current_date_string(), "2024-03-01");
    }

    #[test]
    fn test_resolve_start_date() {
        let service = service_at(MockDateClock::at_date(date(2024, 6, 15)));

        assert_eq!(service.resolve_start_date(Some("2024-01-01")).unwrap(), date(2024, 1, 1));
        assert_eq!(service.resolve_start_date(None).unwrap(), date(2024, 6, 15));
        assert_eq!(service.resolve_start_date(Some("  ")).unwrap(), date(2024, 6, 15));
    }

    #[test]
    fn test_unparseable_start_date_is_malformed() {
        let service = service_at(MockDateClock::at_date(date(2024, 6, 15)));

        for raw in ["2024-02-30", "01/02/2024", "tomorrow"] {
            let err = service.resolve_start_date(Some(raw)).unwrap_err();
            assert_eq!(err.label(), "malformed_input", "{raw}");
            assert_eq!(err.field(), Some("startDate"));
        }
    }

    #[test]
    fn test_generate_uses_default_mode() {
        let pattern = Pattern::from(vec![
            PatternElement::event(1, "Off", "Rest"),
            PatternElement::placeholder(1, "On", ""),
        ]);
        let service = service_at(MockDateClock::at_date(date(2024, 1, 1)));
        let request = ScheduleRequest::new(pattern, 0, 3);

        let output = service.generate(&request).unwrap();
        assert_eq!(
            output,
            ProjectionOutput::Text(
                "Off\nMonday, January 1, 2024\nRest\n\nOff\nWednesday, January 3, 2024\nRest"
                    .to_string()
            )
        );

        let service = service.with_default_mode(OutputMode::Structured);
        let ProjectionOutput::Events(events) = service.generate(&request).unwrap() else {
            panic!("expected structured output");
        };
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_request_mode_overrides_default() {
        let pattern = Pattern::from(vec![PatternElement::event(1, "Off", "")]);
        let service = service_at(MockDateClock::at_date(date(2024, 1, 1)));
        let request = ScheduleRequest::new(pattern, 0, 2)
            .with_start_date("2024-05-01")
            .with_mode(OutputMode::Structured);

        let ProjectionOutput::Events(events) = service.generate(&request).unwrap() else {
            panic!("expected structured output");
        };
        assert_eq!(events[0].date, date(2024, 5, 1));
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.projection.default_text_only = false;
        config.reference.utc_offset = ReferenceOffset::utc();

        let service =
            ScheduleService::from_config(Arc::new(MockDateClock::at_date(date(2024, 1, 1))), &config);

        assert_eq!(service.default_mode(), OutputMode::Structured);
        assert_eq!(service.reference(), ReferenceOffset::utc());
    }
}
