//! Schedule commands
//!
//! The four operations of the schedule tool surface. Requests use the
//! camelCase wire names (`indexOfCurrentEvent`, `startDate`, `textOnly`),
//! and every response carries a human-readable `text`.

use std::time::Instant;

use chroney_core::{OutputMode, ProjectionOutput, ScheduleRequest};
use chroney_domain::{ChroneyError, Pattern, ProjectedEvent, Result as DomainResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Wire names accepted by [`dispatch`]
pub const COMMAND_NAMES: [&str; 4] = [
    "get-current-day-of-pattern",
    "get-total-days-in-pattern",
    "get-current-date-string",
    "generate-schedule-events",
];

/// Response of every schedule command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutput {
    pub text: String,
    /// Structured events, only for `generate-schedule-events` with
    /// `textOnly: false`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<ProjectedEvent>>,
}

impl CommandOutput {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self { text: text.into(), events: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentDayOfPatternParams {
    pub pattern: Pattern,
    /// Element the caller is currently in
    pub index_of_current_event: usize,
    /// Days already elapsed into that element
    pub offset: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalDaysInPatternParams {
    pub pattern: Pattern,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateScheduleParams {
    pub pattern: Pattern,
    /// `YYYY-MM-DD`; today at the reference offset when omitted
    #[serde(default)]
    pub start_date: Option<String>,
    pub current_day_of_pattern: i64,
    pub total_days: u32,
    /// Configured default (text) when omitted
    #[serde(default)]
    pub text_only: Option<bool>,
}

impl From<GenerateScheduleParams> for ScheduleRequest {
    fn from(params: GenerateScheduleParams) -> Self {
        Self {
            pattern: params.pattern,
            start_date: params.start_date,
            current_day_of_pattern: params.current_day_of_pattern,
            total_days: params.total_days,
            mode: params.text_only.map(OutputMode::from_text_only),
        }
    }
}

/// Time `body`, log the outcome, and pass the result through
fn run_command<T>(command: &str, body: impl FnOnce() -> DomainResult<T>) -> DomainResult<T> {
    let start = Instant::now();
    let result = body();
    log_command_execution(command, start.elapsed(), result.as_ref().err());
    result
}

/// Convert "`offset` days into element `indexOfCurrentEvent`" into a linear
/// `currentDayOfPattern`.
///
/// # Errors
/// Returns `ChroneyError::Validation` when the index is outside the pattern.
pub fn get_current_day_of_pattern(
    ctx: &AppContext,
    params: &CurrentDayOfPatternParams,
) -> DomainResult<CommandOutput> {
    run_command("schedule::get_current_day_of_pattern", || {
        let day = ctx.schedule.current_day_of_pattern(
            &params.pattern,
            params.index_of_current_event,
            params.offset,
        )?;
        Ok(CommandOutput::text(format!("currentDayOfPattern: {day}")))
    })
}

/// Total number of days in one repetition of the pattern.
///
/// # Errors
/// Never fails; the `Result` keeps every command's signature uniform.
pub fn get_total_days_in_pattern(
    ctx: &AppContext,
    params: &TotalDaysInPatternParams,
) -> DomainResult<CommandOutput> {
    run_command("schedule::get_total_days_in_pattern", || {
        let total = ctx.schedule.total_days_in_pattern(&params.pattern);
        Ok(CommandOutput::text(format!("totalPatternDays: {total}")))
    })
}

/// Today's date at the reference offset, as `YYYY-MM-DD`.
///
/// # Errors
/// Never fails; the `Result` keeps every command's signature uniform.
pub fn get_current_date_string(ctx: &AppContext) -> DomainResult<CommandOutput> {
    run_command("schedule::get_current_date_string", || {
        Ok(CommandOutput::text(format!("startDate: {}", ctx.schedule.current_date_string())))
    })
}

/// Project the pattern onto the calendar.
///
/// Text mode answers with the rendered schedule. Structured mode answers
/// with a summary line plus the event list for a calendar-file encoder.
///
/// # Errors
/// Returns `MalformedInput` for an unparseable `startDate` and `Validation`
/// for zero-span elements.
pub fn generate_schedule_events(
    ctx: &AppContext,
    params: GenerateScheduleParams,
) -> DomainResult<CommandOutput> {
    run_command("schedule::generate_schedule_events", || {
        let request = ScheduleRequest::from(params);

        match ctx.schedule.generate(&request)? {
            ProjectionOutput::Text(text) => Ok(CommandOutput::text(text)),
            ProjectionOutput::Events(events) => {
                info!(event_count = events.len(), "Generated structured schedule");
                Ok(CommandOutput {
                    text: format!("Generated {} calendar events.", events.len()),
                    events: Some(events),
                })
            }
        }
    })
}

/// Route a command by its wire name with JSON parameters.
///
/// # Errors
/// Returns `MalformedInput` on `command` for an unknown name and on `params`
/// when the parameters do not match the command's request shape. Command
/// errors are passed through.
pub fn dispatch(ctx: &AppContext, command: &str, params: Value) -> DomainResult<CommandOutput> {
    match command {
        "get-current-day-of-pattern" => get_current_day_of_pattern(ctx, &decode(params)?),
        "get-total-days-in-pattern" => get_total_days_in_pattern(ctx, &decode(params)?),
        "get-current-date-string" => get_current_date_string(ctx),
        "generate-schedule-events" => generate_schedule_events(ctx, decode(params)?),
        other => Err(ChroneyError::malformed(
            "command",
            other,
            format!("expected one of: {}", COMMAND_NAMES.join(", ")),
        )),
    }
}

fn decode<T: for<'de> Deserialize<'de>>(params: Value) -> DomainResult<T> {
    let raw = params.to_string();
    serde_json::from_value(params)
        .map_err(|e| ChroneyError::malformed("params", raw, format!("invalid parameters: {e}")))
}
