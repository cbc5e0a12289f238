//! Commands exposed to hosts
//!
//! Each command takes the [`AppContext`](crate::AppContext) and a decoded
//! request, and answers with a [`CommandOutput`].

pub mod schedule;

pub use schedule::{
    dispatch, generate_schedule_events, get_current_date_string, get_current_day_of_pattern,
    get_total_days_in_pattern, CommandOutput, CurrentDayOfPatternParams, GenerateScheduleParams,
    TotalDaysInPatternParams, COMMAND_NAMES,
};
