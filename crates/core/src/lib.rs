//! # Chroney Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The pattern projection kernel (cycle length, anchor resolution,
//!   day-slot expansion, event projection, text rendering)
//! - The `ScheduleService` facade that resolves "today" through an injected
//!   clock
//!
//! ## Architecture Principles
//! - Only depends on `chroney-common` and `chroney-domain`
//! - No I/O, no async, no shared mutable state
//! - The clock is the only external input, injected via `DateClock`

pub mod projection;
pub mod schedule;

// Re-export specific items to avoid ambiguity
pub use projection::{
    anchor, cycle_length, project, project_events, render_text, DaySlots, OutputMode,
    ProjectionOutput,
};
pub use schedule::{ScheduleRequest, ScheduleService};
