//! Pattern-to-calendar projection
//!
//! Turns a cyclic [`Pattern`](chroney_domain::Pattern) into dated events:
//!
//! - [`cycle_length`]: period of the pattern in days
//! - [`anchor`]: element index + days-into-element to a linear day offset
//! - [`DaySlots`]: day-of-cycle lookup over the span ends
//! - [`project_events`]: walk the calendar and collect event days
//! - [`render_text`]: human-readable rendering of projected events

pub mod anchor;
pub mod cycle;
pub mod projector;
pub mod render;
pub mod slots;

pub use anchor::anchor;
pub use cycle::cycle_length;
pub use projector::{project, project_events, OutputMode, ProjectionOutput};
pub use render::render_text;
pub use slots::{CycleWalk, DaySlots};
