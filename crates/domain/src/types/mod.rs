//! Domain types and models

pub mod event;
pub mod pattern;

pub use event::{EventDuration, ProjectedEvent};
pub use pattern::{Pattern, PatternElement, SlotKind};
