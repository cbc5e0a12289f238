//! Schedule service
//!
//! Facade over the projection kernel that owns the only ambient input,
//! "today", through an injected [`DateClock`](chroney_common::DateClock).

pub mod service;

pub use service::{ScheduleRequest, ScheduleService};
