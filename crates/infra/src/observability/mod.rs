//! Observability infrastructure
//!
//! Installs the process-wide `tracing` subscriber. Library code only emits
//! events; deciding where they go happens once, here.

pub mod logging;

pub use logging::{build_filter, init_tracing};
