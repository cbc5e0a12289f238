//! # Chroney API
//!
//! Command layer over the schedule service.
//!
//! This crate contains:
//! - The four schedule commands and their wire request/response shapes
//! - Application context (dependency injection)
//! - Structured command logging
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires configuration and the system clock into `ScheduleService`
//! - Transport-agnostic: a host decodes the request, calls a command (or
//!   [`dispatch`]) and encodes the [`CommandOutput`]

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
