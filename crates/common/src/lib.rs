//! Modular common utilities shared across Chroney crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: error classification, civil-date clock, formatting and
//!   serde helpers
//! - `test-utils`: deterministic clocks for tests

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod error;
#[cfg(feature = "foundation")]
pub mod time;
#[cfg(feature = "foundation")]
pub mod utils;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(all(feature = "foundation", any(feature = "test-utils", test)))]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "foundation")]
pub use error::{CommonError, CommonResult, ErrorClassification, ErrorSeverity};
#[cfg(feature = "foundation")]
pub use time::{format_iso_date, format_long_date, DateClock, ReferenceOffset, SystemDateClock};
#[cfg(feature = "foundation")]
pub use utils::serde::civil_date_triple;
