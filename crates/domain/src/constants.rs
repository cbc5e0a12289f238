//! Application constants
//!
//! Centralized location for domain-level constants.

/// Every projected event lasts exactly one civil day.
pub const EVENT_DURATION_DAYS: u32 = 1;

/// Separator between rendered events in text output.
pub const TEXT_EVENT_SEPARATOR: &str = "\n\n";

/// Wire format of start dates and "today".
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

// Logging defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Environment variable names
pub const ENV_UTC_OFFSET: &str = "CHRONEY_UTC_OFFSET";
pub const ENV_TEXT_ONLY: &str = "CHRONEY_TEXT_ONLY";
pub const ENV_LOG_LEVEL: &str = "CHRONEY_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "CHRONEY_LOG_JSON";
