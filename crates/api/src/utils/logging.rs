use std::time::Duration;

use chroney_common::ErrorClassification;
use chroney_domain::ChroneyError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"schedule::generate_schedule_events"`).
/// * `elapsed` - Duration the command execution took.
/// * `error` - The failure, if the command did not succeed.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&ChroneyError>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(err) => warn!(
            command,
            duration_ms,
            error_type = error_label(err),
            field = err.field().unwrap_or_default(),
            severity = %err.severity(),
            retryable = err.is_retryable(),
            "command_execution_failure"
        ),
    }
}

/// Convert a `ChroneyError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &ChroneyError) -> &'static str {
    error.label()
}
