//! Tracing subscriber setup

use chroney_domain::{ChroneyError, LoggingConfig, Result};
use tracing_subscriber::EnvFilter;

/// Filter for `config`, with `RUST_LOG` taking precedence when set
///
/// # Errors
/// Returns `ChroneyError::Config` when the configured level is not a valid
/// filter directive.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            ChroneyError::Config(format!("Invalid log level '{}': {e}", config.level))
        }),
    }
}

/// Install the global subscriber
///
/// Human-readable output by default, JSON lines when `config.json` is set.
///
/// # Errors
/// Returns `ChroneyError::Config` if the filter is invalid or a global
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;

    let installed = if config.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    installed
        .map_err(|e| ChroneyError::Config(format!("Failed to install tracing subscriber: {e}")))?;

    tracing::debug!(level = %config.level, json = config.json, "Tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_directives() {
        for level in ["info", "warn,chroney_core=debug", "chroney_api=trace"] {
            let config = LoggingConfig { level: level.to_string(), json: false };
            assert!(build_filter(&config).is_ok(), "{level}");
        }
    }

    #[test]
    fn test_second_init_is_reported() {
        let config = LoggingConfig::default();
        // Whichever test installs first wins; the next attempt must fail cleanly.
        let _ = init_tracing(&config);
        let err = init_tracing(&config).unwrap_err();
        assert!(matches!(err, ChroneyError::Config(ref msg) if msg.contains("subscriber")));
    }
}
