//! Configuration management

use chroney_common::ReferenceOffset;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reference: ReferenceConfig,
    pub projection: ProjectionConfig,
    pub logging: LoggingConfig,
}

/// Civil-calendar reference
///
/// All start dates and "today" are read at this one fixed offset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    pub utc_offset: ReferenceOffset,
}

/// Projection defaults applied when a request leaves them out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Render text instead of structured events when the caller doesn't say
    pub default_text_only: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self { default_text_only: true }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive; `RUST_LOG` takes precedence
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), json: false }
    }
}
