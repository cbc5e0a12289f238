//! Application context - dependency injection container

use std::sync::Arc;

use chroney_common::{DateClock, SystemDateClock};
use chroney_core::ScheduleService;
use chroney_domain::{Config, Result};
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub schedule: Arc<ScheduleService>,
}

impl AppContext {
    /// Build the context from `.env`, config files and the environment
    ///
    /// Tracing is not installed here; hosts call
    /// [`chroney_infra::init_tracing`] with `config.logging` when they want
    /// output.
    ///
    /// # Errors
    /// Returns `ChroneyError::Config` if configuration cannot be loaded.
    pub fn new() -> Result<Self> {
        chroney_infra::config::load_dotenv();
        let config = chroney_infra::load()?;
        Ok(Self::with_config(config))
    }

    /// Build the context from an explicit configuration and the system clock
    pub fn with_config(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemDateClock))
    }

    /// Build the context with an injected clock
    pub fn with_clock(config: Config, clock: Arc<dyn DateClock>) -> Self {
        let schedule = Arc::new(ScheduleService::from_config(clock, &config));

        info!(
            utc_offset = %config.reference.utc_offset,
            default_mode = ?schedule.default_mode(),
            "Application context initialised"
        );

        Self { config, schedule }
    }
}
