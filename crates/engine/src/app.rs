//! Application state and composition.

use std::sync::Arc;

use menagerie_domain::{ActionLogPort, LoggingService, SoundPort, SoundService};

use crate::config::DemoConfig;

/// Shared services built once from config and injected into the animals the
/// demonstration creates.
pub struct App {
    pub config: DemoConfig,
    pub services: Services,
}

pub struct Services {
    pub quiet_sound: Arc<dyn SoundPort>,
    pub loud_sound: Arc<dyn SoundPort>,
    /// Kept concrete so the demonstration can read the accumulated log back.
    pub logging: Arc<LoggingService>,
}

impl Services {
    pub fn logger(&self) -> Arc<dyn ActionLogPort> {
        self.logging.clone()
    }
}

impl App {
    pub fn new(config: DemoConfig) -> Self {
        let services = Services {
            quiet_sound: Arc::new(SoundService::new(config.quiet_volume)),
            loud_sound: Arc::new(SoundService::new(config.loud_volume)),
            logging: Arc::new(
                LoggingService::new(config.log_prefix.clone()).with_echo(config.echo_logs),
            ),
        };

        tracing::debug!(
            quiet_volume = config.quiet_volume,
            loud_volume = config.loud_volume,
            log_prefix = %config.log_prefix,
            "Services composed"
        );

        Self { config, services }
    }
}
