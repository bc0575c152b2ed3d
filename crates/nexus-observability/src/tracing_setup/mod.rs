//! Tracing setup: structured logging plus span definitions.

pub mod spans;

use std::sync::Once;

use nexus_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "NEXUS_LOG";

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// `NEXUS_LOG` wins over `config.log_filter`. JSON output unless
/// `config.json_logs` is false. Only the first call has any effect, and an
/// already installed subscriber is left in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true);

        let _ = if config.json_logs {
            builder
                .with_file(true)
                .with_line_number(true)
                .json()
                .try_init()
        } else {
            builder.try_init()
        };
    });
}
