//! Logging setup.
//!
//! Library code only emits `tracing` events. Applications embedding this
//! crate call [`init_logging`] once at startup to route them to stderr.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` when set, otherwise the configured level.
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install a stderr fmt subscriber.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(config: &Config) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
