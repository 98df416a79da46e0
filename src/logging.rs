//! Logging setup.
//!
//! Logs go to stderr so that a command front end keeps stdout for its own
//! output. `RUST_LOG` takes precedence over [`Config::log_level`].

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, or from the configured level when it is unset or
/// unparsable.
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global fmt subscriber.
///
/// Returns false if a global subscriber was already installed, in which case
/// the existing one is kept.
pub fn init_logging(config: &Config) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level = %config.log_level, "Logging initialized");
    }
    installed
}
