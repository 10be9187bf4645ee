//! Logging configuration and initialization

use crate::app::config::AppConfig;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the application
///
/// Logs go to stderr so stdout carries only command output.
pub fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_new(config.log_level()).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.verbose >= 2) // Show target module for -vv and above
        .with_line_number(config.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("seqkit started with verbosity level: {}", config.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
