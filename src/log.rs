// src/log.rs
use tracing_subscriber::{fmt::time::uptime, EnvFilter};

use crate::config::consts::ENV_LOG;

/// Install the global subscriber: stderr, uptime timestamps, filter from
/// `PADEL_LOG` (default `info`). A second call is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_env(ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(uptime())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
