use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;

pub const LOG_ENV: &str = "MAPFILE_DRIFT_LOG";

/// Installs the stderr subscriber. `MAPFILE_DRIFT_LOG` overrides the default
/// `info` filter.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_timer(ChronoLocal::new("%Y-%m-%d".to_string()))
        .init();
}
