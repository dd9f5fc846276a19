//! Subscriber setup: JSON lines on stdout, filtered by `RUST_LOG`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::SystemTime;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Directives from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(DEFAULT_FILTER),
    }
}

/// Install the global subscriber. Later calls leave the first one in place.
pub fn init() {
    // Err means a previous call already installed a subscriber.
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter())
        .with_timer(SystemTime)
        .with_target(false)
        .try_init();
}
