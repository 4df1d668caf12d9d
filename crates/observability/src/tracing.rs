//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize tracing/logging for the process.
///
/// Logs go to stderr so stdout stays free for program output.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn default_filter_is_a_valid_directive() {
        let filter = EnvFilter::try_new(DEFAULT_FILTER).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn init_is_idempotent_and_events_can_be_emitted() {
        init();
        init();
        ::tracing::info!(attempt = 2, "observability initialized");
        ::tracing::debug!("below the default level");
    }
}
