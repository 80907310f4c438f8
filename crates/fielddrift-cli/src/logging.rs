//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this twice is
/// harmless; the second install is ignored.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
