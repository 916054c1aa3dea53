//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Install a JSON `fmt` subscriber.
///
/// `RUST_LOG` wins over `default_directive` when set. Validation events are
/// emitted under the `cdconfig_core` and `cdconfig_auth` targets, so e.g.
/// `RUST_LOG=cdconfig_auth=debug` shows every role as it is validated.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .try_init();
}
