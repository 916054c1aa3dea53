//! Process-wide diagnostics setup for tools embedding the configuration crates.

/// Initialize tracing with the default filter (`info`, overridable through
/// `RUST_LOG`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Tracing subscriber configuration.
pub mod tracing;
