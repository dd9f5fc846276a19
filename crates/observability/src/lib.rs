//! Process-wide logging setup shared by binaries and integration tests.
//!
//! Library crates only emit `tracing` events; whoever owns the process
//! decides where they go by calling [`init`].

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
