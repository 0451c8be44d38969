//! Tracing/logging setup shared by binaries and tests.
//!
//! The workspace ships libraries only: the embedding application calls
//! [`init`] once at startup, and tests call [`init_for_tests`].

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize human-readable logging routed through the test harness, so
/// output only shows for failing tests.
///
/// Safe to call from every test.
pub fn init_for_tests() {
    tracing::init_for_tests();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
