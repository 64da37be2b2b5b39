// tests/common.rs
//! Shared test utilities — logging setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // pretty + works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent — safe to call multiple times
}
