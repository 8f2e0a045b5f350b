//! Structured logging, controlled by `RUST_LOG`. Default level is `warn`;
//! run with `RUST_LOG=debug` to see sweep-level progress, or
//! `RUST_LOG=trace` for the fixed-point sweep's iteration counts.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// # Panics
///
/// Panics if a subscriber is already installed (e.g. called twice).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
