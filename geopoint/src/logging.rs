//! Logging infrastructure.
//!
//! Console logging via `tracing`, configurable with the `RUST_LOG`
//! environment variable (defaults to `info`). Log lines go to stderr so
//! report output on stdout stays clean.

use std::io;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// Installs the global subscriber. May only be called once per process;
/// a second call returns an error instead of panicking.
pub fn init_logging() -> Result<(), tracing_subscriber::util::TryInitError> {
    // Env filter (defaults to INFO if RUST_LOG not set)
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
}
