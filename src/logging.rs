//! Logging setup built on the `tracing` ecosystem.
//!
//! Subprocess output is passed through line-by-line under the `mkvmerge`
//! target so it can be filtered independently with RUST_LOG.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Respects the RUST_LOG environment variable; otherwise defaults to
/// `info`, or `debug` when `verbose` is set. Should be called once at
/// startup.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
