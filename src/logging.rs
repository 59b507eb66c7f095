//! Logging initialization built on `tracing` / `tracing-subscriber`.
//!
//! Output goes to stderr: stdout carries the newline-delimited JSON
//! protocol and must stay clean. Called by binaries, never by the library.

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global subscriber.
///
/// The level is read from `RUST_LOG` (default: `info`), e.g.
/// `RUST_LOG=linkstash=debug`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
