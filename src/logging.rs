//! Logging setup for tests.

use tracing_subscriber::EnvFilter;

/// Sets up logging of events reported by the crate.
///
/// Use the RUST_LOG environment variable to pick what is shown.
///
/// E.g. to enable debug level logging:
///   RUST_LOG=DEBUG
///
/// Or to only see message decoding:
///   RUST_LOG=dnskit::base::message=TRACE
///
/// Calling the function more than once is fine.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}
