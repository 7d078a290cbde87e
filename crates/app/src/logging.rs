//! Logging initialization

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Respects `RUST_LOG`; defaults to `info` for our crates and `warn` for
/// everything else.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,recruitbot=info,recruitbot_app=info,recruitbot_core=info,recruitbot_infra=info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
