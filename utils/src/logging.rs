//! Structured logging initialization via `tracing`.

/// Initialize the tracing subscriber.
///
/// The `RUST_LOG` environment variable wins when set; otherwise the
/// configured default level applies.
pub fn init_tracing(default_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
