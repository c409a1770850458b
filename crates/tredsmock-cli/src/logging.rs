use tracing_subscriber::EnvFilter;

/// Initialize process-wide logging on stderr. Honors `RUST_LOG`, defaulting
/// to `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second init (e.g. under a test harness) is a no-op.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
