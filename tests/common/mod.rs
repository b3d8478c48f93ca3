use tracing_subscriber::EnvFilter;

/// Send library logs to the test harness. `RUST_LOG=livelist=trace` shows
/// every reconciliation.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
