use tracing_subscriber::EnvFilter;

/// Set up JSON tracing on stdout, filtered by `RUST_LOG` (default `info`).
///
/// Idempotent: a second call loses the race for the global subscriber and
/// is ignored, so tests may call this freely.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init();
}
