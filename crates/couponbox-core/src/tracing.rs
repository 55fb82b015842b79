use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the JSON stdout subscriber, filtered by `RUST_LOG`.
///
/// Call once at startup; repeated calls are no-ops so binaries and the
/// seeder can share the same entry point.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().json())
        .try_init();
}
