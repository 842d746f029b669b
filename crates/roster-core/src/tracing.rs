use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Initialize structured JSON tracing on stdout. Filter comes from `RUST_LOG`,
/// falling back to `info`.
///
/// Later calls are no-ops.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_current_span(false))
        .try_init();
}
