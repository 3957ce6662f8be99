use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber; stderr keeps the menu on stdout readable
///
/// Respects RUST_LOG, defaulting to warnings from this crate only.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("province_stats=warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();
}
