use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Human-readable stdout logging. Default level is INFO, override via RUST_LOG.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,citykey_engine=debug"));

    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .init();
}
