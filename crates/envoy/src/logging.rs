use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

fn subscriber<W>(filter: EnvFilter, writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'a> fmt::MakeWriter<'a> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(false)
        .compact();

    tracing_subscriber::registry().with(filter).with(layer)
}

/// Diagnostics go to stderr so they never mix with chat output. Default level
/// is WARN, override via RUST_LOG.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Already installed is fine
    let _ = subscriber(filter, std::io::stderr).try_init();
}
