use tracing_subscriber::EnvFilter;

pub const LOG_VAR: &str = "COINSIGHT_LOG";

/// Compact stderr logging; `COINSIGHT_LOG` takes an `EnvFilter` directive, default `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
