// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Initializes tracing_subscriber from the `RUST_LOG` environment
/// variable, defaulting to "info". Logs go to stderr so that stdout
/// stays clean for the condensed prompt / tables JSON.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Logging setup complete.");
}
