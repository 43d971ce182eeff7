//! Logging setup
//!
//! Structured tracing output, JSON by default for production, pretty
//! for development.
//!
//! # Environment Variables
//! - `LOG_FORMAT`: `json` (default) or `pretty`
//! - `RUST_LOG`: level filter, default `info`

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Json,
    Pretty,
}

fn format_from_env() -> LogFormat {
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("pretty") => LogFormat::Pretty,
        _ => LogFormat::Json,
    }
}

/// Initialize the global tracing subscriber.
///
/// Call once at startup; a second call panics, so binaries own this,
/// not the library.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format_from_env() {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .pretty()
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init(),
    }
}
