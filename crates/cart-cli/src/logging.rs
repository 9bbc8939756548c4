//! # Logging
//!
//! Tracing subscriber setup. `CART_LOG_FORMAT=json` switches the output to
//! JSON lines; anything else keeps the human-readable format. Levels follow
//! `RUST_LOG`, defaulting to `INFO`.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Env var selecting the log format
pub const LOG_FORMAT_ENV: &str = "CART_LOG_FORMAT";

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to `Pretty`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }

    /// Read the format from `CART_LOG_FORMAT`
    pub fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }
}

/// Install the global subscriber, writing to stderr
pub fn init_logging(format: LogFormat) {
    let json = match format {
        LogFormat::Json => Some(fmt::layer().json().with_writer(std::io::stderr)),
        LogFormat::Pretty => None,
    };
    let pretty = match format {
        LogFormat::Pretty => Some(fmt::layer().with_writer(std::io::stderr)),
        LogFormat::Json => None,
    };

    tracing_subscriber::registry()
        .with(json)
        .with(pretty)
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();
}
