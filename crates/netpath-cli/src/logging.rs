//! Logging setup for the netpath CLI.
//!
//! # Environment Variables
//!
//! - `LOG_FORMAT`: Output format, either `text` (default) or `json`
//! - `RUST_LOG`: Log level filter (default: `info`)
//!
//! Log lines are written to stderr so command output on stdout stays
//! machine-readable.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text logging (default).
    #[default]
    Text,
    /// JSON structured logging.
    Json,
}

impl LogFormat {
    /// Parse a log format name.
    ///
    /// Accepts "json", "text", or "pretty" (alias for text).
    /// Returns `Text` for any other value.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Configuration for the logging system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Output format (text or json).
    pub format: LogFormat,
    /// Log level filter used when `RUST_LOG` is unset (e.g. "info", "debug").
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Create configuration from `LOG_FORMAT` and `RUST_LOG`.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("LOG_FORMAT").ok().as_deref(),
            std::env::var("RUST_LOG").ok().as_deref(),
        )
    }

    fn from_values(format: Option<&str>, level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            format: format.map(LogFormat::parse).unwrap_or(defaults.format),
            level: level
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.level),
        }
    }
}

/// Install the global tracing subscriber. Later calls are ignored.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);

    let _ = match config.format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Text);
        assert_eq!(LogFormat::parse("unknown"), LogFormat::Text);
    }

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Text);
        assert_eq!(config.level, "info");
    }

    #[test]
    fn test_logging_config_from_values() {
        let config = LoggingConfig::from_values(Some("json"), Some("debug"));
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "debug");

        let config = LoggingConfig::from_values(None, Some(""));
        assert_eq!(config, LoggingConfig::default());
    }
}
