//! tfrender configuration.
//!
//! All configuration is driven by environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use tfrender_http::service::{DEFAULT_MAX_BODY_SIZE, TfRenderHttpConfig};

/// Default listening port.
pub const DEFAULT_HTTP_PORT: &str = "8080";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// tfrender service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TfRenderConfig {
    /// Port to listen on. Kept as a string so a bad value surfaces when the
    /// bind address is parsed, with context.
    pub http_port: String,
    /// Log level filter (ignored when `RUST_LOG` is set).
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
    /// Maximum accepted request body, in bytes.
    pub max_body_size: usize,
}

impl TfRenderConfig {
    /// Create configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("HTTP_PORT").filter(|v| !v.is_empty()) {
            config.http_port = v;
        }
        if let Some(v) = lookup("LOG_LEVEL").filter(|v| !v.is_empty()) {
            config.log_level = v;
        }
        if let Some(format) = lookup("LOG_FORMAT").and_then(|v| v.parse().ok()) {
            config.log_format = format;
        }
        if let Some(size) = lookup("MAX_BODY_SIZE").and_then(|v| v.parse().ok()) {
            config.max_body_size = size;
        }

        config
    }

    /// HTTP layer settings derived from this configuration.
    #[must_use]
    pub fn http_config(&self) -> TfRenderHttpConfig {
        TfRenderHttpConfig {
            max_body_size: self.max_body_size,
        }
    }

    /// Bind address, on all interfaces.
    #[must_use]
    pub fn gateway_listen(&self) -> String {
        format!("0.0.0.0:{}", self.http_port)
    }
}

impl Default for TfRenderConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT.to_owned(),
            log_level: "info".to_owned(),
            log_format: LogFormat::Text,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}
