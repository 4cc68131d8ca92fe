//! Configuration for the seedex indexer
//!
//! Configuration is layered: built-in defaults, then environment variables,
//! or a TOML file when one is given on the command line. The positional
//! `server_url` argument overrides whatever the layers produced.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default base URL of the indexing service
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Default timeout in seconds for both outbound requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client configuration
    pub http: HttpConfig,

    /// Index service configuration
    pub indexer: IndexerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds, applied to both fetch and submit
    pub request_timeout_secs: u64,
}

/// Index service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexerConfig {
    /// Base URL of the indexing service
    pub server_url: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let request_timeout_secs = std::env::var("SEEDEX_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let server_url = std::env::var("SEEDEX_SERVER_URL")
            .unwrap_or_else(|_| String::from(DEFAULT_SERVER_URL));

        let log_level = std::env::var("SEEDEX_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));

        let log_format =
            std::env::var("SEEDEX_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        Ok(Self {
            http: HttpConfig {
                request_timeout_secs,
            },
            indexer: IndexerConfig { server_url },
            logging: LoggingConfig {
                level: log_level,
                format: log_format,
            },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.http.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        let url = Url::parse(&self.indexer.server_url).with_context(|| {
            format!("server_url is not a valid URL: {}", self.indexer.server_url)
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!(
                "server_url must use http or https: {}",
                self.indexer.server_url
            );
        }

        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpConfig {
                request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
            indexer: IndexerConfig {
                server_url: String::from(DEFAULT_SERVER_URL),
            },
            logging: LoggingConfig {
                level: String::from("info"),
                format: String::from("text"),
            },
        }
    }
}
