//! Process-wide settings.
//!
//! `Settings` is built exactly once at the composition root (from CLI flags,
//! environment variables and `.env`) and then shared read-only. Nothing in the
//! workspace reads configuration from ambient global state.

use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default base URL of the provider's v1 API (apps, integrations, connections).
pub const DEFAULT_API_URL: &str = "https://backend.composio.dev/api/v1";

/// Default base URL of the provider's v3 API (migration lookup, MCP servers).
pub const DEFAULT_API_V3_URL: &str = "https://backend.composio.dev/api/v3";

/// Default public host that normalized MCP URLs point at.
pub const DEFAULT_MCP_PUBLIC_URL: &str = "https://mcp.composio.dev";

/// Default log level, used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Default listen address for the HTTP service.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Default transport timeout for outbound provider calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Log levels accepted in `LOG_LEVEL`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "warning", "error", "critical"];

/// Errors raised while validating settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// The provider API key is missing or blank.
    #[error("API_KEY must be set to a non-empty value")]
    MissingApiKey,

    /// A URL setting could not be parsed.
    #[error("{name} is not a valid URL: {value}")]
    InvalidUrl { name: &'static str, value: String },

    /// The log level is not one we understand.
    #[error("Unknown log level '{0}'")]
    InvalidLogLevel(String),

    /// Timeout must be at least one second.
    #[error("Request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Immutable service configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    api_key: String,
    api_url: String,
    api_v3_url: String,
    mcp_public_url: String,
    log_level: String,
    bind_addr: SocketAddr,
    request_timeout: Duration,
}

// API key must never reach logs.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("api_v3_url", &self.api_v3_url)
            .field("mcp_public_url", &self.mcp_public_url)
            .field("log_level", &self.log_level)
            .field("bind_addr", &self.bind_addr)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Settings {
    /// Create settings with the given API key and defaults for everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            api_v3_url: DEFAULT_API_V3_URL.to_string(),
            mcp_public_url: DEFAULT_MCP_PUBLIC_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the provider v1 base URL.
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the provider v3 base URL.
    #[must_use]
    pub fn with_api_v3_url(mut self, url: impl Into<String>) -> Self {
        self.api_v3_url = url.into();
        self
    }

    /// Set the public host used for normalized MCP URLs.
    #[must_use]
    pub fn with_mcp_public_url(mut self, url: impl Into<String>) -> Self {
        self.mcp_public_url = url.into();
        self
    }

    /// Set the log level string (as found in `LOG_LEVEL`).
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the HTTP listen address.
    #[must_use]
    pub const fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set the outbound request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.api_key.trim().is_empty() {
            return Err(SettingsError::MissingApiKey);
        }
        for (name, value) in [
            ("COMPOSIO_API_URL", &self.api_url),
            ("COMPOSIO_API_V3_URL", &self.api_v3_url),
            ("MCP_PUBLIC_URL", &self.mcp_public_url),
        ] {
            if Url::parse(value).is_err() {
                return Err(SettingsError::InvalidUrl {
                    name,
                    value: value.clone(),
                });
            }
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(SettingsError::InvalidLogLevel(self.log_level.clone()));
        }
        if self.request_timeout.is_zero() {
            return Err(SettingsError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn api_v3_url(&self) -> &str {
        &self.api_v3_url
    }

    pub fn mcp_public_url(&self) -> &str {
        &self.mcp_public_url
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Translate `LOG_LEVEL` into a `tracing` filter directive.
    ///
    /// Python-style names (`WARNING`, `CRITICAL`) map onto the nearest
    /// `tracing` level.
    pub fn log_filter(&self) -> &'static str {
        match self.log_level.to_ascii_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "warn" | "warning" => "warn",
            "error" | "critical" => "error",
            _ => "info",
        }
    }
}
