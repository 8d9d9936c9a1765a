//! Public configuration for the Composio client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::fmt;
use std::time::Duration;

use mcpbridge_core::{DEFAULT_API_URL, DEFAULT_API_V3_URL, DEFAULT_TIMEOUT_SECS, Settings};

/// Configuration for the Composio client.
///
/// # Example
///
/// ```
/// use mcpbridge_composio::ComposioClientConfig;
/// use std::time::Duration;
///
/// let config = ComposioClientConfig::new("api-key")
///     .with_api_url("https://backend.composio.dev/api/v1")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Clone)]
pub struct ComposioClientConfig {
    /// Static API key sent as `x-api-key`
    pub(crate) api_key: String,
    /// Base URL for v1 endpoints
    pub(crate) api_url: String,
    /// Base URL for v3 endpoints
    pub(crate) api_v3_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Transport timeout per request
    pub(crate) timeout: Duration,
}

impl fmt::Debug for ComposioClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposioClientConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("api_v3_url", &self.api_v3_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ComposioClientConfig {
    /// Create a configuration with default endpoints.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            api_v3_url: DEFAULT_API_V3_URL.to_string(),
            user_agent: concat!("mcpbridge/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Derive the client configuration from process settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.api_key())
            .with_api_url(settings.api_url())
            .with_api_v3_url(settings.api_v3_url())
            .with_timeout(settings.request_timeout())
    }

    /// Set the v1 base URL.
    ///
    /// Defaults to `https://backend.composio.dev/api/v1`.
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the v3 base URL.
    ///
    /// Defaults to `https://backend.composio.dev/api/v3`.
    #[must_use]
    pub fn with_api_v3_url(mut self, url: impl Into<String>) -> Self {
        self.api_v3_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
