//! Composio client for apps, integrations, connections and MCP servers.
//!
//! This module provides the main client interface for interacting with
//! the Composio REST API.

mod apps;
mod connections;
mod integrations;
mod mcp;
mod migration;

use crate::config::ComposioClientConfig;
use crate::error::ComposioResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ComposioConfig;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Composio client using the reqwest HTTP backend.
pub type DefaultComposioClient = ComposioClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for interacting with the Composio API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultComposioClient` for production code. The generic parameter
/// `B` is an implementation detail - external code should not instantiate
/// this directly but use `DefaultComposioClient::new()`.
pub struct ComposioClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ComposioConfig,
}

impl DefaultComposioClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if a base URL does not parse or the HTTP client cannot be built.
    pub fn new(config: &ComposioClientConfig) -> ComposioResult<Self> {
        let internal_config = Self::to_internal_config(config)?;
        let backend = ReqwestBackend::new(&internal_config)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }

    fn to_internal_config(config: &ComposioClientConfig) -> ComposioResult<ComposioConfig> {
        Ok(ComposioConfig {
            api_url: Url::parse(&config.api_url)?,
            api_v3_url: Url::parse(&config.api_v3_url)?,
            api_key: config.api_key.clone(),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
        })
    }
}

impl<B: HttpBackend> ComposioClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ComposioConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
