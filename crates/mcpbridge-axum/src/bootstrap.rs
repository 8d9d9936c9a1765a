//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use mcpbridge_composio::{ComposioClientConfig, DefaultComposioClient};
use mcpbridge_core::ports::ProviderPort;
use mcpbridge_core::services::AppCore;
use mcpbridge_core::Settings;
use url::Url;

use crate::routes::create_router;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Derive the server config from process settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            bind_addr: settings.bind_addr(),
            cors: CorsConfig::default(),
        }
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
///
/// This struct holds all initialized services for the web server.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

impl AxumContext {
    /// Wrap an already-assembled core.
    pub const fn new(core: Arc<AppCore>) -> Self {
        Self { core }
    }
}

/// Bootstrap the Axum context from validated settings.
///
/// Builds the Composio adapter and the core services once; nothing here is
/// mutated after startup.
pub fn bootstrap(settings: &Settings) -> Result<AxumContext> {
    settings.validate()?;

    let public_url = Url::parse(settings.mcp_public_url())
        .with_context(|| format!("Invalid MCP public URL: {}", settings.mcp_public_url()))?;

    let client = DefaultComposioClient::new(&ComposioClientConfig::from_settings(settings))
        .context("Failed to build Composio client")?;
    let provider: Arc<dyn ProviderPort> = Arc::new(client);

    tracing::info!(
        target: "mcpbridge.bootstrap",
        api_url = settings.api_url(),
        api_v3_url = settings.api_v3_url(),
        mcp_public_url = %public_url,
        timeout_secs = settings.request_timeout().as_secs(),
        "Axum bootstrap resolved provider endpoints"
    );

    let core = Arc::new(AppCore::new(provider, public_url));
    Ok(AxumContext::new(core))
}

/// Start the Axum server and serve until shutdown.
pub async fn start_server(settings: &Settings) -> Result<()> {
    let config = ServerConfig::from_settings(settings);
    let ctx = bootstrap(settings)?;
    let app = create_router(ctx, &config.cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!(
        target: "mcpbridge.bootstrap",
        addr = %config.bind_addr,
        "Starting mcpbridge web server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!(target: "mcpbridge.bootstrap", "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
