//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the Composio client is built here and handed to the
//! core services as a `ProviderPort`.
//!
//! Command handlers receive the fully-composed `AppCore` and delegate work to it.

use std::sync::Arc;

use mcpbridge_composio::{ComposioClientConfig, DefaultComposioClient};
use mcpbridge_core::ports::ProviderPort;
use mcpbridge_core::services::AppCore;
use mcpbridge_core::Settings;
use url::Url;

use crate::error::CliError;

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
}

impl CliContext {
    /// Wrap an already-assembled core.
    pub const fn new(app: AppCore) -> Self {
        Self { app }
    }

    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }
}

/// Parse the public host that normalized URLs are rebuilt on.
pub fn public_url(settings: &Settings) -> Result<Url, CliError> {
    Url::parse(settings.mcp_public_url()).map_err(|e| {
        CliError::Config(format!(
            "Invalid MCP public URL {}: {e}",
            settings.mcp_public_url()
        ))
    })
}

/// Bootstrap the CLI context for commands that call the provider.
pub fn bootstrap(settings: &Settings) -> Result<CliContext, CliError> {
    settings.validate()?;
    let public_url = public_url(settings)?;

    let client = DefaultComposioClient::new(&ComposioClientConfig::from_settings(settings))
        .map_err(|e| CliError::Config(format!("Failed to build Composio client: {e}")))?;
    let provider: Arc<dyn ProviderPort> = Arc::new(client);

    tracing::debug!(
        target: "mcpbridge.bootstrap",
        api_url = settings.api_url(),
        api_v3_url = settings.api_v3_url(),
        mcp_public_url = %public_url,
        "CLI bootstrap resolved provider endpoints"
    );

    Ok(CliContext::new(AppCore::new(provider, public_url)))
}
