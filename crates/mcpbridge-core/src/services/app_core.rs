//! `AppCore` - the primary application facade.
//!
//! Adapters (CLI, Web) receive an `AppCore` instance and use it to access
//! all workflow functionality.

use std::sync::Arc;

use url::Url;

use crate::ports::ProviderPort;

use super::{ConnectionService, McpServerService};

/// The core application facade.
///
/// `AppCore` is constructed at the adapter's composition root with a
/// concrete provider adapter.
///
/// # Example
///
/// ```ignore
/// let provider = Arc::new(ComposioClient::new(&config)?);
/// let core = AppCore::new(provider, Url::parse(settings.mcp_public_url())?);
///
/// let result = core.connections().create(&request, ContractVersion::V3).await?;
/// ```
pub struct AppCore {
    connections: ConnectionService,
    mcp_servers: McpServerService,
}

impl AppCore {
    /// Create a new `AppCore` sharing one provider between all services.
    pub fn new(provider: Arc<dyn ProviderPort>, mcp_public_url: Url) -> Self {
        Self {
            connections: ConnectionService::new(Arc::clone(&provider)),
            mcp_servers: McpServerService::new(provider, mcp_public_url),
        }
    }

    /// Access the connection service.
    pub const fn connections(&self) -> &ConnectionService {
        &self.connections
    }

    /// Access the MCP server service.
    pub const fn mcp_servers(&self) -> &McpServerService {
        &self.mcp_servers
    }
}
