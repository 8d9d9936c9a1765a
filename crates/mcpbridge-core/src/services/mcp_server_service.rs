//! MCP server service - orchestrates hosted server provisioning.

use std::sync::Arc;

use tracing::{debug, info, warn};
use url::Url;

use crate::domain::{
    CustomServerSpec, ServerProvisionRequest, ServerProvisionResult, ShortIdServerSpec,
    generate_name, normalize_server_url,
};
use crate::ports::{CoreError, ProviderPort, ProvisionedServer, ServerPayload};

/// Service for provisioning hosted MCP servers.
pub struct McpServerService {
    provider: Arc<dyn ProviderPort>,
    public_base: Url,
}

impl McpServerService {
    /// Create a new service; normalized URLs are retargeted onto `public_base`.
    pub fn new(provider: Arc<dyn ProviderPort>, public_base: Url) -> Self {
        Self {
            provider,
            public_base,
        }
    }

    /// Provision a server from either request shape.
    pub async fn provision(
        &self,
        request: ServerProvisionRequest,
    ) -> Result<ServerProvisionResult, CoreError> {
        request.validate()?;
        match request {
            ServerProvisionRequest::Custom(spec) => self.provision_custom(spec).await,
            ServerProvisionRequest::ShortId(spec) => self.provision_short_id(spec).await,
        }
    }

    /// Explicit apps + accounts; the provider URL is returned as-is.
    async fn provision_custom(
        &self,
        spec: CustomServerSpec,
    ) -> Result<ServerProvisionResult, CoreError> {
        let payload = ServerPayload::Apps {
            name: spec.name,
            apps: spec.apps,
            connected_account_ids: spec.connected_account_ids,
            entity_id: spec.entity_id,
            ttl: spec.ttl,
        };
        let (provider_url, server_id) = self.call_provider(&payload).await?;

        Ok(ServerProvisionResult {
            url: provider_url.clone(),
            server_id,
            provider_url,
        })
    }

    /// One short auth-config id; the name is generated and the URL normalized.
    async fn provision_short_id(
        &self,
        spec: ShortIdServerSpec,
    ) -> Result<ServerProvisionResult, CoreError> {
        let payload = ServerPayload::AuthConfigs {
            name: generate_name(),
            auth_config_ids: vec![spec.nanoid],
            ttl: spec.ttl,
        };
        let (provider_url, server_id) = self.call_provider(&payload).await?;
        let url = normalize_server_url(&provider_url, &self.public_base)?;

        Ok(ServerProvisionResult {
            url: url.into(),
            server_id,
            provider_url,
        })
    }

    async fn call_provider(&self, payload: &ServerPayload) -> Result<(String, String), CoreError> {
        debug!(name = payload.name(), "Provisioning MCP server");
        let server = self.provider.provision_server(payload).await?;
        let (url, server_id) = require_fields(server)?;
        info!(name = payload.name(), %server_id, "MCP server provisioned");
        Ok((url, server_id))
    }
}

/// Reject provider answers missing (or blanking) the URL or id.
fn require_fields(server: ProvisionedServer) -> Result<(String, String), CoreError> {
    let url = server.url.filter(|u| !u.trim().is_empty()).ok_or_else(|| {
        warn!("Provisioning response had no server URL");
        CoreError::Provisioning("MCP server created, but no URL found in response".to_string())
    })?;
    let server_id = server.server_id.filter(|id| !id.trim().is_empty()).ok_or_else(|| {
        CoreError::Provisioning("MCP server created, but no id found in response".to_string())
    })?;
    Ok((url, server_id))
}
