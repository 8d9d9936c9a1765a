//! Hosted MCP server provisioning.

use mcpbridge_core::ServerPayload;

use crate::error::ComposioResult;
use crate::http::HttpBackend;
use crate::models::{AppsServerRequest, AuthConfigServerRequest, ServerResponse};
use crate::url::{build_v1_servers_url, build_v3_servers_url};

use super::ComposioClient;

impl<B: HttpBackend> ComposioClient<B> {
    /// Provision a server; the payload variant picks the API generation.
    pub(crate) async fn create_server(
        &self,
        payload: &ServerPayload,
    ) -> ComposioResult<ServerResponse> {
        match payload {
            ServerPayload::Apps {
                name,
                apps,
                connected_account_ids,
                entity_id,
                ttl,
            } => {
                let url = build_v1_servers_url(&self.config)?;
                let body = AppsServerRequest {
                    name: name.clone(),
                    apps: apps.clone(),
                    connected_account_ids: connected_account_ids.clone(),
                    entity_id: entity_id.clone(),
                    ttl: ttl.clone(),
                };
                self.backend.post_json(&url, &body).await
            }
            ServerPayload::AuthConfigs {
                name,
                auth_config_ids,
                ttl,
            } => {
                let url = build_v3_servers_url(&self.config)?;
                let body = AuthConfigServerRequest {
                    name: name.clone(),
                    auth_config_ids: auth_config_ids.clone(),
                    ttl: ttl.clone(),
                };
                self.backend.post_json(&url, &body).await
            }
        }
    }
}
