//! Internal wire types for the Composio API.
//!
//! These types are internal to `mcpbridge-composio` and are not exposed to
//! consumers. External consumers should use the port DTOs defined in
//! `mcpbridge-core`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the Composio client, with parsed base URLs.
#[derive(Debug, Clone)]
pub struct ComposioConfig {
    /// Base URL for v1 endpoints
    pub api_url: Url,
    /// Base URL for v3 endpoints
    pub api_v3_url: Url,
    /// Static API key sent as `x-api-key`
    pub api_key: String,
    /// User agent string
    pub user_agent: String,
    /// Transport timeout per request
    pub timeout: Duration,
}

// ============================================================================
// Apps
// ============================================================================

/// Response of `GET /apps/{name}`.
///
/// The provider has shipped both camelCase and snake_case spellings of the
/// identifier and scheme list.
#[derive(Debug, Clone, Deserialize)]
pub struct AppResponse {
    #[serde(rename = "appId", alias = "app_id")]
    pub app_id: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "authSchemes")]
    pub auth_schemes: Vec<WireAuthScheme>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireAuthScheme {
    #[serde(alias = "auth_mode")]
    pub mode: String,
    #[serde(default)]
    pub fields: Vec<WireAuthField>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireAuthField {
    pub name: String,
    #[serde(default)]
    pub default: Option<serde_json::Value>,
}

// ============================================================================
// Integrations
// ============================================================================

/// Body of `POST /integrations`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntegrationRequest {
    pub name: String,
    pub app_id: String,
    pub auth_scheme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_config: Option<AuthConfigBody>,
    pub use_composio_auth: bool,
    pub force_new_integration: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthConfigBody {
    pub scopes: Vec<String>,
}

/// Response of `POST /integrations`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationResponse {
    pub id: String,
    #[serde(default, alias = "app_id")]
    pub app_id: String,
    #[serde(default, alias = "app_name")]
    pub app_name: String,
}

// ============================================================================
// Connected accounts
// ============================================================================

/// Body of `POST /connectedAccounts`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateConnectionRequest {
    pub integration_id: String,
    pub entity_id: String,
    pub data: serde_json::Map<String, serde_json::Value>,
}

/// Response of `POST /connectedAccounts`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionResponse {
    #[serde(alias = "connected_account_id")]
    pub connected_account_id: String,
    #[serde(default, alias = "redirect_url")]
    pub redirect_url: Option<String>,
    #[serde(default, alias = "connection_status")]
    pub connection_status: Option<String>,
}

// ============================================================================
// Migration (short ids)
// ============================================================================

/// Response of `GET /migration/get-nanoid`.
#[derive(Debug, Clone, Deserialize)]
pub struct NanoidResponse {
    pub nanoid: String,
}

// ============================================================================
// MCP servers
// ============================================================================

/// Body of the v1 `POST /mcp/servers` (explicit apps and accounts).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppsServerRequest {
    pub name: String,
    pub apps: Vec<String>,
    pub connected_account_ids: Vec<String>,
    pub entity_id: String,
    pub ttl: String,
}

/// Body of the v3 `POST /mcp/servers` (short auth-config ids).
#[derive(Debug, Clone, Serialize)]
pub struct AuthConfigServerRequest {
    pub name: String,
    pub auth_config_ids: Vec<String>,
    pub ttl: String,
}

/// Response of either `POST /mcp/servers`.
///
/// v1 answers with `url`, v3 with `mcp_url`; both are optional here and
/// checked by the core service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerResponse {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, alias = "mcpUrl")]
    pub mcp_url: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

impl ServerResponse {
    /// The server URL, whichever field carried it.
    pub fn server_url(&self) -> Option<&str> {
        self.mcp_url.as_deref().or(self.url.as_deref())
    }
}
