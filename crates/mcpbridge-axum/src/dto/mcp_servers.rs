//! MCP server DTOs.

use mcpbridge_core::{
    CustomServerSpec, DEFAULT_ENTITY_ID, DEFAULT_TTL, ServerProvisionResult, ShortIdServerSpec,
};
use serde::{Deserialize, Serialize};

/// Fixed success message for provisioning responses.
pub const SERVER_MESSAGE: &str = "MCP server created successfully";

fn default_entity_id() -> String {
    DEFAULT_ENTITY_ID.to_string()
}

fn default_ttl() -> String {
    DEFAULT_TTL.to_string()
}

/// Body of `POST /v1/mcp-servers/`: explicit apps and connected accounts.
#[derive(Debug, Clone, Deserialize)]
pub struct McpServerRequestDto {
    pub name: String,
    pub connected_account_ids: Vec<String>,
    pub apps: Vec<String>,
    #[serde(default = "default_entity_id")]
    pub entity_id: String,
    #[serde(default = "default_ttl")]
    pub ttl: String,
}

impl From<McpServerRequestDto> for CustomServerSpec {
    fn from(dto: McpServerRequestDto) -> Self {
        Self {
            name: dto.name,
            apps: dto.apps,
            connected_account_ids: dto.connected_account_ids,
            entity_id: dto.entity_id,
            ttl: dto.ttl,
        }
    }
}

/// Body of `POST /v3/mcp-servers/`: one short auth-config id.
#[derive(Debug, Clone, Deserialize)]
pub struct ShortIdServerRequestDto {
    pub nanoid: String,
    #[serde(default = "default_ttl")]
    pub ttl: String,
}

impl From<ShortIdServerRequestDto> for ShortIdServerSpec {
    fn from(dto: ShortIdServerRequestDto) -> Self {
        Self {
            nanoid: dto.nanoid,
            ttl: dto.ttl,
        }
    }
}

/// Response of either `POST /mcp-servers/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct McpServerResponseDto {
    pub url: String,
    pub server_id: String,
    pub message: String,
}

impl From<ServerProvisionResult> for McpServerResponseDto {
    fn from(result: ServerProvisionResult) -> Self {
        Self {
            url: result.url,
            server_id: result.server_id,
            message: SERVER_MESSAGE.to_string(),
        }
    }
}
