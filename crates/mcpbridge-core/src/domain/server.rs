//! MCP server provisioning types.

use serde::{Deserialize, Serialize};

use super::connection::DEFAULT_ENTITY_ID;
use crate::ports::CoreError;

/// Time-to-live the provider understands as "keep forever".
pub const DEFAULT_TTL: &str = "no expiration";

/// A fully caller-specified server (v1 contract).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomServerSpec {
    pub name: String,
    pub apps: Vec<String>,
    pub connected_account_ids: Vec<String>,
    pub entity_id: String,
    pub ttl: String,
}

impl CustomServerSpec {
    /// Build a spec with the default entity and no expiration.
    pub fn new(
        name: impl Into<String>,
        apps: Vec<String>,
        connected_account_ids: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            apps,
            connected_account_ids,
            entity_id: DEFAULT_ENTITY_ID.to_string(),
            ttl: DEFAULT_TTL.to_string(),
        }
    }

    fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("name must not be empty".to_string()));
        }
        non_empty_list("apps", &self.apps)?;
        non_empty_list("connected_account_ids", &self.connected_account_ids)
    }
}

/// A server built from a single short auth-config id (v3 contract).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortIdServerSpec {
    pub nanoid: String,
    pub ttl: String,
}

impl ShortIdServerSpec {
    pub fn new(nanoid: impl Into<String>) -> Self {
        Self {
            nanoid: nanoid.into(),
            ttl: DEFAULT_TTL.to_string(),
        }
    }

    fn validate(&self) -> Result<(), CoreError> {
        if self.nanoid.trim().is_empty() {
            return Err(CoreError::Validation("nanoid must not be empty".to_string()));
        }
        Ok(())
    }
}

/// The two mutually exclusive ways of asking for a server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerProvisionRequest {
    Custom(CustomServerSpec),
    ShortId(ShortIdServerSpec),
}

impl ServerProvisionRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Self::Custom(spec) => spec.validate(),
            Self::ShortId(spec) => spec.validate(),
        }
    }
}

/// A provisioned server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerProvisionResult {
    /// URL clients should use (normalized for short-id servers).
    pub url: String,
    pub server_id: String,
    /// URL exactly as the provider returned it.
    pub provider_url: String,
}

fn non_empty_list(field: &str, values: &[String]) -> Result<(), CoreError> {
    if values.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(CoreError::Validation(format!(
            "{field} must not contain empty entries"
        )));
    }
    Ok(())
}
