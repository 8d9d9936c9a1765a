//! Core-owned DTOs for provider operations.
//!
//! These types cross the boundary between `mcpbridge-composio` and the
//! services. They carry only what the workflows need, not the full provider
//! wire format.

use serde::{Deserialize, Serialize};

/// Auth mode string for OAuth2 schemes.
pub const OAUTH2_MODE: &str = "OAUTH2";

/// Name of the auth field holding OAuth scopes.
const SCOPES_FIELD: &str = "scopes";

/// A field declared by an app's auth scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthField {
    pub name: String,
    /// Provider-declared default, either a list or a comma-separated string.
    #[serde(default)]
    pub default: Option<serde_json::Value>,
}

/// One authentication scheme an app supports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthScheme {
    /// e.g. `OAUTH2`, `API_KEY`, `BASIC`
    pub mode: String,
    #[serde(default)]
    pub fields: Vec<AuthField>,
}

/// App metadata as returned by the lookup call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppInfo {
    /// Provider-internal app UUID, used when creating integrations.
    pub app_id: String,
    /// App key, e.g. `gmail`
    pub key: String,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub auth_schemes: Vec<AuthScheme>,
}

impl AppInfo {
    /// Every OAuth2 scheme the app declares, in declaration order.
    pub fn oauth2_schemes(&self) -> impl Iterator<Item = &AuthScheme> {
        self.auth_schemes
            .iter()
            .filter(|scheme| scheme.mode == OAUTH2_MODE)
    }

    /// Default scopes declared by the app's OAuth2 schemes.
    ///
    /// Every OAuth2 scheme is scanned for a `scopes` field; when several
    /// declare one, the last wins. The default may be a JSON array of
    /// strings or a comma-separated string. `None` when no OAuth2 scheme
    /// has a `scopes` field, or the winning default is missing or empty.
    pub fn default_oauth_scopes(&self) -> Option<Vec<String>> {
        let default = self
            .oauth2_schemes()
            .filter_map(|scheme| scheme.fields.iter().find(|field| field.name == SCOPES_FIELD))
            .last()?
            .default
            .as_ref()?;

        let scopes: Vec<String> = match default {
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            serde_json::Value::String(joined) => joined
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            _ => Vec::new(),
        };

        (!scopes.is_empty()).then_some(scopes)
    }
}

/// Parameters for creating an integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIntegration {
    pub app_id: String,
    pub name: String,
    pub auth_mode: String,
    /// OAuth scopes to request; `None` lets the provider use its defaults.
    pub scopes: Option<Vec<String>>,
    /// Always create, never reuse an existing integration.
    pub force_new: bool,
    /// Use the provider's own OAuth client credentials.
    pub use_provider_auth: bool,
}

impl NewIntegration {
    /// An OAuth2 integration using provider-managed credentials, always new.
    pub fn oauth2(app_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            name: name.into(),
            auth_mode: OAUTH2_MODE.to_string(),
            scopes: None,
            force_new: true,
            use_provider_auth: true,
        }
    }

    #[must_use]
    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = Some(scopes);
        self
    }
}

/// A created integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationInfo {
    /// Long-form integration UUID
    pub id: String,
    pub app_id: String,
    pub app_name: String,
}

/// Result of starting an authorization flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionInitiation {
    pub redirect_url: String,
    pub connected_account_id: String,
    /// e.g. `INITIATED`, when the provider reports it.
    pub status: Option<String>,
}

/// Kinds of resources the short-id lookup understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShortIdKind {
    AuthConfig,
    ConnectedAccount,
}

impl ShortIdKind {
    /// Value of the provider's `type` query parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthConfig => "AUTH_CONFIG",
            Self::ConnectedAccount => "CONNECTED_ACCOUNT",
        }
    }
}

/// A resolved short id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortIdInfo {
    pub nanoid: String,
}

/// Body of a provisioning call, one variant per provider API generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerPayload {
    /// Explicit apps and connected accounts (v1).
    Apps {
        name: String,
        apps: Vec<String>,
        connected_account_ids: Vec<String>,
        entity_id: String,
        ttl: String,
    },
    /// A list of short auth-config ids (v3).
    AuthConfigs {
        name: String,
        auth_config_ids: Vec<String>,
        ttl: String,
    },
}

impl ServerPayload {
    pub fn name(&self) -> &str {
        match self {
            Self::Apps { name, .. } | Self::AuthConfigs { name, .. } => name,
        }
    }
}

/// What the provider returned for a provisioning call.
///
/// Both fields are optional on the wire; services reject a result missing
/// either one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionedServer {
    pub url: Option<String>,
    pub server_id: Option<String>,
}
