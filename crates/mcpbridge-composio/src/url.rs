//! URL construction helpers for the Composio API.
//!
//! Pure functions so every call builds its endpoint the same way. Base URLs
//! may carry a path prefix (`/api/v1`); endpoints are appended to it.

use crate::error::ComposioResult;
use crate::models::ComposioConfig;
use mcpbridge_core::ShortIdKind;
use url::Url;

/// Append path segments to a base URL, percent-encoding each one.
fn join(base: &Url, segments: &[&str]) -> ComposioResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// `GET {v1}/apps/{name}`
pub fn build_app_url(config: &ComposioConfig, app_name: &str) -> ComposioResult<Url> {
    join(&config.api_url, &["apps", app_name])
}

/// `POST {v1}/integrations`
pub fn build_integrations_url(config: &ComposioConfig) -> ComposioResult<Url> {
    join(&config.api_url, &["integrations"])
}

/// `POST {v1}/connectedAccounts`
pub fn build_connected_accounts_url(config: &ComposioConfig) -> ComposioResult<Url> {
    join(&config.api_url, &["connectedAccounts"])
}

/// `GET {v3}/migration/get-nanoid?uuid=..&type=..`
pub fn build_nanoid_url(
    config: &ComposioConfig,
    uuid: &str,
    kind: ShortIdKind,
) -> ComposioResult<Url> {
    let mut url = join(&config.api_v3_url, &["migration", "get-nanoid"])?;
    url.query_pairs_mut()
        .append_pair("uuid", uuid)
        .append_pair("type", kind.as_str());
    Ok(url)
}

/// `POST {v1}/mcp/servers`
pub fn build_v1_servers_url(config: &ComposioConfig) -> ComposioResult<Url> {
    join(&config.api_url, &["mcp", "servers"])
}

/// `POST {v3}/mcp/servers`
pub fn build_v3_servers_url(config: &ComposioConfig) -> ComposioResult<Url> {
    join(&config.api_v3_url, &["mcp", "servers"])
}
