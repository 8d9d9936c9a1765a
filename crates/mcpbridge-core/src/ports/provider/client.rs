//! Provider client port trait.

use super::error::ProviderResult;
use super::types::{
    AppInfo, ConnectionInitiation, IntegrationInfo, NewIntegration, ProvisionedServer,
    ServerPayload, ShortIdInfo, ShortIdKind,
};
use async_trait::async_trait;

/// Port trait for the provider's REST API.
///
/// Each method is exactly one outbound call. Implementations never retry;
/// a failed call surfaces immediately as a `ProviderError` carrying the
/// upstream message.
///
/// # Design
///
/// - Uses core-owned DTOs, not provider wire types
/// - Async methods for network operations
/// - Object-safe so services can hold `Arc<dyn ProviderPort>`
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait ProviderPort: Send + Sync {
    /// Look up an app (and its declared auth schemes) by key.
    async fn lookup_app(&self, name: &str) -> ProviderResult<AppInfo>;

    /// Create an integration (auth config) for an app.
    async fn create_integration(&self, spec: &NewIntegration) -> ProviderResult<IntegrationInfo>;

    /// Start an authorization flow for `entity_id` against an integration.
    async fn initiate_connection(
        &self,
        integration_id: &str,
        entity_id: &str,
    ) -> ProviderResult<ConnectionInitiation>;

    /// Translate a long-form UUID into the provider's short id.
    async fn resolve_short_id(&self, uuid: &str, kind: ShortIdKind) -> ProviderResult<ShortIdInfo>;

    /// Provision a hosted MCP server.
    ///
    /// Returns whatever the provider sent back; checking that the URL and id
    /// are actually present is the caller's job.
    async fn provision_server(&self, payload: &ServerPayload) -> ProviderResult<ProvisionedServer>;
}
