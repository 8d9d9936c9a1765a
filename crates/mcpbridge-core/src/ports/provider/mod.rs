//! Provider (Composio) port definitions.
//!
//! This module defines the port trait and DTOs for talking to the provider.
//! The actual implementation lives in `mcpbridge-composio`.

mod client;
mod error;
mod types;

#[cfg(any(test, feature = "test-utils"))]
pub use client::MockProviderPort;
pub use client::ProviderPort;
pub use error::{ProviderError, ProviderResult};
pub use types::{
    AppInfo, AuthField, AuthScheme, ConnectionInitiation, IntegrationInfo, NewIntegration,
    OAUTH2_MODE, ProvisionedServer, ServerPayload, ShortIdInfo, ShortIdKind,
};
