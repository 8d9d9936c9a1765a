#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    ConnectionRequest, ConnectionResult, ContractVersion, CustomServerSpec, DEFAULT_ENTITY_ID,
    DEFAULT_NAME_LENGTH, DEFAULT_TTL, ServerProvisionRequest, ServerProvisionResult,
    ShortIdServerSpec, generate_name, generate_name_with_length, normalize_server_url,
};
pub use ports::{
    AppInfo, AuthField, AuthScheme, ConnectionInitiation, CoreError, IntegrationInfo,
    NewIntegration, ProviderError, ProviderPort, ProviderResult, ProvisionedServer,
    ServerPayload, ShortIdInfo, ShortIdKind,
};
#[cfg(any(test, feature = "test-utils"))]
pub use ports::MockProviderPort;
pub use services::{AppCore, ConnectionService, McpServerService};
pub use settings::{
    DEFAULT_API_URL, DEFAULT_API_V3_URL, DEFAULT_BIND_ADDR, DEFAULT_LOG_LEVEL,
    DEFAULT_MCP_PUBLIC_URL, DEFAULT_TIMEOUT_SECS, Settings, SettingsError,
};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
