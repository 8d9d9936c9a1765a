//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or provider wire types in any signature
//! - One method per outbound call, no hidden retries
//! - Errors carry upstream messages verbatim

pub mod provider;

use thiserror::Error;

#[cfg(any(test, feature = "test-utils"))]
pub use provider::MockProviderPort;
pub use provider::{
    AppInfo, AuthField, AuthScheme, ConnectionInitiation, IntegrationInfo, NewIntegration,
    OAUTH2_MODE, ProviderError, ProviderPort, ProviderResult, ProvisionedServer, ServerPayload,
    ShortIdInfo, ShortIdKind,
};

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used by the workflow services.
/// Adapters map it to their own representation (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed or missing request fields.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The resolved app lacks the auth data the workflow needs
    /// (no OAuth2 scheme, no default scopes).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Any failed provider call.
    #[error(transparent)]
    Upstream(#[from] ProviderError),

    /// A provisioned server URL does not have the expected path shape.
    #[error("Could not extract server ID from URL: {url}")]
    MalformedUpstreamUrl {
        /// The offending URL as received
        url: String,
    },

    /// The provisioning response lacked a required field.
    #[error("Provisioning error: {0}")]
    Provisioning(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
