//! Error types for provider port operations.

use thiserror::Error;

/// Errors from provider port operations.
///
/// Implementation-specific errors (HTTP client, JSON) are mapped to these.
/// Every variant keeps the upstream message so operators can correlate with
/// provider-side logs.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered 404 for the requested resource.
    #[error("Not found on provider: {message}")]
    NotFound {
        /// Upstream status text / body
        message: String,
    },

    /// The provider answered with any other non-2xx status.
    #[error("Provider request failed with status {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Upstream status text / body
        message: String,
    },

    /// Transport-level failure (DNS, TLS, timeout, connection reset).
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The provider answered 2xx but the body was not what we expected.
    #[error("Invalid provider response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The adapter itself is misconfigured (bad base URL).
    #[error("Provider configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl ProviderError {
    /// Upstream HTTP status, when the provider actually answered.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for provider port operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
