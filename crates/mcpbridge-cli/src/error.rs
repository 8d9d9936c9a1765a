//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CoreError` to exit codes and user-facing messages.

use mcpbridge_core::{CoreError, ProviderError, SettingsError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// General failure.
    #[error("{0}")]
    Core(String),

    /// Argument or input validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error (missing API key, bad base URL, unusable app).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The provider failed or could not be reached.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The provider answered with data we could not use.
    #[error("Unexpected provider data: {0}")]
    Data(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Data(_) => 65,     // EX_DATAERR
            Self::Upstream(_) => 69, // EX_UNAVAILABLE
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::Arguments(msg),
            CoreError::Configuration(msg) => Self::Config(msg),
            CoreError::Upstream(ProviderError::Configuration { message }) => Self::Config(message),
            CoreError::Upstream(provider_err) => Self::Upstream(provider_err.to_string()),
            err @ (CoreError::MalformedUpstreamUrl { .. } | CoreError::Provisioning(_)) => {
                Self::Data(err.to_string())
            }
            CoreError::Internal(msg) => Self::Core(msg),
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_is_usage_error() {
        let err: CliError = CoreError::Validation("app_name must not be empty".into()).into();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("app_name"));
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let err: CliError = SettingsError::MissingApiKey.into();
        assert_eq!(err.exit_code(), 78);
        assert!(err.to_string().contains("API_KEY"));
    }

    #[test]
    fn test_provider_failures() {
        let not_found: CliError = CoreError::Upstream(ProviderError::NotFound {
            message: "App not found: gmial".into(),
        })
        .into();
        let bad_base: CliError = CoreError::Upstream(ProviderError::Configuration {
            message: "relative URL without a base".into(),
        })
        .into();

        assert_eq!(not_found.exit_code(), 69);
        assert!(not_found.to_string().contains("gmial"));
        assert_eq!(bad_base.exit_code(), 78);
    }

    #[test]
    fn test_unusable_provider_data() {
        let err: CliError = CoreError::MalformedUpstreamUrl {
            url: "https://host/foo/bar".into(),
        }
        .into();
        assert_eq!(err.exit_code(), 65);
        assert!(err.to_string().contains("https://host/foo/bar"));
    }
}
