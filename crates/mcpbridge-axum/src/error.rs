//! Axum-specific error types and mappings.
//!
//! This module provides the HTTP error type for the Axum adapter and the
//! mapping from `CoreError` to status codes and the `{detail, type}` body.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mcpbridge_core::{CoreError, ProviderError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
///
/// Every variant carries the original message, which is returned verbatim
/// as `detail`.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request body missing, malformed, or failing field validation.
    #[error("{0}")]
    Validation(String),

    /// The requested app cannot be used as asked (no default scopes).
    #[error("{0}")]
    Configuration(String),

    /// The provider answered 404.
    #[error("{0}")]
    UpstreamNotFound(String),

    /// The provider failed or answered with an unexpected status.
    #[error("{0}")]
    Upstream(String),

    /// The provider returned a server URL with no `server` segment.
    #[error("{0}")]
    MalformedUpstreamUrl(String),

    /// The provider created a server but omitted its URL or id.
    #[error("{0}")]
    Provisioning(String),

    /// Internal server error.
    #[error("{0}")]
    Internal(String),
}

impl HttpError {
    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Configuration(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamNotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) | Self::MalformedUpstreamUrl(_) | Self::Provisioning(_) => {
                StatusCode::BAD_GATEWAY
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable error type discriminant for client-side handling.
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::UpstreamNotFound(_) => "UPSTREAM_NOT_FOUND",
            Self::Upstream(_) => "UPSTREAM_ERROR",
            Self::MalformedUpstreamUrl(_) => "MALFORMED_UPSTREAM_URL",
            Self::Provisioning(_) => "PROVISIONING_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
    #[serde(rename = "type")]
    error_type: &'static str,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_type = self.error_type();
        let detail = self.to_string();

        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), error_type, %detail, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error_type, %detail, "Request rejected");
        }

        let body = ErrorBody { detail, error_type };
        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        let detail = err.to_string();
        match err {
            CoreError::Validation(_) => Self::Validation(detail),
            CoreError::Configuration(_) => Self::Configuration(detail),
            CoreError::Upstream(ProviderError::NotFound { .. }) => Self::UpstreamNotFound(detail),
            // A bad adapter base URL is our misconfiguration, not the provider's
            CoreError::Upstream(ProviderError::Configuration { .. }) => Self::Internal(detail),
            CoreError::Upstream(_) => Self::Upstream(detail),
            CoreError::MalformedUpstreamUrl { .. } => Self::MalformedUpstreamUrl(detail),
            CoreError::Provisioning(_) => Self::Provisioning(detail),
            CoreError::Internal(_) => Self::Internal(detail),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}
