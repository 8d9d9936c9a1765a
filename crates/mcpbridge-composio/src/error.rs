//! Internal error types for Composio operations.
//!
//! These errors are mapped to core port errors at the boundary (`port.rs`).

use thiserror::Error;

/// Result type alias for Composio operations.
pub type ComposioResult<T> = Result<T, ComposioError>;

/// Errors related to Composio API operations.
#[derive(Debug, Error)]
pub enum ComposioError {
    /// API request failed with an HTTP error status.
    #[error("Composio API request failed with status {status} ({url}): {message}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Upstream body, or the canonical reason when the body is empty
        message: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from Composio API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = ComposioError::ApiRequestFailed {
            status: 401,
            url: "https://backend.composio.dev/api/v1/apps/gmail".to_string(),
            message: "Unauthorized".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("apps/gmail"));
        assert!(msg.contains("Unauthorized"));
    }

    #[test]
    fn test_invalid_response_error_message() {
        let error = ComposioError::InvalidResponse {
            message: "Missing required field 'redirectUrl'".to_string(),
        };
        assert!(error.to_string().contains("redirectUrl"));
    }

    #[test]
    fn test_invalid_url_from_parse_error() {
        let error: ComposioError = url::Url::parse("::").unwrap_err().into();
        assert!(error.to_string().starts_with("Invalid URL"));
    }
}
