//! Connection workflow types.

use serde::{Deserialize, Serialize};

use crate::ports::CoreError;

/// Entity every connection is created under.
pub const DEFAULT_ENTITY_ID: &str = "default";

/// Request to connect an external app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRequest {
    /// Provider app key, e.g. `gmail`.
    pub app_name: String,
}

impl ConnectionRequest {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// Reject blank app names.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.app_name.trim().is_empty() {
            return Err(CoreError::Validation("app_name must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Outcome of a successful connection workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionResult {
    /// Where the end user must go to authorize the app.
    pub redirect_url: String,
    /// Provider id of the pending connected account.
    pub connected_account_id: String,
    /// Long-form id of the integration created for this connection.
    pub integration_id: String,
    /// Short auth-config id (v3 only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_blank_app() {
        assert!(ConnectionRequest::new("gmail").validate().is_ok());
        assert!(matches!(
            ConnectionRequest::new("  ").validate(),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_short_id_omitted_when_absent() {
        let result = ConnectionResult {
            redirect_url: "https://accounts.google.com/o/oauth2".to_string(),
            connected_account_id: "ca_1".to_string(),
            integration_id: "int_1".to_string(),
            short_id: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("short_id").is_none());
    }
}
