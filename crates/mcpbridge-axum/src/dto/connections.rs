//! Connection DTOs.

use mcpbridge_core::{ConnectionRequest, ConnectionResult};
use serde::{Deserialize, Serialize};

/// Fixed success message for connection responses.
pub const CONNECTION_MESSAGE: &str = "Connection initiated successfully";

/// Body of `POST /connections/`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionRequestDto {
    pub app_name: String,
}

impl From<ConnectionRequestDto> for ConnectionRequest {
    fn from(dto: ConnectionRequestDto) -> Self {
        Self::new(dto.app_name)
    }
}

/// Response of `POST /connections/`.
///
/// `nanoid` is only present on the v3 contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionResponseDto {
    pub redirect_url: String,
    pub connected_account_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub nanoid: Option<String>,
    pub message: String,
}

impl From<ConnectionResult> for ConnectionResponseDto {
    fn from(result: ConnectionResult) -> Self {
        Self {
            redirect_url: result.redirect_url,
            connected_account_id: result.connected_account_id,
            nanoid: result.short_id,
            message: CONNECTION_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(short_id: Option<&str>) -> ConnectionResult {
        ConnectionResult {
            redirect_url: "https://accounts.google.com/auth".to_string(),
            connected_account_id: "ca-1".to_string(),
            integration_id: "int-1".to_string(),
            short_id: short_id.map(String::from),
        }
    }

    #[test]
    fn test_v1_response_has_no_nanoid_key() {
        let json = serde_json::to_value(ConnectionResponseDto::from(result(None))).unwrap();
        assert!(json.get("nanoid").is_none());
        assert_eq!(json["message"], CONNECTION_MESSAGE);
    }

    #[test]
    fn test_v3_response_carries_nanoid() {
        let json = serde_json::to_value(ConnectionResponseDto::from(result(Some("ac_1")))).unwrap();
        assert_eq!(json["nanoid"], "ac_1");
        assert_eq!(json["connected_account_id"], "ca-1");
    }
}
