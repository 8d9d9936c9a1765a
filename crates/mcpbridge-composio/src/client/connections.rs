//! Connection initiation.

use crate::error::ComposioResult;
use crate::http::HttpBackend;
use crate::models::{ConnectionResponse, InitiateConnectionRequest};
use crate::url::build_connected_accounts_url;

use super::ComposioClient;

impl<B: HttpBackend> ComposioClient<B> {
    /// Start an OAuth connection for an entity against an integration.
    pub(crate) async fn post_connection(
        &self,
        integration_id: &str,
        entity_id: &str,
    ) -> ComposioResult<ConnectionResponse> {
        let url = build_connected_accounts_url(&self.config)?;
        let body = InitiateConnectionRequest {
            integration_id: integration_id.to_string(),
            entity_id: entity_id.to_string(),
            data: serde_json::Map::new(),
        };
        self.backend.post_json(&url, &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::fake_client;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    #[tokio::test]
    async fn test_initiate_connection() {
        let backend = FakeBackend::new().with_response(
            "/connectedAccounts",
            CannedResponse::ok(json!({
                "connectedAccountId": "ca-1",
                "redirectUrl": "https://accounts.google.com/auth",
                "connectionStatus": "INITIATED"
            })),
        );
        let client = fake_client(backend);

        let response = client.post_connection("int-1", "default").await.unwrap();
        assert_eq!(response.connected_account_id, "ca-1");
        assert_eq!(response.connection_status.as_deref(), Some("INITIATED"));

        let body = client.backend.requests()[0].body.clone().unwrap();
        assert_eq!(
            body,
            json!({"integrationId": "int-1", "entityId": "default", "data": {}})
        );
    }
}
