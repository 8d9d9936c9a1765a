//! Integration creation.

use mcpbridge_core::NewIntegration;

use crate::error::ComposioResult;
use crate::http::HttpBackend;
use crate::models::{AuthConfigBody, CreateIntegrationRequest, IntegrationResponse};
use crate::url::build_integrations_url;

use super::ComposioClient;

/// Translate the core integration spec into the wire body.
fn to_request(spec: &NewIntegration) -> CreateIntegrationRequest {
    CreateIntegrationRequest {
        name: spec.name.clone(),
        app_id: spec.app_id.clone(),
        auth_scheme: spec.auth_mode.clone(),
        auth_config: spec.scopes.clone().map(|scopes| AuthConfigBody { scopes }),
        use_composio_auth: spec.use_provider_auth,
        force_new_integration: spec.force_new,
    }
}

impl<B: HttpBackend> ComposioClient<B> {
    /// Create an integration for an app.
    pub(crate) async fn post_integration(
        &self,
        spec: &NewIntegration,
    ) -> ComposioResult<IntegrationResponse> {
        let url = build_integrations_url(&self.config)?;
        self.backend.post_json(&url, &to_request(spec)).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::fake_client;
    use super::*;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    #[tokio::test]
    async fn test_create_integration_sends_scopes() {
        let backend = FakeBackend::new().with_response(
            "/integrations",
            CannedResponse::ok(json!({"id": "int-1", "appId": "a1", "appName": "gmail"})),
        );
        let client = fake_client(backend);
        let spec = NewIntegration::oauth2("a1", "gmail_integration")
            .with_scopes(vec!["https://mail.google.com/".to_string()]);

        let created = client.post_integration(&spec).await.unwrap();
        assert_eq!(created.id, "int-1");
        assert_eq!(created.app_name, "gmail");

        let body = client.backend.requests()[0].body.clone().unwrap();
        assert_eq!(
            body,
            json!({
                "name": "gmail_integration",
                "appId": "a1",
                "authScheme": "OAUTH2",
                "authConfig": {"scopes": ["https://mail.google.com/"]},
                "useComposioAuth": true,
                "forceNewIntegration": true
            })
        );
    }

    #[test]
    fn test_to_request_without_scopes_omits_auth_config() {
        let request = to_request(&NewIntegration::oauth2("a1", "n"));
        assert!(request.auth_config.is_none());
    }
}
