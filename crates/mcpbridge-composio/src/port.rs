//! Port trait implementation for `ComposioClient`.
//!
//! This module implements the core-owned `ProviderPort` trait for
//! `ComposioClient`, handling the conversion between internal wire types and
//! core DTOs.

use async_trait::async_trait;
use mcpbridge_core::ports::provider::{
    AppInfo, AuthField, AuthScheme, ConnectionInitiation, IntegrationInfo, NewIntegration,
    ProviderError, ProviderPort, ProviderResult, ProvisionedServer, ServerPayload, ShortIdInfo,
    ShortIdKind,
};
use tracing::warn;

use crate::client::ComposioClient;
use crate::error::ComposioError;
use crate::http::HttpBackend;
use crate::models::{AppResponse, ConnectionResponse, IntegrationResponse, ServerResponse};

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ComposioError` to core `ProviderError`.
fn map_error(err: ComposioError) -> ProviderError {
    match err {
        ComposioError::ApiRequestFailed {
            status: 404,
            message,
            ..
        } => ProviderError::NotFound { message },
        ComposioError::ApiRequestFailed {
            status, message, ..
        } => ProviderError::Api { status, message },
        ComposioError::InvalidResponse { message } => ProviderError::InvalidResponse { message },
        ComposioError::Network(e) => ProviderError::Network {
            message: e.to_string(),
        },
        ComposioError::InvalidUrl(e) => ProviderError::Configuration {
            message: e.to_string(),
        },
        ComposioError::JsonParse(e) => ProviderError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Type Conversions
// ============================================================================

fn to_app_info(app: AppResponse) -> AppInfo {
    AppInfo {
        app_id: app.app_id,
        key: app.key,
        name: app.name,
        auth_schemes: app
            .auth_schemes
            .into_iter()
            .map(|scheme| AuthScheme {
                mode: scheme.mode,
                fields: scheme
                    .fields
                    .into_iter()
                    .map(|field| AuthField {
                        name: field.name,
                        default: field.default,
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn to_integration_info(integration: IntegrationResponse) -> IntegrationInfo {
    IntegrationInfo {
        id: integration.id,
        app_id: integration.app_id,
        app_name: integration.app_name,
    }
}

/// A connection without a redirect URL cannot be completed by the user.
fn to_initiation(response: ConnectionResponse) -> ProviderResult<ConnectionInitiation> {
    let redirect_url = response
        .redirect_url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| {
            warn!(
                connected_account_id = %response.connected_account_id,
                "Connection initiated without a redirect URL"
            );
            ProviderError::InvalidResponse {
                message: "Connection response had no redirectUrl".to_string(),
            }
        })?;

    Ok(ConnectionInitiation {
        redirect_url,
        connected_account_id: response.connected_account_id,
        status: response.connection_status,
    })
}

fn to_provisioned(server: ServerResponse) -> ProvisionedServer {
    ProvisionedServer {
        url: server.server_url().map(String::from),
        server_id: server.id,
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> ProviderPort for ComposioClient<B> {
    async fn lookup_app(&self, name: &str) -> ProviderResult<AppInfo> {
        let app = self.get_app(name).await.map_err(|err| match map_error(err) {
            ProviderError::NotFound { message } => ProviderError::NotFound {
                message: format!("App not found: {name} ({message})"),
            },
            other => other,
        })?;
        Ok(to_app_info(app))
    }

    async fn create_integration(&self, spec: &NewIntegration) -> ProviderResult<IntegrationInfo> {
        let integration = self.post_integration(spec).await.map_err(map_error)?;
        Ok(to_integration_info(integration))
    }

    async fn initiate_connection(
        &self,
        integration_id: &str,
        entity_id: &str,
    ) -> ProviderResult<ConnectionInitiation> {
        let response = self
            .post_connection(integration_id, entity_id)
            .await
            .map_err(map_error)?;
        to_initiation(response)
    }

    async fn resolve_short_id(&self, uuid: &str, kind: ShortIdKind) -> ProviderResult<ShortIdInfo> {
        let short = self.get_nanoid(uuid, kind).await.map_err(map_error)?;
        Ok(ShortIdInfo {
            nanoid: short.nanoid,
        })
    }

    async fn provision_server(&self, payload: &ServerPayload) -> ProviderResult<ProvisionedServer> {
        let server = self.create_server(payload).await.map_err(map_error)?;
        Ok(to_provisioned(server))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::fake_client;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    #[test]
    fn test_map_error_404() {
        let err = ComposioError::ApiRequestFailed {
            status: 404,
            url: "https://backend.composio.dev/api/v1/apps/gmial".to_string(),
            message: "Not Found".to_string(),
        };
        match map_error(err) {
            ProviderError::NotFound { message } => assert_eq!(message, "Not Found"),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_map_error_keeps_status_and_body() {
        let err = ComposioError::ApiRequestFailed {
            status: 400,
            url: "https://backend.composio.dev/api/v3/mcp/servers".to_string(),
            message: "{\"error\":\"invalid auth config\"}".to_string(),
        };
        match map_error(err) {
            ProviderError::Api { status, message } => {
                assert_eq!(status, 400);
                assert!(message.contains("invalid auth config"));
            }
            other => panic!("Expected Api, got {other:?}"),
        }
    }

    #[test]
    fn test_map_error_invalid_url_is_configuration() {
        let err = ComposioError::InvalidUrl(url::ParseError::EmptyHost);
        assert!(matches!(map_error(err), ProviderError::Configuration { .. }));
    }

    #[tokio::test]
    async fn test_lookup_app_not_found_names_app() {
        let client = fake_client(FakeBackend::new());
        let err = client.lookup_app("gmial").await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("gmial"));
    }

    #[tokio::test]
    async fn test_lookup_app_converts_schemes() {
        let backend = FakeBackend::new().with_response(
            "/apps/gmail",
            CannedResponse::ok(json!({
                "appId": "a1",
                "key": "gmail",
                "name": "Gmail",
                "auth_schemes": [{
                    "mode": "OAUTH2",
                    "fields": [{"name": "scopes", "default": ["https://mail.google.com/"]}]
                }]
            })),
        );
        let client = fake_client(backend);

        let app = client.lookup_app("gmail").await.unwrap();
        assert_eq!(
            app.default_oauth_scopes(),
            Some(vec!["https://mail.google.com/".to_string()])
        );
    }

    #[tokio::test]
    async fn test_initiation_without_redirect_is_invalid() {
        let backend = FakeBackend::new().with_response(
            "/connectedAccounts",
            CannedResponse::ok(json!({"connectedAccountId": "ca-1"})),
        );
        let client = fake_client(backend);

        let err = ProviderPort::initiate_connection(&client, "int-1", "default")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_provision_server_picks_url_field() {
        let backend = FakeBackend::new().with_response(
            "/mcp/servers",
            CannedResponse::ok(json!({"id": "srv-9", "mcp_url": "https://h/server/srv-9"})),
        );
        let client = fake_client(backend);
        let payload = ServerPayload::AuthConfigs {
            name: "n".to_string(),
            auth_config_ids: vec!["ac_1".to_string()],
            ttl: "no expiration".to_string(),
        };

        let server = client.provision_server(&payload).await.unwrap();
        assert_eq!(server.url.as_deref(), Some("https://h/server/srv-9"));
        assert_eq!(server.server_id.as_deref(), Some("srv-9"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let backend = FakeBackend::new()
            .with_response("get-nanoid", CannedResponse::ok(json!({"unexpected": 1})));
        let client = fake_client(backend);

        let err = client
            .resolve_short_id("int-1", ShortIdKind::AuthConfig)
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse { .. }));
    }
}
