//! Shared helpers for mcpbridge-axum router tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mcpbridge_axum::{AxumContext, CorsConfig, create_router};
use mcpbridge_core::{
    AppInfo, AppCore, AuthField, AuthScheme, ConnectionInitiation, IntegrationInfo,
    MockProviderPort, ProvisionedServer, ShortIdInfo,
};
use serde_json::{Value, json};
use tower::ServiceExt;
use url::Url;

/// Public MCP host used by every test router.
pub const TEST_PUBLIC_URL: &str = "https://mcp.composio.dev";

/// Build the full router around a mocked provider.
pub fn router_with(provider: MockProviderPort) -> Router {
    let core = AppCore::new(Arc::new(provider), Url::parse(TEST_PUBLIC_URL).unwrap());
    create_router(AxumContext::new(Arc::new(core)), &CorsConfig::AllowAll)
}

/// POST a JSON body and return the status and parsed JSON response.
pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

/// POST a raw body with a JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub fn gmail_app(scopes: Option<Value>) -> AppInfo {
    AppInfo {
        app_id: "app-uuid-gmail".to_string(),
        key: "gmail".to_string(),
        name: "Gmail".to_string(),
        auth_schemes: vec![AuthScheme {
            mode: "OAUTH2".to_string(),
            fields: vec![AuthField {
                name: "scopes".to_string(),
                default: scopes,
            }],
        }],
    }
}

pub fn gmail_scopes() -> Value {
    json!(["https://mail.google.com/"])
}

pub fn integration() -> IntegrationInfo {
    IntegrationInfo {
        id: "int-uuid-1".to_string(),
        app_id: "app-uuid-gmail".to_string(),
        app_name: "gmail".to_string(),
    }
}

pub fn initiation() -> ConnectionInitiation {
    ConnectionInitiation {
        redirect_url: "https://accounts.google.com/o/oauth2/v2/auth?client_id=abc".to_string(),
        connected_account_id: "ca-uuid-1".to_string(),
        status: Some("INITIATED".to_string()),
    }
}

pub fn short_id() -> ShortIdInfo {
    ShortIdInfo {
        nanoid: "ac_8x2Lp".to_string(),
    }
}

pub fn provisioned(url: &str, id: &str) -> ProvisionedServer {
    ProvisionedServer {
        url: Some(url.to_string()),
        server_id: Some(id.to_string()),
    }
}
