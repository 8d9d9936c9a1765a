//! HTTP backend abstraction for the Composio API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and makes exactly one attempt per call.

use crate::error::{ComposioError, ComposioResult};
use crate::models::ComposioConfig;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Header carrying the static API key on every call.
pub const API_KEY_HEADER: &str = "x-api-key";

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that exchange JSON with the Composio API.
///
/// This is an implementation detail - external code should use the
/// `ProviderPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET a URL (query already applied) and deserialize the body.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ComposioResult<T>;

    /// POST a JSON body to a URL and deserialize the answer.
    async fn post_json<P: Serialize + Sync, T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        payload: &P,
    ) -> ComposioResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// This is an implementation detail - external code should use
/// `DefaultComposioClient` through the `ProviderPort` trait.
pub struct ReqwestBackend {
    client: reqwest::Client,
    api_key: String,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ComposioConfig) -> ComposioResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
        })
    }

    /// Send a request and decode a 2xx body.
    ///
    /// Non-2xx answers carry the upstream body text (or the canonical
    /// reason when the body is empty) so callers can surface it verbatim.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> ComposioResult<T> {
        let response = request.header(API_KEY_HEADER, &self.api_key).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), %url, "Composio request failed");
            return Err(ComposioError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
                message: error_message(status, body),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Prefer the upstream body; fall back to the status reason.
fn error_message(status: reqwest::StatusCode, body: String) -> String {
    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        body
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ComposioResult<T> {
        debug!(%url, "GET");
        self.execute(self.client.get(url.as_str()), url).await
    }

    async fn post_json<P: Serialize + Sync, T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        payload: &P,
    ) -> ComposioResult<T> {
        debug!(%url, "POST");
        self.execute(self.client.post(url.as_str()).json(payload), url)
            .await
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Canned response for the fake backend.
    #[derive(Clone)]
    pub struct CannedResponse {
        pub status: u16,
        pub json: serde_json::Value,
    }

    impl CannedResponse {
        pub fn ok(json: serde_json::Value) -> Self {
            Self { status: 200, json }
        }

        pub fn error(status: u16, message: &str) -> Self {
            Self {
                status,
                json: serde_json::Value::String(message.to_string()),
            }
        }
    }

    /// A request the fake backend saw.
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub method: &'static str,
        pub url: String,
        pub body: Option<serde_json::Value>,
    }

    /// A fake HTTP backend that returns canned responses and records calls.
    ///
    /// Patterns are matched by substring in registration order.
    #[derive(Default)]
    pub struct FakeBackend {
        responses: Vec<(String, CannedResponse)>,
        requests: Mutex<Vec<RecordedRequest>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a canned response for a URL pattern.
        pub fn with_response(mut self, url_contains: &str, response: CannedResponse) -> Self {
            self.responses.push((url_contains.to_string(), response));
            self
        }

        /// Every request seen so far, in order.
        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }

        fn respond<T: DeserializeOwned>(
            &self,
            method: &'static str,
            url: &Url,
            body: Option<serde_json::Value>,
        ) -> ComposioResult<T> {
            self.requests.lock().unwrap().push(RecordedRequest {
                method,
                url: url.to_string(),
                body,
            });

            let response = self
                .responses
                .iter()
                .find(|(pattern, _)| url.as_str().contains(pattern.as_str()))
                .map(|(_, response)| response.clone())
                .unwrap_or_else(|| CannedResponse::error(404, "Not Found"));

            if response.status >= 400 {
                return Err(ComposioError::ApiRequestFailed {
                    status: response.status,
                    url: url.to_string(),
                    message: response.json.as_str().unwrap_or_default().to_string(),
                });
            }
            serde_json::from_value(response.json).map_err(Into::into)
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ComposioResult<T> {
            self.respond("GET", url, None)
        }

        async fn post_json<P: Serialize + Sync, T: DeserializeOwned + Send>(
            &self,
            url: &Url,
            payload: &P,
        ) -> ComposioResult<T> {
            let body = serde_json::to_value(payload)?;
            self.respond("POST", url, Some(body))
        }
    }
}
