//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Each contract generation gets its own nested router; the unversioned
//! paths serve the current one.

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Legacy contract routes (nested under `/v1`).
fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/connections", post(handlers::connections::create_v1))
        .route("/connections/", post(handlers::connections::create_v1))
        .route("/mcp-servers", post(handlers::mcp_servers::create_v1))
        .route("/mcp-servers/", post(handlers::mcp_servers::create_v1))
}

/// Current contract routes (nested under `/v3` and merged at the root).
fn v3_routes() -> Router<AppState> {
    Router::new()
        .route("/connections", post(handlers::connections::create_v3))
        .route("/connections/", post(handlers::connections::create_v3))
        .route("/mcp-servers", post(handlers::mcp_servers::create_v3))
        .route("/mcp-servers/", post(handlers::mcp_servers::create_v3))
}

/// Create the main Axum router with all API routes.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`, `{tag}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    let api = Router::new()
        .nest("/v1", v1_routes())
        .nest("/v3", v3_routes())
        .merge(v3_routes())
        .with_state(state);

    Router::new()
        .route("/health", get(health_check))
        .merge(api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
