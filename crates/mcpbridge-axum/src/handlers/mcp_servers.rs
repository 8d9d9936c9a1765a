//! MCP server handlers - provision hosted servers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use mcpbridge_core::ServerProvisionRequest;

use crate::dto::{McpServerRequestDto, McpServerResponseDto, ShortIdServerRequestDto};
use crate::error::HttpError;
use crate::state::AppState;

type Created = (StatusCode, Json<McpServerResponseDto>);

/// Legacy contract: explicit apps and connected accounts, raw URL.
pub async fn create_v1(
    State(state): State<AppState>,
    payload: Result<Json<McpServerRequestDto>, JsonRejection>,
) -> Result<Created, HttpError> {
    let Json(req) = payload?;
    provision(&state, ServerProvisionRequest::Custom(req.into())).await
}

/// Current contract: one short auth-config id, normalized SSE URL.
pub async fn create_v3(
    State(state): State<AppState>,
    payload: Result<Json<ShortIdServerRequestDto>, JsonRejection>,
) -> Result<Created, HttpError> {
    let Json(req) = payload?;
    provision(&state, ServerProvisionRequest::ShortId(req.into())).await
}

async fn provision(state: &AppState, request: ServerProvisionRequest) -> Result<Created, HttpError> {
    let result = state.core.mcp_servers().provision(request).await?;
    Ok((StatusCode::CREATED, Json(result.into())))
}
