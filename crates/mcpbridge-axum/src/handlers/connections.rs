//! Connection handlers - start an OAuth connection for an app.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use mcpbridge_core::{ConnectionRequest, ContractVersion};

use crate::dto::{ConnectionRequestDto, ConnectionResponseDto};
use crate::error::HttpError;
use crate::state::AppState;

type Created = (StatusCode, Json<ConnectionResponseDto>);

/// Legacy contract: default scopes, returns the connected account id.
pub async fn create_v1(
    State(state): State<AppState>,
    payload: Result<Json<ConnectionRequestDto>, JsonRejection>,
) -> Result<Created, HttpError> {
    create(&state, payload, ContractVersion::V1).await
}

/// Current contract: provider scopes, also returns the short id.
pub async fn create_v3(
    State(state): State<AppState>,
    payload: Result<Json<ConnectionRequestDto>, JsonRejection>,
) -> Result<Created, HttpError> {
    create(&state, payload, ContractVersion::V3).await
}

async fn create(
    state: &AppState,
    payload: Result<Json<ConnectionRequestDto>, JsonRejection>,
    version: ContractVersion,
) -> Result<Created, HttpError> {
    let Json(req) = payload?;
    let request: ConnectionRequest = req.into();
    let result = state.core.connections().create(&request, version).await?;
    Ok((StatusCode::CREATED, Json(result.into())))
}
