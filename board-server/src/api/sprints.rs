//! Sprint REST API handlers.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::json::ApiJson;
use crate::state::AppState;

use board_core::{NewSprint, Sprint, SprintPatch};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

/// Body of a successful sprint deletion: the sprint is gone and
/// `affectedIssues` counts the issues that lost their reference to it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintRemovalResponse {
    pub ok: bool,
    pub removed_sprint_id: String,
    pub affected_issues: u64,
}

/// GET /api/sprints
pub async fn list_sprints(State(state): State<AppState>) -> ApiResult<Json<Vec<Sprint>>> {
    let sprints = state
        .store
        .list_sprints()
        .await
        .map_err(ApiError::from_store)?;
    Ok(Json(sprints))
}

/// POST /api/sprints
pub async fn create_sprint(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<NewSprint>,
) -> ApiResult<(StatusCode, Json<Sprint>)> {
    let sprint = state
        .store
        .create_sprint(draft)
        .await
        .map_err(ApiError::from_store)?;
    Ok((StatusCode::CREATED, Json(sprint)))
}

/// PATCH /api/sprints/{id}
pub async fn update_sprint(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<SprintPatch>,
) -> ApiResult<Json<Sprint>> {
    let sprint = state
        .store
        .update_sprint(&id, patch)
        .await
        .map_err(ApiError::from_store)?;
    Ok(Json(sprint))
}

/// DELETE /api/sprints/{id}
pub async fn delete_sprint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SprintRemovalResponse>> {
    let removal = state
        .store
        .delete_sprint(&id)
        .await
        .map_err(ApiError::from_store)?;
    Ok(Json(SprintRemovalResponse {
        ok: true,
        removed_sprint_id: removal.removed_sprint_id,
        affected_issues: removal.affected_issues,
    }))
}
