//! Issue REST API handlers.
//!
//! Creation and update report validation problems as an enumerated
//! `{"errors": [...]}` body; everything else uses the single-error shape.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::json::ApiJson;
use crate::state::AppState;

use board_core::{IssueFilter, IssuePatch, IssueWithComments, NewIssue};

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRemovalResponse {
    pub ok: bool,
    pub removed_id: String,
}

/// GET /api/issues - conjunctive filters, newest first, comments attached
pub async fn list_issues(
    State(state): State<AppState>,
    Query(filter): Query<IssueFilter>,
) -> ApiResult<Json<Vec<IssueWithComments>>> {
    let issues = state
        .store
        .list_issues(filter)
        .await
        .map_err(ApiError::from_store)?;
    Ok(Json(issues))
}

/// GET /api/issues/{id}
pub async fn get_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<IssueWithComments>> {
    let issue = state
        .store
        .get_issue(&id)
        .await
        .map_err(ApiError::from_store)?;
    Ok(Json(issue))
}

/// POST /api/issues
pub async fn create_issue(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<NewIssue>,
) -> ApiResult<(StatusCode, Json<IssueWithComments>)> {
    let issue = state
        .store
        .create_issue(draft)
        .await
        .map_err(ApiError::from_store_list)?;
    Ok((StatusCode::CREATED, Json(issue)))
}

/// PATCH /api/issues/{id}
pub async fn update_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<IssuePatch>,
) -> ApiResult<Json<IssueWithComments>> {
    let issue = state
        .store
        .update_issue(&id, patch)
        .await
        .map_err(ApiError::from_store_list)?;
    Ok(Json(issue))
}

/// DELETE /api/issues/{id} - also drops every comment on the issue
pub async fn delete_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<IssueRemovalResponse>> {
    let removal = state
        .store
        .delete_issue(&id)
        .await
        .map_err(ApiError::from_store)?;
    Ok(Json(IssueRemovalResponse {
        ok: true,
        removed_id: removal.removed_id,
    }))
}
