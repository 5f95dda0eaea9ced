use crate::api::error::{ApiError, Result as ApiResult};
use crate::state::AppState;

use board_core::{IssuePriority, IssueStatus, IssueType};

use axum::{Json, extract::State};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MetaResponse {
    pub statuses: Vec<&'static str>,
    pub priorities: Vec<&'static str>,
    pub types: Vec<&'static str>,
    pub users: Vec<String>,
}

/// GET /api/meta - the fixed enums plus the grown user set
pub async fn meta(State(state): State<AppState>) -> ApiResult<Json<MetaResponse>> {
    let users = state.store.users().await.map_err(ApiError::from_store)?;

    Ok(Json(MetaResponse {
        statuses: IssueStatus::ALL.iter().map(IssueStatus::as_str).collect(),
        priorities: IssuePriority::ALL.iter().map(IssuePriority::as_str).collect(),
        types: IssueType::ALL.iter().map(IssueType::as_str).collect(),
        users,
    }))
}
