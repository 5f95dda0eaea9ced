use crate::api::error::{ApiError, Result as ApiResult};
use crate::state::AppState;

use board_core::Project;

use axum::{Json, extract::State};

/// GET /api/project - metadata of the single project
pub async fn get_project(State(state): State<AppState>) -> ApiResult<Json<Project>> {
    let project = state.store.project().await.map_err(ApiError::from_store)?;
    Ok(Json(project))
}
