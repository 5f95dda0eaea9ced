use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::json::ApiJson;
use crate::state::AppState;

use board_core::{Comment, NewComment};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// POST /api/issues/{id}/comments - comments are append-only
pub async fn create_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(draft): ApiJson<NewComment>,
) -> ApiResult<(StatusCode, Json<Comment>)> {
    let comment = state
        .store
        .add_comment(&id, draft)
        .await
        .map_err(ApiError::from_store)?;
    Ok((StatusCode::CREATED, Json(comment)))
}
