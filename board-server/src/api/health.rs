use crate::state::AppState;

use axum::{Json, extract::State};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    /// Name of the active storage provider
    pub provider: &'static str,
    pub timestamp: String,
}

/// GET /api/health - liveness plus the active provider name
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        provider: state.store.provider().as_str(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
