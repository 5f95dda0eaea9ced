use crate::api::{comments, health, issues, meta, project, sprints};
use crate::state::AppState;

use std::path::Path;

use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Build the application router with all endpoints.
///
/// Everything under /api is JSON; any other path falls through to the
/// static board UI so deep links into the single-page app resolve.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/meta", get(meta::meta))
        .route("/api/project", get(project::get_project))
        .route(
            "/api/sprints",
            get(sprints::list_sprints).post(sprints::create_sprint),
        )
        .route(
            "/api/sprints/{id}",
            patch(sprints::update_sprint).delete(sprints::delete_sprint),
        )
        .route(
            "/api/issues",
            get(issues::list_issues).post(issues::create_issue),
        )
        .route(
            "/api/issues/{id}",
            get(issues::get_issue)
                .patch(issues::update_issue)
                .delete(issues::delete_issue),
        )
        .route("/api/issues/{id}/comments", post(comments::create_comment))
        // Add shared state
        .with_state(state)
        // Static board UI fallback
        .fallback_service(spa)
        // CORS middleware (allow all origins for the local board UI)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
