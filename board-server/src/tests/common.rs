use crate::{AppState, build_router};

use board_store::FileStore;

use std::sync::Arc;

use axum_test::TestServer;
use tempfile::TempDir;

/// A test server over a freshly seeded snapshot in a temp directory.
/// The TempDir must stay alive for the duration of the test.
pub fn test_server() -> (TestServer, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let store = FileStore::new(dir.path().join("data").join("db.json"));
    let state = AppState {
        store: Arc::new(store),
    };

    let router = build_router(state, &dir.path().join("public"));
    let server = TestServer::new(router).expect("Failed to start test server");

    (server, dir)
}
