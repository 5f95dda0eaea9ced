use crate::tests::common::test_server;

use googletest::prelude::*;
use http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn given_a_running_server_when_checking_health_then_provider_is_reported() {
    let (server, _dir) = test_server();

    let response = server.get("/api/health").await;

    assert_that!(response.status_code(), eq(StatusCode::OK));
    let body: Value = response.json();
    assert_that!(body["ok"].as_bool(), some(eq(true)));
    assert_that!(body["provider"], eq(&Value::from("local-file")));
    assert_that!(body["timestamp"].as_str(), some(anything()));
}

#[tokio::test]
async fn given_seed_data_when_fetching_meta_then_enums_and_users_are_listed() {
    let (server, _dir) = test_server();

    let response = server.get("/api/meta").await;

    assert_that!(response.status_code(), eq(StatusCode::OK));
    let body: Value = response.json();

    let statuses: Vec<&str> = body["statuses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap())
        .collect();
    assert_that!(
        statuses,
        eq(&vec!["Backlog", "To Do", "In Progress", "In Review", "Done"])
    );

    assert_that!(body["priorities"].as_array().unwrap().len(), eq(5));
    assert_that!(body["types"].as_array().unwrap().len(), eq(4));

    let users = body["users"].as_array().unwrap();
    assert_that!(users.len() >= 7, eq(true));
    assert_that!(users[0], eq(&Value::from("Antonio - PM")));
}

#[tokio::test]
async fn given_seed_data_when_fetching_project_then_key_and_name_match() {
    let (server, _dir) = test_server();

    let response = server.get("/api/project").await;

    assert_that!(response.status_code(), eq(StatusCode::OK));
    let body: Value = response.json();
    assert_that!(body["key"], eq(&Value::from("ARBO")));
    assert_that!(body["name"], eq(&Value::from("ArboGame")));
}

#[tokio::test]
async fn given_a_non_api_path_when_requested_then_the_api_error_shape_is_not_used() {
    let (server, _dir) = test_server();

    // No static assets exist in the test dir; the fallback must still keep
    // /api JSON semantics out of it
    let response = server.get("/some/board/route").await;

    assert_that!(response.status_code() == StatusCode::OK, eq(false));
}
