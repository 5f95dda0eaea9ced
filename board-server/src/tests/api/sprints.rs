use crate::tests::common::test_server;

use googletest::prelude::*;
use http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn given_seed_data_when_listing_sprints_then_they_come_back_by_start_date() {
    let (server, _dir) = test_server();

    let response = server.get("/api/sprints").await;

    assert_that!(response.status_code(), eq(StatusCode::OK));
    let sprints: Value = response.json();
    let ids: Vec<&str> = sprints
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_that!(ids, eq(&vec!["sprint-1", "sprint-2"]));
}

#[tokio::test]
async fn given_a_valid_draft_when_creating_a_sprint_then_201_with_defaults() {
    let (server, _dir) = test_server();

    let response = server
        .post("/api/sprints")
        .json(&json!({
            "name": "Sprint 3 - Polish",
            "startDate": "2026-03-11",
            "endDate": "2026-03-25"
        }))
        .await;

    assert_that!(response.status_code(), eq(StatusCode::CREATED));
    let sprint: Value = response.json();
    assert_that!(sprint["state"], eq(&Value::from("planned")));
    assert_that!(sprint["goal"], eq(&Value::from("")));
    assert_that!(
        sprint["id"].as_str().unwrap().starts_with("sprint-"),
        eq(true)
    );

    let listed: Value = server.get("/api/sprints").await.json();
    assert_that!(listed.as_array().unwrap().len(), eq(3));
}

#[tokio::test]
async fn given_a_nameless_draft_when_creating_a_sprint_then_400_with_error() {
    let (server, _dir) = test_server();

    let response = server
        .post("/api/sprints")
        .json(&json!({
            "startDate": "2026-03-11",
            "endDate": "2026-03-25"
        }))
        .await;

    assert_that!(response.status_code(), eq(StatusCode::BAD_REQUEST));
    let body: Value = response.json();
    assert_that!(body["error"].as_str().unwrap(), contains_substring("name"));
}

#[tokio::test]
async fn given_an_inverted_date_range_when_creating_a_sprint_then_400() {
    let (server, _dir) = test_server();

    let response = server
        .post("/api/sprints")
        .json(&json!({
            "name": "Backwards",
            "startDate": "2026-03-25",
            "endDate": "2026-03-11"
        }))
        .await;

    assert_that!(response.status_code(), eq(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn given_an_unknown_sprint_when_patching_then_404_with_error() {
    let (server, _dir) = test_server();

    let response = server
        .patch("/api/sprints/sprint-404")
        .json(&json!({ "name": "Ghost" }))
        .await;

    assert_that!(response.status_code(), eq(StatusCode::NOT_FOUND));
    let body: Value = response.json();
    assert_that!(body["error"].as_str(), some(anything()));
}

#[tokio::test]
async fn given_an_invalid_state_when_patching_then_400() {
    let (server, _dir) = test_server();

    let response = server
        .patch("/api/sprints/sprint-1")
        .json(&json!({ "state": "paused" }))
        .await;

    assert_that!(response.status_code(), eq(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn given_a_partial_patch_when_applied_then_untouched_fields_survive() {
    let (server, _dir) = test_server();

    let response = server
        .patch("/api/sprints/sprint-2")
        .json(&json!({ "state": "active" }))
        .await;

    assert_that!(response.status_code(), eq(StatusCode::OK));
    let sprint: Value = response.json();
    assert_that!(sprint["state"], eq(&Value::from("active")));
    assert_that!(sprint["name"], eq(&Value::from("Sprint 2 - Economy")));
    assert_that!(sprint["startDate"], eq(&Value::from("2026-02-25")));
}

#[tokio::test]
async fn given_referencing_issues_when_deleting_a_sprint_then_they_are_detached() {
    let (server, _dir) = test_server();

    let response = server.delete("/api/sprints/sprint-1").await;

    assert_that!(response.status_code(), eq(StatusCode::OK));
    let body: Value = response.json();
    assert_that!(body["ok"].as_bool(), some(eq(true)));
    assert_that!(body["removedSprintId"], eq(&Value::from("sprint-1")));
    // Seed puts ARBO-1 and ARBO-2 into sprint-1
    assert_that!(body["affectedIssues"].as_u64(), some(eq(2)));

    let issue: Value = server.get("/api/issues/ARBO-1").await.json();
    assert_that!(issue["sprintId"], eq(&Value::from("")));

    // The sprint is gone from the listing, the issues are not
    let sprints: Value = server.get("/api/sprints").await.json();
    assert_that!(sprints.as_array().unwrap().len(), eq(1));
    let issues: Value = server.get("/api/issues").await.json();
    assert_that!(issues.as_array().unwrap().len(), eq(3));
}

#[tokio::test]
async fn given_an_unknown_sprint_when_deleting_then_404() {
    let (server, _dir) = test_server();

    let response = server.delete("/api/sprints/sprint-404").await;

    assert_that!(response.status_code(), eq(StatusCode::NOT_FOUND));
}
