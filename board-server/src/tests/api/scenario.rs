//! One full board session end to end: plan a sprint, work an issue inside
//! it, discuss it, then unwind everything and watch the cascades land.

use crate::tests::common::test_server;

use googletest::prelude::*;
use http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn given_a_fresh_board_when_running_a_full_session_then_every_step_holds() {
    let (server, _dir) = test_server();

    // Plan a sprint
    let sprint: Value = server
        .post("/api/sprints")
        .json(&json!({
            "name": "Sprint 3 - Hardening",
            "startDate": "2026-02-11",
            "endDate": "2026-02-25"
        }))
        .await
        .json();
    let sprint_id = sprint["id"].as_str().unwrap().to_string();

    // Open an issue inside it
    let created = server
        .post("/api/issues")
        .json(&json!({
            "title": "Harden session storage",
            "type": "Task",
            "status": "To Do",
            "priority": "Medium",
            "storyPoints": 1,
            "sprintId": sprint_id
        }))
        .await;
    assert_that!(created.status_code(), eq(StatusCode::CREATED));
    let issue: Value = created.json();
    let issue_id = issue["id"].as_str().unwrap().to_string();

    // Start working it
    let patched = server
        .patch(&format!("/api/issues/{issue_id}"))
        .json(&json!({ "status": "In Progress" }))
        .await;
    assert_that!(patched.status_code(), eq(StatusCode::OK));

    // Leave a note
    let commented = server
        .post(&format!("/api/issues/{issue_id}/comments"))
        .json(&json!({ "author": "Jasmine", "body": "Half way there." }))
        .await;
    assert_that!(commented.status_code(), eq(StatusCode::CREATED));

    // Tear the sprint down; the issue must survive, detached
    let removal: Value = server
        .delete(&format!("/api/sprints/{sprint_id}"))
        .await
        .json();
    assert_that!(removal["affectedIssues"].as_u64().unwrap() >= 1, eq(true));

    let detached: Value = server.get(&format!("/api/issues/{issue_id}")).await.json();
    assert_that!(detached["sprintId"], eq(&Value::from("")));
    assert_that!(detached["status"], eq(&Value::from("In Progress")));
    assert_that!(detached["comments"].as_array().unwrap().len(), eq(1));

    // Finally delete the issue itself
    let deleted = server.delete(&format!("/api/issues/{issue_id}")).await;
    assert_that!(deleted.status_code(), eq(StatusCode::OK));

    let gone = server.get(&format!("/api/issues/{issue_id}")).await;
    assert_that!(gone.status_code(), eq(StatusCode::NOT_FOUND));
}
