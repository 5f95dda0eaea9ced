use crate::tests::common::test_server;

use googletest::prelude::*;
use http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn given_seed_data_when_listing_issues_then_comments_ride_along() {
    let (server, _dir) = test_server();

    let response = server.get("/api/issues").await;

    assert_that!(response.status_code(), eq(StatusCode::OK));
    let issues: Value = response.json();
    let issues = issues.as_array().unwrap();
    assert_that!(issues.len(), eq(3));

    let with_comment = issues
        .iter()
        .find(|i| i["id"] == "ARBO-2")
        .expect("seed issue missing");
    assert_that!(with_comment["comments"].as_array().unwrap().len(), eq(1));
    assert_that!(
        with_comment["comments"][0]["author"],
        eq(&Value::from("Raissa"))
    );
}

#[tokio::test]
async fn given_status_filter_when_listing_then_only_listed_statuses_return() {
    let (server, _dir) = test_server();

    let response = server
        .get("/api/issues")
        .add_query_param("status", "Done,Backlog")
        .await;

    let issues: Value = response.json();
    let issues = issues.as_array().unwrap();
    assert_that!(issues.len(), eq(1));
    assert_that!(issues[0]["id"], eq(&Value::from("ARBO-3")));
}

#[tokio::test]
async fn given_lowercased_assignee_filter_when_listing_then_it_still_matches() {
    let (server, _dir) = test_server();

    let response = server
        .get("/api/issues")
        .add_query_param("assignee", "bruno")
        .await;

    let issues: Value = response.json();
    assert_that!(issues.as_array().unwrap().len(), eq(1));
    assert_that!(issues[0]["id"], eq(&Value::from("ARBO-1")));
}

#[tokio::test]
async fn given_search_term_when_listing_then_labels_are_searched_too() {
    let (server, _dir) = test_server();

    let response = server
        .get("/api/issues")
        .add_query_param("search", "economy")
        .await;

    let issues: Value = response.json();
    assert_that!(issues.as_array().unwrap().len(), eq(1));
    assert_that!(issues[0]["id"], eq(&Value::from("ARBO-3")));
}

#[tokio::test]
async fn given_combined_filters_when_listing_then_they_are_conjunctive() {
    let (server, _dir) = test_server();

    // sprint-1 holds ARBO-1 (In Progress) and ARBO-2 (To Do)
    let response = server
        .get("/api/issues")
        .add_query_param("sprintId", "sprint-1")
        .add_query_param("status", "To Do")
        .await;

    let issues: Value = response.json();
    assert_that!(issues.as_array().unwrap().len(), eq(1));
    assert_that!(issues[0]["id"], eq(&Value::from("ARBO-2")));
}

#[tokio::test]
async fn given_an_unknown_issue_when_fetching_then_404_with_error() {
    let (server, _dir) = test_server();

    let response = server.get("/api/issues/ARBO-404").await;

    assert_that!(response.status_code(), eq(StatusCode::NOT_FOUND));
    let body: Value = response.json();
    assert_that!(body["error"].as_str(), some(anything()));
}

#[tokio::test]
async fn given_a_minimal_draft_when_creating_then_sentinels_and_counter_apply() {
    let (server, _dir) = test_server();

    let response = server
        .post("/api/issues")
        .json(&json!({
            "title": "Tune drop rates",
            "type": "Task",
            "status": "Backlog",
            "priority": "Low"
        }))
        .await;

    assert_that!(response.status_code(), eq(StatusCode::CREATED));
    let issue: Value = response.json();
    assert_that!(issue["id"], eq(&Value::from("ARBO-4")));
    assert_that!(issue["assignee"], eq(&Value::from("Unassigned")));
    assert_that!(issue["reporter"], eq(&Value::from("Antonio - PM")));
    assert_that!(issue["storyPoints"].as_f64(), some(eq(0.0)));
    assert_that!(issue["comments"].as_array().unwrap().len(), eq(0));
}

#[tokio::test]
async fn given_a_missing_title_when_creating_then_400_lists_the_problem() {
    let (server, _dir) = test_server();

    let response = server
        .post("/api/issues")
        .json(&json!({
            "type": "Task",
            "status": "Backlog",
            "priority": "Low"
        }))
        .await;

    assert_that!(response.status_code(), eq(StatusCode::BAD_REQUEST));
    let body: Value = response.json();
    let errors = body["errors"].as_array().unwrap();
    assert_that!(errors.len(), eq(1));
    assert_that!(errors[0].as_str().unwrap(), contains_substring("title"));
}

#[tokio::test]
async fn given_oversized_story_points_when_creating_then_400() {
    let (server, _dir) = test_server();

    let response = server
        .post("/api/issues")
        .json(&json!({
            "title": "Pointy",
            "type": "Task",
            "status": "Backlog",
            "priority": "Low",
            "storyPoints": 150
        }))
        .await;

    assert_that!(response.status_code(), eq(StatusCode::BAD_REQUEST));
    let body: Value = response.json();
    assert_that!(
        body["errors"][0].as_str().unwrap(),
        contains_substring("storyPoints")
    );
}

#[tokio::test]
async fn given_csv_labels_when_creating_then_they_arrive_as_a_list() {
    let (server, _dir) = test_server();

    let response = server
        .post("/api/issues")
        .json(&json!({
            "title": "Label me",
            "type": "Task",
            "status": "Backlog",
            "priority": "Low",
            "labels": "backend, economy "
        }))
        .await;

    let issue: Value = response.json();
    let labels: Vec<&str> = issue["labels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l.as_str().unwrap())
        .collect();
    assert_that!(labels, eq(&vec!["backend", "economy"]));
}

#[tokio::test]
async fn given_a_status_patch_when_reading_back_then_the_change_sticks() {
    let (server, _dir) = test_server();

    let before: Value = server.get("/api/issues/ARBO-1").await.json();

    let response = server
        .patch("/api/issues/ARBO-1")
        .json(&json!({ "status": "In Review" }))
        .await;
    assert_that!(response.status_code(), eq(StatusCode::OK));

    let after: Value = server.get("/api/issues/ARBO-1").await.json();
    assert_that!(after["status"], eq(&Value::from("In Review")));
    assert_that!(after["title"], eq(&before["title"]));
    assert_that!(
        after["updatedAt"].as_str().unwrap() > before["updatedAt"].as_str().unwrap(),
        eq(true)
    );
}

#[tokio::test]
async fn given_a_bad_enum_patch_when_updating_then_400_with_errors() {
    let (server, _dir) = test_server();

    let response = server
        .patch("/api/issues/ARBO-1")
        .json(&json!({ "priority": "Urgent" }))
        .await;

    assert_that!(response.status_code(), eq(StatusCode::BAD_REQUEST));
    let body: Value = response.json();
    assert_that!(body["errors"].as_array().unwrap().len(), eq(1));
}

#[tokio::test]
async fn given_an_unknown_issue_when_patching_then_404() {
    let (server, _dir) = test_server();

    let response = server
        .patch("/api/issues/ARBO-404")
        .json(&json!({ "status": "Done" }))
        .await;

    assert_that!(response.status_code(), eq(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn given_an_issue_when_deleting_then_it_and_its_comments_are_gone() {
    let (server, _dir) = test_server();

    let response = server.delete("/api/issues/ARBO-2").await;

    assert_that!(response.status_code(), eq(StatusCode::OK));
    let body: Value = response.json();
    assert_that!(body["ok"].as_bool(), some(eq(true)));
    assert_that!(body["removedId"], eq(&Value::from("ARBO-2")));

    let gone = server.get("/api/issues/ARBO-2").await;
    assert_that!(gone.status_code(), eq(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn given_a_new_assignee_when_creating_then_meta_users_grow() {
    let (server, _dir) = test_server();

    server
        .post("/api/issues")
        .json(&json!({
            "title": "Staffed",
            "type": "Task",
            "status": "Backlog",
            "priority": "Low",
            "assignee": "Zoe"
        }))
        .await;

    let meta: Value = server.get("/api/meta").await.json();
    let users: Vec<&str> = meta["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u.as_str().unwrap())
        .collect();
    assert_that!(users, contains(eq(&"Zoe")));
}
