use crate::tests::common::test_server;

use googletest::prelude::*;
use http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn given_a_valid_body_when_commenting_then_201_and_the_comment_is_attached() {
    let (server, _dir) = test_server();

    let response = server
        .post("/api/issues/ARBO-1/comments")
        .json(&json!({ "author": "Xavier", "body": "Works on my machine." }))
        .await;

    assert_that!(response.status_code(), eq(StatusCode::CREATED));
    let comment: Value = response.json();
    assert_that!(
        comment["id"].as_str().unwrap().starts_with("comment-"),
        eq(true)
    );
    assert_that!(comment["issueId"], eq(&Value::from("ARBO-1")));

    let issue: Value = server.get("/api/issues/ARBO-1").await.json();
    assert_that!(issue["comments"].as_array().unwrap().len(), eq(1));
}

#[tokio::test]
async fn given_a_blank_author_when_commenting_then_the_default_author_applies() {
    let (server, _dir) = test_server();

    let response = server
        .post("/api/issues/ARBO-1/comments")
        .json(&json!({ "body": "Unattributed note" }))
        .await;

    let comment: Value = response.json();
    assert_that!(comment["author"], eq(&Value::from("Igor")));
}

#[tokio::test]
async fn given_a_blank_body_when_commenting_then_400_with_error() {
    let (server, _dir) = test_server();

    let response = server
        .post("/api/issues/ARBO-1/comments")
        .json(&json!({ "author": "Xavier", "body": "  " }))
        .await;

    assert_that!(response.status_code(), eq(StatusCode::BAD_REQUEST));
    let body: Value = response.json();
    assert_that!(body["error"].as_str().unwrap(), contains_substring("body"));
}

#[tokio::test]
async fn given_an_unknown_issue_when_commenting_then_404() {
    let (server, _dir) = test_server();

    let response = server
        .post("/api/issues/ARBO-404/comments")
        .json(&json!({ "body": "Lost note" }))
        .await;

    assert_that!(response.status_code(), eq(StatusCode::NOT_FOUND));
}
