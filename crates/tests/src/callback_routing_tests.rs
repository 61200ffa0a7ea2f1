use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::*;

/// Test: Event with no registered handler.
/// Verifies: 404 NotFound naming the event.
#[tokio::test]
async fn test_unknown_event_is_not_found() {
    let app = default_app();
    let body = callback_body("CREATE_GENERAL_APPLICATION_CASE", None, json!({}));

    let (status, response) = post_json(&app, "/cases/callbacks/about-to-submit", &body).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["kind"], "NotFound");
    assert!(response["message"]
        .as_str()
        .unwrap()
        .contains("CREATE_GENERAL_APPLICATION_CASE"));
}

/// Test: Known event used only as an outgoing parent event.
/// Verifies: no handler accepts it.
#[tokio::test]
async fn test_parent_update_event_has_no_callback_handler() {
    let app = default_app();
    let body = callback_body("UPDATE_CASE_WITH_GA_STATE", None, json!({}));

    let (status, _) = post_json(&app, "/cases/callbacks/about-to-submit", &body).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Test: Unknown callback stage in the path.
/// Verifies: 400 BadRequest.
#[tokio::test]
async fn test_invalid_callback_type_is_bad_request() {
    let app = default_app();
    let body = callback_body("MAKE_DECISION", None, json!({}));

    let (status, response) = post_json(&app, "/cases/callbacks/after-submit", &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["kind"], "BadRequest");
}

/// Test: Health endpoint.
/// Verifies: lists every event with a callback handler.
#[tokio::test]
async fn test_health_lists_registered_events() {
    let app = default_app();

    let (status, response) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "ok");
    assert_eq!(
        response["events"],
        json!([
            "START_RESPONDENT_NOTIFICATION_PROCESS_MAKE_DECISION",
            "MAKE_DECISION",
            "END_JUDGE_BUSINESS_PROCESS_GASPEC"
        ])
    );
}
