use axum::http::StatusCode;
use chrono::{Duration, Local, NaiveDate};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::*;
use server::judicial_decision::{
    REQUESTED_MORE_INFO_BY_DATE_IN_PAST, REQUESTED_MORE_INFO_BY_DATE_REQUIRED,
    WRITTEN_REPRESENTATION_DATE_CANNOT_BE_IN_PAST,
};

const MID: &str = "/cases/callbacks/mid";

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn written_representations(option: &str, date_field: &str, date: NaiveDate) -> Value {
    json!({
        "judicialDecision": { "decision": "MAKE_ORDER_FOR_WRITTEN_REPRESENTATIONS" },
        "judicialDecisionMakeOrderForWrittenRepresentations": {
            "writtenOption": option,
            date_field: date.to_string()
        }
    })
}

async fn mid_event_errors(case_data: Value) -> Vec<String> {
    let app = default_app();
    let body = callback_body("MAKE_DECISION", Some("AWAITING_JUDICIAL_DECISION"), case_data);
    let (status, response) = post_json(&app, MID, &body).await;
    assert_eq!(status, StatusCode::OK, "Mid-event callback failed: {:?}", response);
    serde_json::from_value(response["errors"].clone()).unwrap()
}

/// Test: Sequential representations due yesterday.
/// Verifies: the past-date message is returned.
#[tokio::test]
async fn test_sequential_date_in_past_is_rejected() {
    let errors = mid_event_errors(written_representations(
        "SEQUENTIAL_REPRESENTATIONS",
        "writtenSequentialRepresentationsBy",
        today() - Duration::days(1),
    ))
    .await;

    assert_eq!(errors, vec![WRITTEN_REPRESENTATION_DATE_CANNOT_BE_IN_PAST.to_string()]);
}

/// Test: Concurrent representations due today.
/// Verifies: no errors (today is not in the past).
#[tokio::test]
async fn test_concurrent_date_today_is_accepted() {
    let errors = mid_event_errors(written_representations(
        "CONCURRENT_REPRESENTATIONS",
        "writtenConcurrentRepresentationsBy",
        today(),
    ))
    .await;

    assert!(errors.is_empty(), "Unexpected errors: {:?}", errors);
}

/// Test: Concurrent representations due a month ago.
#[tokio::test]
async fn test_concurrent_date_in_past_is_rejected() {
    let errors = mid_event_errors(written_representations(
        "CONCURRENT_REPRESENTATIONS",
        "writtenConcurrentRepresentationsBy",
        today() - Duration::days(30),
    ))
    .await;

    assert_eq!(errors, vec![WRITTEN_REPRESENTATION_DATE_CANNOT_BE_IN_PAST.to_string()]);
}

/// Test: Sequential option selected, but only the concurrent date is stale.
/// Verifies: the other option's date is never inspected.
#[tokio::test]
async fn test_sequential_ignores_concurrent_date() {
    let errors = mid_event_errors(json!({
        "judicialDecision": { "decision": "MAKE_ORDER_FOR_WRITTEN_REPRESENTATIONS" },
        "judicialDecisionMakeOrderForWrittenRepresentations": {
            "writtenOption": "SEQUENTIAL_REPRESENTATIONS",
            "writtenSequentialRepresentationsBy": (today() + Duration::days(14)).to_string(),
            "writtenConcurrentRepresentationsBy": (today() - Duration::days(14)).to_string()
        }
    }))
    .await;

    assert!(errors.is_empty(), "Unexpected errors: {:?}", errors);
}

/// Test: Concurrent option selected, but only the sequential date is stale.
/// Verifies: the other option's date is never inspected.
#[tokio::test]
async fn test_concurrent_ignores_sequential_date() {
    let errors = mid_event_errors(json!({
        "judicialDecision": { "decision": "MAKE_ORDER_FOR_WRITTEN_REPRESENTATIONS" },
        "judicialDecisionMakeOrderForWrittenRepresentations": {
            "writtenOption": "CONCURRENT_REPRESENTATIONS",
            "writtenSequentialRepresentationsBy": (today() - Duration::days(14)).to_string(),
            "writtenConcurrentRepresentationsBy": (today() + Duration::days(14)).to_string()
        }
    }))
    .await;

    assert!(errors.is_empty(), "Unexpected errors: {:?}", errors);
}

/// Test: The platform sends empty collections as `null`.
/// Verifies: the callback is still validated instead of rejected.
#[tokio::test]
async fn test_null_collections_do_not_block_validation() {
    let errors = mid_event_errors(json!({
        "generalAppRespondentSolicitors": null,
        "generalApplicationsDetails": null,
        "judicialDecision": { "decision": "MAKE_ORDER_FOR_WRITTEN_REPRESENTATIONS" },
        "judicialDecisionMakeOrderForWrittenRepresentations": {
            "writtenOption": "SEQUENTIAL_REPRESENTATIONS",
            "writtenSequentialRepresentationsBy": (today() - Duration::days(3)).to_string()
        }
    }))
    .await;

    assert_eq!(errors, vec![WRITTEN_REPRESENTATION_DATE_CANNOT_BE_IN_PAST.to_string()]);
}

/// Test: Judge requests more information without a response date, then with a past one.
#[tokio::test]
async fn test_request_more_info_date_rules() {
    let missing = mid_event_errors(json!({
        "judicialDecision": { "decision": "REQUEST_MORE_INFO" },
        "judicialDecisionRequestMoreInfo": {
            "requestMoreInfoOption": "REQUEST_MORE_INFORMATION",
            "judgeRequestMoreInfoText": "Provide the signed witness statement"
        }
    }))
    .await;
    assert_eq!(missing, vec![REQUESTED_MORE_INFO_BY_DATE_REQUIRED.to_string()]);

    let past = mid_event_errors(json!({
        "judicialDecision": { "decision": "REQUEST_MORE_INFO" },
        "judicialDecisionRequestMoreInfo": {
            "requestMoreInfoOption": "REQUEST_MORE_INFORMATION",
            "judgeRequestMoreInfoByDate": (today() - Duration::days(2)).to_string()
        }
    }))
    .await;
    assert_eq!(past, vec![REQUESTED_MORE_INFO_BY_DATE_IN_PAST.to_string()]);
}

/// Test: Mid-event validation echoes the submitted case data.
#[tokio::test]
async fn test_mid_event_returns_case_data_unchanged() {
    let app = default_app();
    let case_data = written_representations(
        "SEQUENTIAL_REPRESENTATIONS",
        "writtenSequentialRepresentationsBy",
        today() + Duration::days(7),
    );
    let body = callback_body("MAKE_DECISION", None, case_data.clone());

    let (status, response) = post_json(&app, MID, &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"], case_data);
    assert_eq!(response["errors"], json!([]));
}

/// Test: A decision option the platform doesn't know is a malformed payload.
/// Verifies: 400 Bad Request rather than silently passing validation.
#[tokio::test]
async fn test_unknown_written_option_is_bad_request() {
    let app = default_app();
    let body = callback_body(
        "MAKE_DECISION",
        None,
        json!({
            "judicialDecision": { "decision": "MAKE_ORDER_FOR_WRITTEN_REPRESENTATIONS" },
            "judicialDecisionMakeOrderForWrittenRepresentations": { "writtenOption": "ORAL" }
        }),
    );

    let (status, response) = post_json(&app, MID, &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["kind"], "BadRequest");
}
