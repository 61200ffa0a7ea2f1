use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::common::*;
use server::ccd::CaseDetailsConverter;
use server::parent_case::ParentCaseUpdateHelper;
use shared_types::{AppErrorKind, CaseData, CaseEvent, CaseId};

fn helper(service: Arc<FakeCaseDataService>) -> ParentCaseUpdateHelper {
    ParentCaseUpdateHelper::new(service, CaseDetailsConverter::new())
}

fn child(extra: Value) -> CaseData {
    let mut data = child_case_data();
    if let (Some(base), Some(extra)) = (data.as_object_mut(), extra.as_object()) {
        base.extend(extra.clone());
    }
    let mut case_data: CaseData = serde_json::from_value(data).unwrap();
    case_data.ccd_case_reference = Some(CaseId(CHILD_ID));
    case_data
}

fn summary_state(data: &Value, collection: &str, index: usize) -> Value {
    data[collection][index]["value"]["caseState"].clone()
}

/// Test: Normal parent update.
/// Verifies: one start + one submit on the parent, fixed event, token reused,
/// only the child's summary changes, other parent fields preserved.
#[tokio::test]
async fn test_parent_updated_with_new_state() {
    let service = Arc::new(FakeCaseDataService::new());
    helper(service.clone())
        .update_parent_application_visibility_with_new_state(&child(json!({})), "ORDER_MADE")
        .await
        .unwrap();

    assert_eq!(
        service.start_calls(),
        vec![(CaseId(PARENT_ID), CaseEvent::UpdateCaseWithGaState)]
    );

    let submits = service.submit_calls();
    assert_eq!(submits.len(), 1);
    let (case_id, content) = &submits[0];
    assert_eq!(*case_id, CaseId(PARENT_ID));
    assert_eq!(content.event_token, EVENT_TOKEN);
    assert_eq!(content.event.id, CaseEvent::UpdateCaseWithGaState);

    let data = Value::Object(content.data.clone());
    assert_eq!(summary_state(&data, "generalApplicationsDetails", 0), json!("ORDER_MADE"));
    assert_eq!(
        summary_state(&data, "generalApplicationsDetails", 1),
        json!("AWAITING_JUDICIAL_DECISION")
    );
    assert_eq!(data["claimant1PartyName"], json!("Ada Claimant"));
    assert!(data.get("ccdCaseReference").is_none());
    assert!(data.get("gaDetailsRespondentSol").is_none());
}

/// Test: Uncloaked application.
/// Verifies: its summary is added to the respondent solicitor collection.
#[tokio::test]
async fn test_uncloaked_application_made_visible() {
    let service = Arc::new(FakeCaseDataService::new());
    helper(service.clone())
        .update_parent_application_visibility_with_new_state(
            &child(json!({ "applicationIsUncloakedOnce": "Yes" })),
            "AWAITING_WRITTEN_REPRESENTATIONS",
        )
        .await
        .unwrap();

    let submits = service.submit_calls();
    let data = Value::Object(submits[0].1.data.clone());
    assert_eq!(data["gaDetailsRespondentSol"].as_array().map(Vec::len), Some(1));
    assert_eq!(
        summary_state(&data, "gaDetailsRespondentSol", 0),
        json!("AWAITING_WRITTEN_REPRESENTATIONS")
    );
}

/// Test: Application without a parent link.
/// Verifies: BadRequest and zero platform calls.
#[tokio::test]
async fn test_missing_parent_link_makes_no_calls() {
    let service = Arc::new(FakeCaseDataService::new());
    let mut orphan = child(json!({}));
    orphan.general_app_parent_case_link = None;

    let err = helper(service.clone())
        .update_parent_application_visibility_with_new_state(&orphan, "ORDER_MADE")
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(service.start_calls().is_empty());
    assert!(service.submit_calls().is_empty());
}

/// Test: start_update fails.
/// Verifies: the platform error is returned unchanged and nothing is submitted.
#[tokio::test]
async fn test_start_failure_propagates() {
    let service = Arc::new(FakeCaseDataService::failing_start());
    let err = helper(service.clone())
        .update_parent_application_visibility_with_new_state(&child(json!({})), "ORDER_MADE")
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::UpstreamError);
    assert_eq!(err.message, "Case data service error (503 Service Unavailable)");
    assert!(service.submit_calls().is_empty());
}

/// Test: submit_update fails.
/// Verifies: error returned unchanged, exactly one submit attempted.
#[tokio::test]
async fn test_submit_failure_propagates_without_retry() {
    let service = Arc::new(FakeCaseDataService::failing_submit());
    let err = helper(service.clone())
        .update_parent_application_visibility_with_new_state(&child(json!({})), "ORDER_MADE")
        .await
        .unwrap_err();

    assert_eq!(err.message, "Case data service error (409 Conflict)");
    assert_eq!(service.start_calls().len(), 1);
    assert_eq!(service.submit_calls().len(), 1);
}

/// Test: End of the judge's business process over HTTP.
/// Verifies: the child's current state reaches the parent.
#[tokio::test]
async fn test_end_judge_business_process_updates_parent() {
    let service = Arc::new(FakeCaseDataService::new());
    let app = test_app(service.clone(), Arc::new(FakeNotificationSender::new()));
    let body = callback_body(
        "END_JUDGE_BUSINESS_PROCESS_GASPEC",
        Some("LISTING_FOR_A_HEARING"),
        child_case_data(),
    );

    let (status, response) = post_json(&app, "/cases/callbacks/about-to-submit", &body).await;
    assert_eq!(status, StatusCode::OK, "Callback failed: {:?}", response);

    let submits = service.submit_calls();
    assert_eq!(submits.len(), 1);
    let data = Value::Object(submits[0].1.data.clone());
    assert_eq!(
        summary_state(&data, "generalApplicationsDetails", 0),
        json!("LISTING_FOR_A_HEARING")
    );
}

/// Test: Platform failure during the HTTP callback.
/// Verifies: 502 UpstreamError reaches the caller.
#[tokio::test]
async fn test_end_judge_business_process_surfaces_platform_error() {
    let service = Arc::new(FakeCaseDataService::failing_submit());
    let app = test_app(service, Arc::new(FakeNotificationSender::new()));
    let body = callback_body(
        "END_JUDGE_BUSINESS_PROCESS_GASPEC",
        Some("ORDER_MADE"),
        child_case_data(),
    );

    let (status, response) = post_json(&app, "/cases/callbacks/about-to-submit", &body).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(response["kind"], "UpstreamError");
}
