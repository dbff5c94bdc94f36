use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::timecards::adapters::outbound::repository_in_memory::InMemoryTimecardRepository;
use crate::shell::http::router;
use crate::shell::state::AppState;

fn app() -> Router {
    router(AppState::new(Arc::new(InMemoryTimecardRepository::new())))
}

async fn send(
    app: &Router,
    method: Method,
    uri: String,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let request = match body {
        Some(payload) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn action_rels(timecard: &serde_json::Value) -> Vec<String> {
    timecard["actions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["rel"].as_str().unwrap().to_string())
        .collect()
}

fn document_rels(timecard: &serde_json::Value) -> Vec<String> {
    timecard["documentation"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["rel"].as_str().unwrap().to_string())
        .collect()
}

const LINE: &str = r#"{"workDate":"2026-01-05","project":"atlas","hours":8.0}"#;

#[tokio::test]
async fn walks_a_timecard_from_draft_to_approved() {
    let app = app();

    let (status, created) =
        send(&app, Method::POST, "/timesheets".into(), Some(r#"{"person":42}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "Draft");
    assert_eq!(created["employee"], 42);
    assert_eq!(
        action_rels(&created),
        vec!["cancel", "submit", "recordLine", "delete"]
    );
    assert_eq!(document_rels(&created), vec!["transitions"]);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        Method::POST,
        format!("/timesheets/{id}/lines"),
        Some(LINE),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, fetched) = send(&app, Method::GET, format!("/timesheets/{id}"), None).await;
    assert_eq!(document_rels(&fetched), vec!["transitions", "lines"]);

    let (status, _) = send(
        &app,
        Method::POST,
        format!("/timesheets/{id}/submittal"),
        Some(r#"{"person":42}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, submitted) = send(&app, Method::GET, format!("/timesheets/{id}"), None).await;
    assert_eq!(submitted["status"], "Submitted");
    assert_eq!(
        action_rels(&submitted),
        vec!["cancel", "reject", "approve", "return"]
    );
    assert_eq!(
        document_rels(&submitted),
        vec!["transitions", "lines", "submittal"]
    );

    let (status, _) = send(
        &app,
        Method::POST,
        format!("/timesheets/{id}/approval"),
        Some(r#"{"person":99}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, approved) = send(&app, Method::GET, format!("/timesheets/{id}"), None).await;
    assert_eq!(approved["status"], "Approved");
    assert!(action_rels(&approved).is_empty());

    // terminal: a second approval is an invalid transition
    let (status, error) = send(
        &app,
        Method::POST,
        format!("/timesheets/{id}/approval"),
        Some(r#"{"person":99}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["errorCode"], 100);
}

#[tokio::test]
async fn refuses_to_submit_an_empty_timecard() {
    let app = app();
    let (_, created) =
        send(&app, Method::POST, "/timesheets".into(), Some(r#"{"person":42}"#)).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, error) = send(
        &app,
        Method::POST,
        format!("/timesheets/{id}/submittal"),
        Some(r#"{"person":42}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["errorCode"], 101);

    let (_, fetched) = send(&app, Method::GET, format!("/timesheets/{id}"), None).await;
    assert_eq!(fetched["status"], "Draft");
}

#[tokio::test]
async fn refuses_self_approval_and_stays_submitted() {
    let app = app();
    let (_, created) =
        send(&app, Method::POST, "/timesheets".into(), Some(r#"{"person":42}"#)).await;
    let id = created["id"].as_str().unwrap().to_string();

    send(
        &app,
        Method::POST,
        format!("/timesheets/{id}/lines"),
        Some(LINE),
    )
    .await;
    send(
        &app,
        Method::POST,
        format!("/timesheets/{id}/submittal"),
        Some(r#"{"person":42}"#),
    )
    .await;

    let (status, error) = send(
        &app,
        Method::POST,
        format!("/timesheets/{id}/approval"),
        Some(r#"{"person":42}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["errorCode"], 103);

    let (_, fetched) = send(&app, Method::GET, format!("/timesheets/{id}"), None).await;
    assert_eq!(fetched["status"], "Submitted");
}

#[tokio::test]
async fn cancels_then_deletes_while_keeping_the_audit_trail() {
    let app = app();
    let (_, created) =
        send(&app, Method::POST, "/timesheets".into(), Some(r#"{"person":42}"#)).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        Method::POST,
        format!("/timesheets/{id}/cancellation"),
        Some(r#"{"person":42}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, cancelled) = send(&app, Method::GET, format!("/timesheets/{id}"), None).await;
    assert_eq!(cancelled["status"], "Cancelled");
    assert_eq!(action_rels(&cancelled), vec!["delete"]);

    let (status, deleted) = send(
        &app,
        Method::DELETE,
        format!("/timesheets/{id}/deletion"),
        Some(r#"{"person":42}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["status"], "Deleted");

    // the tombstoned timecard drops out of the catalog but keeps its history
    let (_, catalog) = send(&app, Method::GET, "/timesheets".into(), None).await;
    assert_eq!(catalog, serde_json::json!([]));

    let (status, transitions) = send(
        &app,
        Method::GET,
        format!("/timesheets/{id}/transitions"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let order: Vec<_> = transitions
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["document"]["type"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(order, vec!["Entered", "Cancellation", "Deletion"]);
}

#[tokio::test]
async fn returns_a_submitted_timecard_for_rework() {
    let app = app();
    let (_, created) =
        send(&app, Method::POST, "/timesheets".into(), Some(r#"{"person":42}"#)).await;
    let id = created["id"].as_str().unwrap().to_string();

    send(
        &app,
        Method::POST,
        format!("/timesheets/{id}/lines"),
        Some(LINE),
    )
    .await;
    send(
        &app,
        Method::POST,
        format!("/timesheets/{id}/submittal"),
        Some(r#"{"person":42}"#),
    )
    .await;

    let (status, _) = send(
        &app,
        Method::POST,
        format!("/timesheets/{id}/returned"),
        Some(r#"{"person":99}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // back in draft, lines can be edited again
    let (_, fetched) = send(&app, Method::GET, format!("/timesheets/{id}"), None).await;
    assert_eq!(fetched["status"], "Draft");
    let (status, _) = send(
        &app,
        Method::POST,
        format!("/timesheets/{id}/lines"),
        Some(LINE),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn reports_unknown_timesheets_as_not_found() {
    let app = app();
    let id = uuid::Uuid::now_v7();

    let (status, _) = send(&app, Method::GET, format!("/timesheets/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        format!("/timesheets/{id}/submittal"),
        Some(r#"{"person":42}"#),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
