//! Router Tests
//!
//! Requests through the full router, middleware included, against
//! in-memory collaborators.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use interface_api::{config::ApiConfig, create_router, AppState};
use test_utils::{GeneralPartnerBuilder, PartnershipBuilder, TestHarness, TransactionFixtures};

// ============================================================================
// TEST FIXTURES
// ============================================================================

async fn app() -> (Router, TestHarness) {
    let harness = TestHarness::new();
    harness
        .transaction(TransactionFixtures::registration("txn-1"))
        .await;
    let state = AppState::new(ApiConfig::default(), harness.ports.clone(), Vec::new());
    (create_router(state), harness)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .header("ERIC-Identity", "user-1");
    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

const GENERAL_PARTNERS: &str = "/transactions/txn-1/limited-partnership/general-partner";

// ============================================================================
// TESTS
// ============================================================================

#[tokio::test]
async fn test_healthcheck() {
    let (app, _) = app().await;
    let (status, body) = send(&app, Method::GET, "/healthcheck", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_general_partner_records_the_filer() {
    let (app, _) = app().await;
    let partner = serde_json::to_value(GeneralPartnerBuilder::person().build()).unwrap();

    let (status, body) = send(&app, Method::POST, GENERAL_PARTNERS, Some(partner)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["completed"], true);
    assert_eq!(body["created_by"], "user-1");

    let id = body["id"].as_str().unwrap();
    let (status, body) = send(
        &app,
        Method::GET,
        &format!("{GENERAL_PARTNERS}/{id}/validation-status"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_valid"], true);

    let (status, body) = send(
        &app,
        Method::GET,
        "/transactions/txn-1/limited-partnership/general-partners",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_validation_errors_are_bad_requests() {
    let (app, _) = app().await;
    let mut partner = serde_json::to_value(GeneralPartnerBuilder::person().build()).unwrap();
    partner["forename"] = json!("J@ck");

    let (status, body) = send(&app, Method::POST, GENERAL_PARTNERS, Some(partner)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["location"], "data.forename");
    assert_eq!(errors[0]["type"], "ch:validation");
    assert_eq!(errors[0]["location_type"], "json-path");
}

#[tokio::test]
async fn test_mixed_partner_data_is_rejected() {
    let (app, _) = app().await;
    let partner = json!({ "forename": "Jack", "legal_entity_name": "Acme Holdings" });

    let (status, body) = send(&app, Method::POST, GENERAL_PARTNERS, Some(partner)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Partner cannot have both person and legal entity details"));
}

#[tokio::test]
async fn test_unknown_transaction_is_not_found() {
    let (app, _) = app().await;
    let partner = serde_json::to_value(GeneralPartnerBuilder::person().build()).unwrap();

    let (status, _) = send(
        &app,
        Method::POST,
        "/transactions/txn-unknown/limited-partnership/general-partner",
        Some(partner),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_and_delete_general_partner() {
    let (app, _) = app().await;
    let partner = serde_json::to_value(GeneralPartnerBuilder::person().build()).unwrap();
    let (_, body) = send(&app, Method::POST, GENERAL_PARTNERS, Some(partner)).await;
    let uri = format!("{GENERAL_PARTNERS}/{}", body["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({ "surname": "Smith" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["surname"], "Smith");

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_into_mixed_partner_data_is_a_bad_request() {
    let (app, _) = app().await;
    let partner = serde_json::to_value(GeneralPartnerBuilder::person().build()).unwrap();
    let (_, body) = send(&app, Method::POST, GENERAL_PARTNERS, Some(partner)).await;
    let uri = format!("{GENERAL_PARTNERS}/{}", body["id"].as_str().unwrap());

    let (status, body) = send(
        &app,
        Method::PATCH,
        &uri,
        Some(json!({ "legal_entity_name": "Acme Holdings" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Partner cannot have both person and legal entity details"));

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].get("legal_entity_name").is_none());
}

#[tokio::test]
async fn test_general_partner_filed_under_a_limited_partner_kind_leaves_the_list_intact() {
    let (app, _) = app().await;
    let mut partner = serde_json::to_value(GeneralPartnerBuilder::person().build()).unwrap();
    partner["kind"] = json!("limited-partnership#add-limited-partner-person");

    let (status, _) = send(&app, Method::POST, GENERAL_PARTNERS, Some(partner)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, body) = send(
        &app,
        Method::GET,
        "/transactions/txn-1/limited-partnership/general-partners",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_partnership_costs() {
    let (app, _) = app().await;
    let partnership = serde_json::to_value(PartnershipBuilder::registration().build()).unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/transactions/txn-1/limited-partnership/partnership",
        Some(partnership),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        Method::GET,
        &format!(
            "/transactions/txn-1/limited-partnership/partnership/{}/costs",
            body["id"].as_str().unwrap()
        ),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["amount"], "100.00");
    assert_eq!(body[0]["kind"], "cost#cost");
}

#[tokio::test]
async fn test_filing_round_trip() {
    let (app, _) = app().await;
    let (status, incorporation) = send(
        &app,
        Method::POST,
        "/transactions/txn-1/incorporation/limited-partnership",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(incorporation["kind"], "limited-partnership-registration");
    let id = incorporation["id"].as_str().unwrap();

    let partnership = serde_json::to_value(PartnershipBuilder::registration().build()).unwrap();
    send(
        &app,
        Method::POST,
        "/transactions/txn-1/limited-partnership/partnership",
        Some(partnership),
    )
    .await;
    let partner = serde_json::to_value(GeneralPartnerBuilder::person().build()).unwrap();
    send(&app, Method::POST, GENERAL_PARTNERS, Some(partner)).await;

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/transactions/txn-1/incorporation/limited-partnership/{id}/validation-status"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_valid"], true);

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/private/transactions/txn-1/incorporation/limited-partnership/{id}/filings"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "Register a Limited Partnership");
    assert_eq!(body["data"]["general_partners"].as_array().map(Vec::len), Some(1));
}
