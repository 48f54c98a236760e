use super::AppRouter;
use crate::state::AppState;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use shared::repository::loan::memory::LoanMemoryRepository;
use std::sync::Arc;
use tower::ServiceExt;

const EPSILON: f64 = 1e-4;

fn app() -> (Router, LoanMemoryRepository) {
    let repo = LoanMemoryRepository::new();
    let state = AppState::from_repositories(Arc::new(repo.clone()), Arc::new(repo.clone()));
    (AppRouter::build(state), repo)
}

fn loan_body(loan_id: &str, customer_id: &str, lender_id: &str) -> Value {
    json!({
        "loanId": loan_id,
        "customerId": customer_id,
        "lenderId": lender_id,
        "amount": 10000.0,
        "remainingAmount": 10000.0,
        "paymentDate": "2024-01-15",
        "interestPerDay": 0.01,
        "dueDate": "2024-02-15",
        "penaltyPerDay": 0.01,
        "cancelled": false
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

fn assert_close(value: &Value, expected: f64) {
    let actual = value.as_f64().unwrap();
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

#[tokio::test]
async fn add_then_fetch_loan() {
    let (app, _) = app();

    let (status, created) = post_json(&app, "/loans/add", &loan_body("L-1", "C-1", "LEN-1")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, loan_body("L-1", "C-1", "LEN-1"));

    let (status, fetched) = get(&app, "/loans/L-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["loanId"], "L-1");
    assert_eq!(fetched["paymentDate"], "2024-01-15");

    let (status, all) = get(&app, "/loans/all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn all_is_empty_array_for_empty_store() {
    let (app, _) = app();

    let (status, body) = get(&app, "/loans/all").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn late_payment_is_rejected_and_not_stored() {
    let (app, repo) = app();
    let mut body = loan_body("L-1", "C-1", "LEN-1");
    body["paymentDate"] = json!("2024-03-01");
    body["dueDate"] = json!("2024-02-15");

    let (status, error) = post_json(&app, "/loans/add", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["status"], "error");
    assert_eq!(error["message"], "Validation Error");
    assert_eq!(
        error["details"],
        json!(["Payment date cannot be greater than the due date"])
    );
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn timestamps_with_different_offsets_compare_by_instant() {
    let (app, repo) = app();
    let mut body = loan_body("L-1", "C-1", "LEN-1");
    // 16:00 UTC, before the 20:00 UTC due time on the same day
    body["paymentDate"] = json!("2024-02-16T01:00:00+09:00");
    body["dueDate"] = json!("2024-02-15T20:00:00+00:00");

    let (status, created) = post_json(&app, "/loans/add", &body).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["paymentDate"], "2024-02-15");
    assert_eq!(created["dueDate"], "2024-02-15");
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let (app, repo) = app();
    let mut body = loan_body("L-1", "C-1", "LEN-1");
    body["customerId"] = json!("C".repeat(2 * 1024 * 1024));

    let (status, error) = post_json(&app, "/loans/add", &body).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(error["status"], "error");
    assert_eq!(error["message"], "Payload Too Large");
    assert_eq!(error["details"].as_array().unwrap().len(), 1);
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn body_without_json_content_type_is_unsupported() {
    let (app, repo) = app();
    let request = Request::post("/loans/add")
        .body(Body::from(loan_body("L-1", "C-1", "LEN-1").to_string()))
        .unwrap();

    let (status, error) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(error["status"], "error");
    assert_eq!(error["message"], "Unsupported Media Type");
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn non_utf8_path_segment_gets_json_error() {
    let (app, _) = app();

    for uri in ["/loans/%FF", "/loans/customer/%FF", "/loans/lender/%FF"] {
        let (status, error) = get(&app, uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(error["status"], "error");
        assert_eq!(error["message"], "Bad Request");
        assert_eq!(error["details"].as_array().unwrap().len(), 1);
    }
}

#[tokio::test]
async fn malformed_body_is_a_validation_error() {
    let (app, repo) = app();
    let mut body = loan_body("L-1", "C-1", "LEN-1");
    body.as_object_mut().unwrap().remove("dueDate");

    let (status, error) = post_json(&app, "/loans/add", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "Validation Error");
    assert_eq!(error["details"].as_array().unwrap().len(), 1);
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn field_rules_are_reported_per_field() {
    let (app, repo) = app();
    let mut body = loan_body("", "C-1", "LEN-1");
    body["penaltyPerDay"] = json!(-0.5);

    let (status, error) = post_json(&app, "/loans/add", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error["details"],
        json!([
            "loan_id: Loan ID is required",
            "penalty_per_day: Penalty per day must not be negative"
        ])
    );
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn duplicate_loan_id_is_a_conflict() {
    let (app, repo) = app();

    let (status, _) = post_json(&app, "/loans/add", &loan_body("L-1", "C-1", "LEN-1")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, error) = post_json(&app, "/loans/add", &loan_body("L-1", "C-2", "LEN-2")).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["message"], "Data Integrity Violation");
    assert_eq!(
        error["details"],
        json!(["Loan with Loan ID L-1 already exists"])
    );
    assert_eq!(repo.len().await, 1);

    let (_, stored) = get(&app, "/loans/L-1").await;
    assert_eq!(stored["customerId"], "C-1");
}

#[tokio::test]
async fn unknown_loan_id_is_not_found_with_body() {
    let (app, _) = app();

    let (status, error) = get(&app, "/loans/L-404").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["message"], "Resource Not Found");
    assert_eq!(error["details"], json!(["Loan with Loan ID L-404 not found"]));
}

#[tokio::test]
async fn customer_and_lender_listings() {
    let (app, _) = app();
    for (loan_id, customer_id, lender_id) in
        [("L-1", "C-1", "LEN-1"), ("L-2", "C-1", "LEN-2"), ("L-3", "C-2", "LEN-2")]
    {
        let (status, _) = post_json(
            &app,
            "/loans/add",
            &loan_body(loan_id, customer_id, lender_id),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, by_customer) = get(&app, "/loans/customer/C-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_customer.as_array().unwrap().len(), 2);

    let (status, by_lender) = get(&app, "/loans/lender/LEN-2").await;
    assert_eq!(status, StatusCode::OK);
    let loan_ids: Vec<_> = by_lender
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["loanId"].as_str().unwrap())
        .collect();
    assert_eq!(loan_ids, vec!["L-2", "L-3"]);

    let (status, nobody) = get(&app, "/loans/customer/C-404").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(nobody, json!([]));

    let (status, nobody) = get(&app, "/loans/lender/LEN-404").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(nobody, json!([]));
}

#[tokio::test]
async fn aggregates_on_empty_store() {
    let (app, _) = app();

    for (path, label) in [
        ("/loans/aggregate/lender", "Lender"),
        ("/loans/aggregate/customer", "Customer"),
        ("/loans/aggregate/interest", "Interest"),
    ] {
        let (status, body) = get(&app, path).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "groupBy": label,
                "totalRemainingAmount": 0.0,
                "totalInterest": 0.0,
                "totalPenalty": 0.0
            })
        );
    }
}

#[tokio::test]
async fn aggregates_agree_across_dimensions() {
    let (app, _) = app();

    let mut second = loan_body("L-2", "C-2", "LEN-1");
    second["amount"] = json!(2000.0);
    second["remainingAmount"] = json!(1500.0);
    second["interestPerDay"] = json!(0.02);
    second["penaltyPerDay"] = json!(0.05);

    post_json(&app, "/loans/add", &loan_body("L-1", "C-1", "LEN-1")).await;
    post_json(&app, "/loans/add", &second).await;

    for (path, label) in [
        ("/loans/aggregate/lender", "Lender"),
        ("/loans/aggregate/customer", "Customer"),
        ("/loans/aggregate/interest", "Interest"),
    ] {
        let (status, body) = get(&app, path).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["groupBy"], label);
        assert_close(&body["totalRemainingAmount"], 11500.0);
        assert_close(&body["totalInterest"], 140.0);
        assert_close(&body["totalPenalty"], 200.0);
    }
}

#[tokio::test]
async fn metrics_are_exposed() {
    let (app, _) = app();
    get(&app, "/loans/all").await;

    let response = app
        .clone()
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("loan_requests_total"));
    assert!(text.contains("status=\"Success\""));
}

#[tokio::test]
async fn openapi_document_lists_loan_routes() {
    let (app, _) = app();

    let (status, doc) = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let paths = doc["paths"].as_object().unwrap();
    assert!(paths.contains_key("/loans/all"));
    assert!(paths.contains_key("/loans/add"));
    assert!(paths.contains_key("/loans/{loan_id}"));
    assert!(paths.contains_key("/loans/aggregate/interest"));
}
