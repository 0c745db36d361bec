mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use serde_json::json;
use portfolio::api::handlers::contact_api_handler;

fn server() -> TestServer {
    let app = Router::new().route("/api/contact", post(contact_api_handler));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_contact_all_fields_acknowledged() {
    let response = server()
        .post("/api/contact")
        .json(&json!({ "name": "Ann", "email": "a@b.com", "message": "Hi" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "acknowledged");
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .starts_with("Message received!")
    );
}

#[tokio::test]
async fn test_contact_empty_name_rejected() {
    let response = server()
        .post("/api/contact")
        .json(&json!({ "name": "", "email": "a@b.com", "message": "Hi" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "rejected");
    assert_eq!(json["message"], "Please fill all fields before sending.");
}

#[tokio::test]
async fn test_contact_whitespace_field_rejected() {
    let response = server()
        .post("/api/contact")
        .json(&json!({ "name": "Ann", "email": "   ", "message": "Hi" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_contact_missing_field_rejected() {
    let response = server()
        .post("/api/contact")
        .json(&json!({ "name": "Ann", "email": "a@b.com" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "rejected");
}

#[tokio::test]
async fn test_contact_oversized_message_is_bad_request() {
    let response = server()
        .post("/api/contact")
        .json(&json!({ "name": "Ann", "email": "a@b.com", "message": "x".repeat(5001) }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}
