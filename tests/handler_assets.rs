mod common;

use axum::{
    Router,
    http::{HeaderValue, StatusCode, header},
    routing::get,
};
use axum_test::TestServer;
use portfolio::api::handlers::{profile_image_handler, resume_handler};
use portfolio::infrastructure::assets::MemoryAssetStore;

fn server(store: MemoryAssetStore) -> TestServer {
    let app = Router::new()
        .route("/resume", get(resume_handler))
        .route("/profile-image", get(profile_image_handler))
        .with_state(common::create_test_state(store));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_resume_download_exposes_exact_bytes() {
    let server = server(common::full_store());

    let response = server.get("/resume").await;
    response.assert_status_ok();

    assert_eq!(response.as_bytes().as_ref(), common::RESUME_BYTES);

    let headers = response.headers();
    assert_eq!(headers[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"HariKilambi_Resume.pdf\""
    );
    assert!(headers.contains_key(header::ETAG));
}

#[tokio::test]
async fn test_resume_not_modified_on_matching_etag() {
    let server = server(common::full_store());

    let first = server.get("/resume").await;
    let etag = first.headers()[header::ETAG].clone();

    let second = server
        .get("/resume")
        .add_header(header::IF_NONE_MATCH, etag)
        .await;

    second.assert_status(StatusCode::NOT_MODIFIED);
    assert!(second.as_bytes().is_empty());
}

#[tokio::test]
async fn test_resume_stale_etag_gets_full_body() {
    let server = server(common::full_store());

    let response = server
        .get("/resume")
        .add_header(header::IF_NONE_MATCH, HeaderValue::from_static("\"stale\""))
        .await;

    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), common::RESUME_BYTES);
}

#[tokio::test]
async fn test_resume_missing_is_not_found() {
    let server = server(common::empty_store());

    let response = server.get("/resume").await;
    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["asset"], common::RESUME_KEY);
}

#[tokio::test]
async fn test_profile_image_served_with_sniffed_type() {
    let server = server(common::full_store());

    let response = server.get("/profile-image").await;
    response.assert_status_ok();
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/jpeg");
    assert_eq!(response.as_bytes().as_ref(), common::JPEG_BYTES);
}

#[tokio::test]
async fn test_profile_image_undecodable_is_not_found() {
    let store = MemoryAssetStore::new().with_asset(common::PROFILE_KEY, b"not an image".to_vec());
    let server = server(store);

    server.get("/profile-image").await.assert_status_not_found();
}
