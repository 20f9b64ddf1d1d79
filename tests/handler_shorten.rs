mod common;

use axum::extract::State;
use axum::http::{HeaderMap, Uri};
use axum::{Json, Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use shortener::AppError;
use shortener::api::dto::shorten::ShortenRequest;
use shortener::api::handlers::shorten_handler;
use shortener::infrastructure::cache::NullCache;
use shortener::infrastructure::persistence::MemoryMappingStore;
use std::sync::Arc;

fn app(state: shortener::AppState) -> TestServer {
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_success() {
    let state = common::create_test_state();
    let service = state.shortener_service.clone();
    let server = app(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/a" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();

    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(json["long_url"], "https://example.com/a");
    assert_eq!(
        json["short_url"],
        format!("{}/{}", common::BASE_URL, code)
    );

    let resolved = service.resolve(code).await.unwrap();
    assert_eq!(resolved, "https://example.com/a");
}

#[tokio::test]
async fn test_shorten_same_url_twice_gives_distinct_codes() {
    let server = app(common::create_test_state());

    let first = server
        .post("/shorten")
        .json(&json!({ "url": "https://dup.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/shorten")
        .json(&json!({ "url": "https://dup.com" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["code"], second["code"]);
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let server = app(common::create_test_state());

    let response = server.post("/shorten").json(&json!({})).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_malformed_body() {
    let server = app(common::create_test_state());

    let response = server
        .post("/shorten")
        .content_type("application/json")
        .text("{not json")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let server = app(common::create_test_state());

    let response = server.post("/shorten").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_url_too_long() {
    let server = app(common::create_test_state());
    let url = format!("https://example.com/{}", "a".repeat(2048));

    let response = server.post("/shorten").json(&json!({ "url": url })).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_stores_url_verbatim() {
    let state = common::create_test_state();
    let service = state.shortener_service.clone();
    let server = app(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "not even a url" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();
    assert_eq!(service.resolve(code).await.unwrap(), "not even a url");
}

#[tokio::test]
async fn test_shorten_uses_host_header_without_base_url() {
    let state = common::create_test_state_with(
        Arc::new(shortener::infrastructure::persistence::MemoryMappingStore::new()),
        Arc::new(NullCache::new()),
        None,
    );
    let server = app(state);

    let response = server
        .post("/shorten")
        .add_header("Host", "localhost:3000")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();
    let short_url = json["short_url"].as_str().unwrap();
    assert!(short_url.starts_with("http://"));
    assert!(short_url.ends_with(&format!("/{code}")));
}

#[tokio::test]
async fn test_shorten_storage_unavailable() {
    let state = common::create_test_state_with(
        Arc::new(common::UnavailableStore),
        Arc::new(NullCache::new()),
        Some(common::BASE_URL),
    );
    let server = app(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "storage_unavailable");
}

#[tokio::test]
async fn test_shorten_exhausted_retries() {
    let state = common::create_test_state_with(
        Arc::new(common::FullStore),
        Arc::new(NullCache::new()),
        Some(common::BASE_URL),
    );
    let server = app(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "exhausted_retries");
}

fn state_without_base_url() -> shortener::AppState {
    common::create_test_state_with(
        Arc::new(MemoryMappingStore::new()),
        Arc::new(NullCache::new()),
        None,
    )
}

fn request(url: &str) -> Result<Json<ShortenRequest>, axum::extract::rejection::JsonRejection> {
    Ok(Json(ShortenRequest {
        url: url.to_string(),
    }))
}

#[tokio::test]
async fn test_shorten_without_origin_claims_no_code() {
    let state = state_without_base_url();
    let service = state.shortener_service.clone();

    let result = shorten_handler(
        State(state),
        HeaderMap::new(),
        Uri::from_static("/shorten"),
        request("https://example.com/a"),
    )
    .await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
    assert_eq!(service.mapping_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_uses_uri_authority_without_host_header() {
    let state = state_without_base_url();
    let service = state.shortener_service.clone();

    let Json(response) = shorten_handler(
        State(state),
        HeaderMap::new(),
        Uri::from_static("https://h2.example.com/shorten"),
        request("https://example.com/a"),
    )
    .await
    .unwrap();

    assert_eq!(
        response.short_url,
        format!("http://h2.example.com/{}", response.code)
    );
    assert_eq!(service.mapping_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_rejects_control_characters() {
    let state = common::create_test_state();
    let service = state.shortener_service.clone();
    let server = app(state);

    for url in ["https://example.com/a\nb", "https://example.com/a\0b"] {
        let response = server.post("/shorten").json(&json!({ "url": url })).await;

        response.assert_status_bad_request();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error");
    }

    assert_eq!(service.mapping_count().await.unwrap(), 0);
}
