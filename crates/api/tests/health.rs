//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, body_text, build_test_app, build_test_app_with_config, get, test_config};
use gostock_db::store::MemoryStockStore;
use serde_json::json;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = build_test_app(Arc::new(MemoryStockStore::new()));
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[tokio::test]
async fn health_check_reports_unhealthy_store() {
    let store = Arc::new(MemoryStockStore::new());
    store.set_available(false);
    let app = build_test_app(store);

    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["db_healthy"], false);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app(Arc::new(MemoryStockStore::new()));
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: Wrong method on a known route returns 405
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_on_create_route_returns_405() {
    let app = build_test_app(Arc::new(MemoryStockStore::new()));
    let response = get(app, "/stock").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = build_test_app(Arc::new(MemoryStockStore::new()));
    let response = get(app, "/stocks").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a UUID (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let app = build_test_app(Arc::new(MemoryStockStore::new()));

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/stock")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("POST"),
        "Allow-Methods should contain POST, got: {allow_methods}"
    );
}

// ---------------------------------------------------------------------------
// Test: demo routes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ping_returns_pong() {
    let app = build_test_app(Arc::new(MemoryStockStore::new()));
    let response = get(app, "/ping").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "pong");
}

#[tokio::test]
async fn hello_returns_greeting() {
    let app = build_test_app(Arc::new(MemoryStockStore::new()));
    let response = get(app, "/hello").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "message": "Hello Iris!" }));
}

#[tokio::test]
async fn demo_routes_absent_when_disabled() {
    let config = gostock_api::config::ServerConfig {
        demo_routes: false,
        ..test_config()
    };
    let app = build_test_app_with_config(Arc::new(MemoryStockStore::new()), config);

    assert_eq!(get(app.clone(), "/ping").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(get(app, "/hello").await.status(), StatusCode::NOT_FOUND);
}
