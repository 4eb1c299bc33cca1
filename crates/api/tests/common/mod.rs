#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use gostock_api::config::ServerConfig;
use gostock_api::router::build_app_router;
use gostock_api::state::AppState;
use gostock_db::store::{MemoryStockStore, StockStore};

/// Build a test `ServerConfig` with safe defaults and demo routes enabled.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 10,
        db_max_connections: 1,
        seed_on_startup: false,
        demo_routes: true,
    }
}

/// Build the full application router over the given in-memory store, using
/// the same middleware stack as production.
pub fn build_test_app(store: Arc<MemoryStockStore>) -> Router {
    build_test_app_with_config(store, test_config())
}

pub fn build_test_app_with_config(store: Arc<MemoryStockStore>, config: ServerConfig) -> Router {
    let store: Arc<dyn StockStore> = store;
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    post_raw(app, uri, "application/x-www-form-urlencoded", body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: String) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
