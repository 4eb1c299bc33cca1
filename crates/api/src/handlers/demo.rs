//! Demo endpoints.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HelloResponse {
    message: &'static str,
}

/// GET /ping
pub async fn ping() -> &'static str {
    "pong"
}

/// GET /hello
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello Iris!",
    })
}
