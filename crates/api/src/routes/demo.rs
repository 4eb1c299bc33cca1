use axum::routing::get;
use axum::Router;

use crate::handlers::demo;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ping", get(demo::ping))
        .route("/hello", get(demo::hello))
}
