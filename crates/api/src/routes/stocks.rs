//! Route definitions for stocks.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::stocks;
use crate::state::AppState;

/// ```text
/// GET  /stocks  -> list_stocks
/// POST /stock   -> post_stock
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stocks", get(stocks::list_stocks))
        .route("/stock", post(stocks::post_stock))
}
