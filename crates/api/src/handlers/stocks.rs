//! Handlers for the stock resource.

use axum::extract::State;
use axum::Json;
use gostock_db::models::stock::NewStock;

use crate::error::AppResult;
use crate::extract::StockPayload;
use crate::response::{StocksResponse, SuccessResponse};
use crate::state::AppState;

/// GET /stocks
///
/// Every stock keyed by id. No filtering, sorting guarantees or pagination.
pub async fn list_stocks(State(state): State<AppState>) -> AppResult<Json<StocksResponse>> {
    let stocks = state.store.list_all().await?;
    tracing::debug!(count = stocks.len(), "Listed stocks");
    Ok(Json(StocksResponse { stocks }))
}

/// POST /stock
///
/// Accepts `{name, value}` as JSON or form fields. Client-supplied ids and
/// timestamps are ignored.
pub async fn post_stock(
    State(state): State<AppState>,
    StockPayload(input): StockPayload,
) -> AppResult<Json<SuccessResponse>> {
    tracing::debug!(?input, "Submitted stock");

    let stock = NewStock::try_from(&input)?;
    let ids = state.store.insert(std::slice::from_ref(&stock)).await?;

    tracing::info!(id = ?ids.first(), name = %stock.name, value = stock.value, "Stock created");
    Ok(Json(SuccessResponse::ok()))
}
