//! Response bodies shared by the stock handlers.

use std::collections::BTreeMap;

use gostock_core::types::DbId;
use gostock_db::models::stock::Stock;
use serde::Serialize;

/// `{ "stocks": { "<id>": Stock, ... } }`
#[derive(Debug, Serialize)]
pub struct StocksResponse {
    pub stocks: BTreeMap<DbId, Stock>,
}

/// `{ "success": true }`
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
