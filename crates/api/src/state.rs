use std::sync::Arc;

use gostock_db::store::StockStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed once at startup and cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Storage gateway for stock records.
    pub store: Arc<dyn StockStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
