pub mod demo;
pub mod health;
pub mod stocks;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET  /health          service and database health
/// GET  /stocks          list_stocks
/// POST /stock           post_stock
/// GET  /ping            demo (DEMO_ROUTES only)
/// GET  /hello           demo (DEMO_ROUTES only)
/// ```
pub fn app_routes(config: &ServerConfig) -> Router<AppState> {
    let router = Router::new()
        .merge(health::router())
        .merge(stocks::router());

    if config.demo_routes {
        router.merge(demo::router())
    } else {
        router
    }
}
