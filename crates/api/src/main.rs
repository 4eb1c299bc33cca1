use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use gostock_db::seed::{seed_defaults, SeedOutcome};
use gostock_db::store::{PgStockStore, StockStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gostock_api::config::ServerConfig;
use gostock_api::router::build_app_router;
use gostock_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "gostock_api=debug,gostock_db=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = gostock_core::connection::resolver_from_env()
        .and_then(|resolver| resolver.resolve())
        .expect("Failed to resolve database connection string");

    let pool = gostock_db::create_pool(&database_url, config.db_max_connections)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    let store = Arc::new(PgStockStore::new(pool));

    store.ping().await.expect("Database health check failed");
    tracing::info!("Database health check passed");

    store
        .ensure_schema()
        .await
        .expect("Cannot create database schema");
    tracing::info!("Database migrations applied");

    // --- Seed ---
    if config.seed_on_startup {
        match seed_defaults(&*store)
            .await
            .expect("Cannot retrieve data from database during seed check")
        {
            SeedOutcome::Seeded { ids } => tracing::info!(?ids, "Store was empty, defaults seeded"),
            SeedOutcome::Skipped { existing } => {
                tracing::info!(existing, "Store already populated, seeding skipped")
            }
        }
    } else {
        tracing::info!("Seeding disabled");
    }

    // --- App state ---
    let state = AppState {
        store: store.clone(),
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, closing database pool");
    if tokio::time::timeout(
        Duration::from_secs(config.shutdown_timeout_secs),
        store.close(),
    )
    .await
    .is_err()
    {
        tracing::warn!("Timed out closing database pool");
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
