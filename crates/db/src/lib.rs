//! Persistence for stock records.
//!
//! The [`store::StockStore`] trait is the storage gateway used by the API.
//! [`store::PgStockStore`] backs it with PostgreSQL through the
//! [`repositories::StockRepo`] queries; [`store::MemoryStockStore`] keeps
//! everything in process.

pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

use sqlx::postgres::PgPoolOptions;

pub use error::StoreError;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Verify the pool can execute a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending schema migrations. Safe to call repeatedly.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
