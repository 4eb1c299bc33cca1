//! The storage gateway.
//!
//! Handlers and the seeder depend on [`StockStore`] only, so the backing
//! database can be swapped for [`MemoryStockStore`] in tests.

mod memory;
mod postgres;

use std::collections::BTreeMap;

use async_trait::async_trait;
use gostock_core::types::DbId;

use crate::error::StoreError;
use crate::models::stock::{NewStock, Stock};

pub use memory::MemoryStockStore;
pub use postgres::PgStockStore;

#[async_trait]
pub trait StockStore: Send + Sync {
    /// Create or upgrade the storage structure. Idempotent.
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    /// Cheap liveness probe.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Number of persisted stocks.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Persist `stocks` atomically, returning the assigned ids in input order.
    async fn insert(&self, stocks: &[NewStock]) -> Result<Vec<DbId>, StoreError>;

    /// Every persisted stock keyed by id.
    async fn list_all(&self) -> Result<BTreeMap<DbId, Stock>, StoreError>;

    /// Release underlying connections. Called once at shutdown.
    async fn close(&self) {}
}
