use std::collections::BTreeMap;

use async_trait::async_trait;
use gostock_core::types::DbId;

use super::StockStore;
use crate::error::StoreError;
use crate::models::stock::{NewStock, Stock};
use crate::repositories::StockRepo;
use crate::DbPool;

/// [`StockStore`] backed by a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgStockStore {
    pool: DbPool,
}

impl PgStockStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl StockStore for PgStockStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        crate::run_migrations(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(StockRepo::count(&self.pool).await?)
    }

    async fn insert(&self, stocks: &[NewStock]) -> Result<Vec<DbId>, StoreError> {
        if stocks.is_empty() {
            return Ok(Vec::new());
        }
        let ids = StockRepo::insert_many(&self.pool, stocks).await?;
        tracing::debug!(count = ids.len(), "Inserted stocks");
        Ok(ids)
    }

    async fn list_all(&self) -> Result<BTreeMap<DbId, Stock>, StoreError> {
        StockRepo::list_all(&self.pool)
            .await?
            .into_iter()
            .map(|row| Stock::try_from(row).map(|stock| (stock.id, stock)))
            .collect()
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
