use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use gostock_core::types::DbId;
use tokio::sync::RwLock;

use super::StockStore;
use crate::error::StoreError;
use crate::models::stock::{NewStock, Stock};

/// In-process [`StockStore`].
///
/// Ids start at 1 and increase monotonically; they are never reused.
/// Availability can be toggled to exercise failure paths.
#[derive(Debug)]
pub struct MemoryStockStore {
    state: RwLock<MemoryState>,
    available: AtomicBool,
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: DbId,
    stocks: BTreeMap<DbId, Stock>,
}

impl MemoryStockStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState::default()),
            available: AtomicBool::new(true),
        }
    }

    /// When `false`, every operation fails with [`StoreError::Unavailable`].
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("memory store is offline".into()))
        }
    }
}

impl Default for MemoryStockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StockStore for MemoryStockStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.check_available()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }

    async fn count(&self) -> Result<i64, StoreError> {
        self.check_available()?;
        Ok(self.state.read().await.stocks.len() as i64)
    }

    async fn insert(&self, stocks: &[NewStock]) -> Result<Vec<DbId>, StoreError> {
        self.check_available()?;
        if stocks.is_empty() {
            return Ok(Vec::new());
        }

        let now = chrono::Utc::now();
        let mut state = self.state.write().await;
        let mut ids = Vec::with_capacity(stocks.len());

        for new in stocks {
            state.last_id += 1;
            let id = state.last_id;
            state.stocks.insert(
                id,
                Stock {
                    id,
                    name: new.name.clone(),
                    value: new.value,
                    created_at: now,
                    updated_at: now,
                },
            );
            ids.push(id);
        }
        Ok(ids)
    }

    async fn list_all(&self) -> Result<BTreeMap<DbId, Stock>, StoreError> {
        self.check_available()?;
        Ok(self.state.read().await.stocks.clone())
    }
}
