//! Startup seeding of default stocks.

use gostock_core::stock::DEFAULT_STOCKS;
use gostock_core::types::DbId;

use crate::error::StoreError;
use crate::models::stock::NewStock;
use crate::store::StockStore;

/// Result of a [`seed_defaults`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty and the defaults were inserted.
    Seeded { ids: Vec<DbId> },
    /// The store already held `existing` stocks; nothing was written.
    Skipped { existing: i64 },
}

/// Insert the default stocks if, and only if, the store is empty.
///
/// Not safe against two processes seeding the same database concurrently:
/// both may observe an empty store and insert.
pub async fn seed_defaults(store: &dyn StockStore) -> Result<SeedOutcome, StoreError> {
    let existing = store.count().await?;
    if existing != 0 {
        return Ok(SeedOutcome::Skipped { existing });
    }

    let defaults: Vec<NewStock> = DEFAULT_STOCKS
        .iter()
        .map(|(name, value)| NewStock::new(*name, *value))
        .collect();
    let ids = store.insert(&defaults).await?;

    tracing::info!(?ids, "Seeded default stocks");
    Ok(SeedOutcome::Seeded { ids })
}
