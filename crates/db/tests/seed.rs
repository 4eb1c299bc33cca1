//! Startup seeding against the in-process store.

use assert_matches::assert_matches;
use gostock_db::models::stock::NewStock;
use gostock_db::seed::{seed_defaults, SeedOutcome};
use gostock_db::store::{MemoryStockStore, StockStore};
use gostock_db::StoreError;

#[tokio::test]
async fn seeds_empty_store_with_two_defaults() {
    let store = MemoryStockStore::new();

    let outcome = seed_defaults(&store).await.unwrap();
    assert_eq!(outcome, SeedOutcome::Seeded { ids: vec![1, 2] });

    let stocks = store.list_all().await.unwrap();
    let mut pairs: Vec<_> = stocks.values().map(|s| (s.name.as_str(), s.value)).collect();
    pairs.sort();
    assert_eq!(pairs, vec![("Alphabet Inc Class A", 102140), ("Apple", 17780)]);
}

#[tokio::test]
async fn second_run_does_not_duplicate_defaults() {
    let store = MemoryStockStore::new();

    seed_defaults(&store).await.unwrap();
    let outcome = seed_defaults(&store).await.unwrap();

    assert_eq!(outcome, SeedOutcome::Skipped { existing: 2 });
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn populated_store_is_left_alone() {
    let store = MemoryStockStore::new();
    store.insert(&[NewStock::new("Tesla", 65000)]).await.unwrap();

    let outcome = seed_defaults(&store).await.unwrap();

    assert_eq!(outcome, SeedOutcome::Skipped { existing: 1 });
    let stocks = store.list_all().await.unwrap();
    assert_eq!(stocks.len(), 1);
    assert_eq!(stocks[&1].name, "Tesla");
}

#[tokio::test]
async fn count_failure_aborts_seeding() {
    let store = MemoryStockStore::new();
    store.set_available(false);

    assert_matches!(seed_defaults(&store).await, Err(StoreError::Unavailable(_)));
}
