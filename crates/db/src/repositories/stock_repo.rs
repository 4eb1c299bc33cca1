//! Repository for the `stocks` table.

use gostock_core::types::DbId;
use sqlx::PgPool;

use crate::models::stock::{NewStock, StockRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, value, created_at, updated_at";

/// Provides create and read operations for stocks.
pub struct StockRepo;

impl StockRepo {
    /// Number of rows in `stocks`.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM stocks")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Insert all `stocks` in one transaction, returning their ids in input
    /// order. Either every row is written or none is.
    pub async fn insert_many(pool: &PgPool, stocks: &[NewStock]) -> Result<Vec<DbId>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut ids = Vec::with_capacity(stocks.len());

        for stock in stocks {
            let (id,): (DbId,) =
                sqlx::query_as("INSERT INTO stocks (name, value) VALUES ($1, $2) RETURNING id")
                    .bind(&stock.name)
                    .bind(i64::from(stock.value))
                    .fetch_one(&mut *tx)
                    .await?;
            ids.push(id);
        }

        tx.commit().await?;
        Ok(ids)
    }

    /// Every stock row, ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<StockRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stocks ORDER BY id");
        sqlx::query_as::<_, StockRow>(&query).fetch_all(pool).await
    }
}
