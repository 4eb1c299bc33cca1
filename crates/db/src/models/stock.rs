//! Stock entity model and DTOs.

use gostock_core::error::CoreError;
use gostock_core::stock::{validate_create_stock, CreateStock};
use gostock_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::StoreError;

/// A persisted stock title.
///
/// Timestamps serialize as `CreatedAt` / `UpdatedAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: DbId,
    pub name: String,
    /// Value in EUR cent.
    pub value: u32,
    #[serde(rename = "CreatedAt")]
    pub created_at: Timestamp,
    #[serde(rename = "UpdatedAt")]
    pub updated_at: Timestamp,
}

/// A row from the `stocks` table. `value` is stored as BIGINT.
#[derive(Debug, Clone, FromRow)]
pub struct StockRow {
    pub id: DbId,
    pub name: String,
    pub value: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<StockRow> for Stock {
    type Error = StoreError;

    fn try_from(row: StockRow) -> Result<Self, Self::Error> {
        let value = u32::try_from(row.value).map_err(|_| StoreError::ValueOutOfRange {
            id: row.id,
            value: row.value,
        })?;
        Ok(Stock {
            id: row.id,
            name: row.name,
            value,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// A validated stock awaiting insertion. Ids and timestamps are assigned by
/// the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStock {
    pub name: String,
    pub value: u32,
}

impl NewStock {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl TryFrom<&CreateStock> for NewStock {
    type Error = CoreError;

    fn try_from(input: &CreateStock) -> Result<Self, Self::Error> {
        let (name, value) = validate_create_stock(input)?;
        Ok(NewStock { name, value })
    }
}
