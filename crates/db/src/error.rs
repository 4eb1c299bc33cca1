use gostock_core::types::DbId;

/// Failure of a storage gateway operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A persisted value does not fit the unsigned 32-bit domain type.
    #[error("Stock {id} has out-of-range value {value}")]
    ValueOutOfRange { id: DbId, value: i64 },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
