use async_trait::async_trait;
use mockapetris_application::ports::RecordStore;
use mockapetris_domain::DomainError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{error, info, instrument};

const CREATE_RECORDS_TABLE: &str = "CREATE TABLE IF NOT EXISTS records (
    name TEXT PRIMARY KEY NOT NULL,
    address TEXT NOT NULL
)";

/// File-backed store. `name` uses SQLite's default BINARY collation, so
/// lookups stay case-sensitive.
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    /// Wraps an existing pool. Call [`Self::init_schema`] before first use.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, DomainError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| DomainError::StoreConnectFailure(e.to_string()))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| DomainError::StoreConnectFailure(e.to_string()))?;

        let store = Self::new(pool);
        store
            .init_schema()
            .await
            .map_err(|e| DomainError::StoreConnectFailure(e.to_string()))?;

        info!(database_url = %database_url, "SQLite record store ready");
        Ok(store)
    }

    pub async fn init_schema(&self) -> Result<(), DomainError> {
        sqlx::query(CREATE_RECORDS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to create records table");
                DomainError::StoreUnavailable(e.to_string())
            })?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    #[instrument(skip(self))]
    async fn get(&self, name: &str) -> Result<Option<String>, DomainError> {
        let row = sqlx::query_as::<_, (String,)>("SELECT address FROM records WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query record");
                DomainError::StoreUnavailable(e.to_string())
            })?;

        Ok(row.map(|(address,)| address))
    }

    #[instrument(skip(self))]
    async fn set(&self, name: &str, address: &str) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO records (name, address) VALUES (?, ?)
             ON CONFLICT(name) DO UPDATE SET address = excluded.address",
        )
        .bind(name)
        .bind(address)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to store record");
            DomainError::StoreUnavailable(e.to_string())
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, name: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM records WHERE name = ?")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete record");
                DomainError::StoreUnavailable(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
