use async_trait::async_trait;
use mockapetris_application::ports::RecordStore;
use mockapetris_domain::DomainError;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::{error, info, instrument};

/// Networked store: one Redis string key per hostname, no expiry.
///
/// `ConnectionManager` multiplexes a single connection and reconnects on
/// failure; clones share it, so each call takes its own handle.
#[derive(Clone)]
pub struct RedisRecordStore {
    conn: ConnectionManager,
}

impl RedisRecordStore {
    pub async fn connect(url: &str) -> Result<Self, DomainError> {
        let client = redis::Client::open(url)
            .map_err(|e| DomainError::StoreConnectFailure(e.to_string()))?;

        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| DomainError::StoreConnectFailure(e.to_string()))?;

        info!("Redis record store connected");
        Ok(Self { conn })
    }
}

#[async_trait]
impl RecordStore for RedisRecordStore {
    #[instrument(skip(self))]
    async fn get(&self, name: &str) -> Result<Option<String>, DomainError> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<String>>(name).await.map_err(|e| {
            error!(error = %e, "Redis GET failed");
            DomainError::StoreUnavailable(e.to_string())
        })
    }

    #[instrument(skip(self))]
    async fn set(&self, name: &str, address: &str) -> Result<(), DomainError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(name, address).await.map_err(|e| {
            error!(error = %e, "Redis SET failed");
            DomainError::StoreUnavailable(e.to_string())
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, name: &str) -> Result<bool, DomainError> {
        let mut conn = self.conn.clone();
        let removed = conn.del::<_, i64>(name).await.map_err(|e| {
            error!(error = %e, "Redis DEL failed");
            DomainError::StoreUnavailable(e.to_string())
        })?;

        Ok(removed > 0)
    }
}
