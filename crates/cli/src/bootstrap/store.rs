use mockapetris_application::ports::RecordStore;
use mockapetris_domain::{StoreBackend, StoreConfig};
use mockapetris_infrastructure::store::{
    InMemoryRecordStore, RedisRecordStore, SqliteRecordStore,
};
use std::sync::Arc;
use tracing::{error, info};

pub async fn build_store(cfg: &StoreConfig) -> anyhow::Result<Arc<dyn RecordStore>> {
    info!(backend = %cfg.backend, "Initializing record store");

    let store: Arc<dyn RecordStore> = match cfg.backend {
        StoreBackend::Memory => {
            let store = InMemoryRecordStore::with_records(cfg.seed.clone());
            info!(records = store.len(), "In-memory store seeded");
            Arc::new(store)
        }
        StoreBackend::Sqlite => {
            let store = SqliteRecordStore::connect(&cfg.sqlite_url())
                .await
                .map_err(|e| {
                    error!(path = %cfg.path, error = %e, "Failed to open SQLite store");
                    anyhow::anyhow!(e)
                })?;
            Arc::new(store)
        }
        StoreBackend::Redis => {
            let store = RedisRecordStore::connect(&cfg.redis_url())
                .await
                .map_err(|e| {
                    error!(address = %cfg.address, error = %e, "Failed to connect to Redis");
                    anyhow::anyhow!(e)
                })?;
            Arc::new(store)
        }
    };

    Ok(store)
}
