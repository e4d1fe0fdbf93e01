use async_trait::async_trait;
use dashmap::DashMap;
use mockapetris_application::ports::RecordStore;
use mockapetris_domain::DomainError;

/// Process-local record table.
///
/// The seed is copied in at construction; nothing outside this instance can
/// observe or mutate it, so tests get isolated fixtures.
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: DashMap<String, String>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records<I, K, V>(seed: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let records = seed
            .into_iter()
            .map(|(name, ip)| (name.into(), ip.into()))
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn get(&self, name: &str) -> Result<Option<String>, DomainError> {
        Ok(self.records.get(name).map(|entry| entry.value().clone()))
    }

    async fn set(&self, name: &str, address: &str) -> Result<(), DomainError> {
        self.records.insert(name.to_string(), address.to_string());
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self.records.remove(name).is_some())
    }
}
