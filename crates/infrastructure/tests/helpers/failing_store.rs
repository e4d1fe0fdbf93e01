use async_trait::async_trait;
use mockapetris_application::ports::RecordStore;
use mockapetris_domain::DomainError;

/// Store whose every call fails, as an unreachable backend would.
pub struct FailingRecordStore;

#[async_trait]
impl RecordStore for FailingRecordStore {
    async fn get(&self, _name: &str) -> Result<Option<String>, DomainError> {
        Err(DomainError::StoreUnavailable("connection refused".into()))
    }

    async fn set(&self, _name: &str, _address: &str) -> Result<(), DomainError> {
        Err(DomainError::StoreUnavailable("connection refused".into()))
    }

    async fn delete(&self, _name: &str) -> Result<bool, DomainError> {
        Err(DomainError::StoreUnavailable("connection refused".into()))
    }
}
