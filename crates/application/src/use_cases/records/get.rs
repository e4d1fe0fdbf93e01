use std::sync::Arc;

use mockapetris_domain::DomainError;

use super::validate_name;
use crate::ports::RecordStore;

pub struct GetRecordUseCase {
    store: Arc<dyn RecordStore>,
}

impl GetRecordUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, name: &str) -> Result<String, DomainError> {
        validate_name(name)?;

        self.store
            .get(name)
            .await?
            .ok_or_else(|| DomainError::NotFound(name.to_string()))
    }
}
