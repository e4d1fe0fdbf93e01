use std::sync::Arc;

use mockapetris_domain::DomainError;
use tracing::info;

use super::validate_name;
use crate::ports::RecordStore;

pub struct DeleteRecordUseCase {
    store: Arc<dyn RecordStore>,
}

impl DeleteRecordUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Deleting an absent name succeeds; the return value reports whether
    /// anything was removed.
    pub async fn execute(&self, name: &str) -> Result<bool, DomainError> {
        validate_name(name)?;

        let removed = self.store.delete(name).await?;

        info!(domain = %name, removed, "Record deleted");
        Ok(removed)
    }
}
