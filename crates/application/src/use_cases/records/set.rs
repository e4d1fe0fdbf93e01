use std::net::Ipv4Addr;
use std::sync::Arc;

use mockapetris_domain::DomainError;
use tracing::info;

use super::validate_name;
use crate::ports::RecordStore;

pub struct SetRecordUseCase {
    store: Arc<dyn RecordStore>,
}

impl SetRecordUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, name: &str, ip: &str) -> Result<(), DomainError> {
        validate_name(name)?;

        ip.parse::<Ipv4Addr>().map_err(|_| {
            DomainError::InvalidIpAddress(format!("'{}' is not an IPv4 address", ip))
        })?;

        self.store.set(name, ip).await?;

        info!(domain = %name, ip = %ip, "Record stored");
        Ok(())
    }
}
