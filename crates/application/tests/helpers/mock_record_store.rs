#![allow(dead_code)]

use async_trait::async_trait;
use mockapetris_application::ports::RecordStore;
use mockapetris_domain::DomainError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

#[derive(Default)]
pub struct MockRecordStore {
    records: RwLock<HashMap<String, String>>,
    should_fail: AtomicBool,
    get_calls: AtomicUsize,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: &[(&str, &str)]) -> Self {
        let store = Self::new();
        {
            let mut map = store.records.write().unwrap();
            for (name, ip) in records {
                map.insert(name.to_string(), ip.to_string());
            }
        }
        store
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> HashMap<String, String> {
        self.records.read().unwrap().clone()
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::StoreUnavailable(
                "connection refused".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn get(&self, name: &str) -> Result<Option<String>, DomainError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self.records.read().unwrap().get(name).cloned())
    }

    async fn set(&self, name: &str, address: &str) -> Result<(), DomainError> {
        self.check_available()?;
        self.records
            .write()
            .unwrap()
            .insert(name.to_string(), address.to_string());
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<bool, DomainError> {
        self.check_available()?;
        Ok(self.records.write().unwrap().remove(name).is_some())
    }
}
