use super::{RecordClass, RecordType};
use std::fmt;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// A single answer entry. Only ever built for IN/A.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Arc<str>,

    pub record_type: RecordType,

    pub record_class: RecordClass,

    pub ttl: u32,

    pub address: Ipv4Addr,
}

impl ResourceRecord {
    pub fn a(name: impl Into<Arc<str>>, address: Ipv4Addr, ttl: u32) -> Self {
        Self {
            name: name.into(),
            record_type: RecordType::A,
            record_class: RecordClass::IN,
            ttl,
            address,
        }
    }

    pub fn rdata(&self) -> [u8; 4] {
        self.address.octets()
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.name, self.ttl, self.record_class, self.record_type, self.address
        )
    }
}
