//! Mockapetris Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_response;
pub mod errors;

pub use config::{
    CliOverrides, Config, ConfigError, DnsConfig, LoggingConfig, ServerConfig, StoreBackend,
    StoreConfig,
};
pub use dns_query::{DnsQuery, DnsQuestion, OpCode};
pub use dns_record::{RecordClass, RecordType, ResourceRecord};
pub use dns_response::{DnsResponse, ResponseCode};
pub use errors::DomainError;
