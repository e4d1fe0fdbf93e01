use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed packet: {0}")]
    MalformedPacket(String),

    #[error("Failed to encode response: {0}")]
    EncodeFailure(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Failed to connect to record store: {0}")]
    StoreConnectFailure(String),
}
