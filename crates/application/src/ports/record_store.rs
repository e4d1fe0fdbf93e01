use async_trait::async_trait;
use mockapetris_domain::DomainError;

/// Hostname → textual IPv4 address mapping the responder answers from.
///
/// Keys are matched exactly and case-sensitively. Implementations must be safe
/// to share between the DNS listener and the control plane without extra
/// locking; every call is a single atomic operation on one key.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get(&self, name: &str) -> Result<Option<String>, DomainError>;

    /// Overwrites any existing value for `name`.
    async fn set(&self, name: &str, address: &str) -> Result<(), DomainError>;

    /// Returns whether `name` was present.
    async fn delete(&self, name: &str) -> Result<bool, DomainError>;
}
