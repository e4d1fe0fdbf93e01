use crate::ports::RecordStore;
use mockapetris_domain::{DnsQuery, RecordClass, ResourceRecord};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Answered,
    NotFound,
    StoreUnavailable,
    InvalidStoredAddress,
    /// Class other than IN or type other than A/ANY; the store is not consulted.
    Unsupported,
}

impl ResolutionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionOutcome::Answered => "ANSWERED",
            ResolutionOutcome::NotFound => "NOT_FOUND",
            ResolutionOutcome::StoreUnavailable => "STORE_UNAVAILABLE",
            ResolutionOutcome::InvalidStoredAddress => "INVALID_STORED_ADDRESS",
            ResolutionOutcome::Unsupported => "UNSUPPORTED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResolution {
    pub answer: Option<ResourceRecord>,
    pub outcome: ResolutionOutcome,
}

impl DnsResolution {
    fn empty(outcome: ResolutionOutcome) -> Self {
        Self {
            answer: None,
            outcome,
        }
    }
}

/// Looks the question name up in the record store.
///
/// Never fails: every miss, backend error or unusable stored value collapses
/// into an empty resolution, distinguished only by `outcome` and the log line.
pub struct ResolveQueryUseCase {
    store: Arc<dyn RecordStore>,
    answer_ttl: u32,
}

impl ResolveQueryUseCase {
    pub fn new(store: Arc<dyn RecordStore>, answer_ttl: u32) -> Self {
        Self { store, answer_ttl }
    }

    pub async fn execute(&self, query: &DnsQuery) -> DnsResolution {
        let question = &query.question;
        let name = question.name.as_ref();

        if question.record_class != RecordClass::IN || !question.record_type.accepts_address() {
            debug!(
                domain = %name,
                record_type = %question.record_type,
                record_class = %question.record_class,
                "Unsupported question, answering without records"
            );
            return DnsResolution::empty(ResolutionOutcome::Unsupported);
        }

        let stored = match self.store.get(name).await {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                info!(domain = %name, "No record found");
                return DnsResolution::empty(ResolutionOutcome::NotFound);
            }
            Err(e) => {
                error!(domain = %name, error = %e, "Record store lookup failed");
                return DnsResolution::empty(ResolutionOutcome::StoreUnavailable);
            }
        };

        let address = match stored.parse::<Ipv4Addr>() {
            Ok(address) => address,
            Err(_) => {
                warn!(domain = %name, value = %stored, "Stored value is not an IPv4 address");
                return DnsResolution::empty(ResolutionOutcome::InvalidStoredAddress);
            }
        };

        info!(domain = %name, ip = %address, "Record found");

        DnsResolution {
            answer: Some(ResourceRecord::a(
                Arc::clone(&question.name),
                address,
                self.answer_ttl,
            )),
            outcome: ResolutionOutcome::Answered,
        }
    }
}
