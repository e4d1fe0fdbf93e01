use super::{decode_query, encode_response};
use mockapetris_application::use_cases::ResolveQueryUseCase;
use mockapetris_domain::DnsResponse;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Decode → resolve → encode for a single datagram.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<ResolveQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns the encoded reply, or `None` when the datagram must be dropped
    /// without answering (malformed input or an encoder failure).
    pub async fn handle_raw(&self, buf: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let query = match decode_query(buf) {
            Ok(query) => query,
            Err(e) => {
                debug!(client = %client, len = buf.len(), error = %e, "Dropping malformed packet");
                return None;
            }
        };

        info!(
            domain = %query.name(),
            record_type = %query.question.record_type,
            client = %client,
            "DNS query received"
        );

        let resolution = self.use_case.execute(&query).await;
        let response = DnsResponse::answer_to(&query, resolution.answer);

        match encode_response(&response) {
            Ok(wire) => {
                debug!(
                    domain = %query.name(),
                    answers = response.answer_count(),
                    outcome = resolution.outcome.as_str(),
                    "Sending response"
                );
                Some(wire)
            }
            Err(e) => {
                error!(domain = %query.name(), error = %e, "Failed to encode response");
                None
            }
        }
    }
}
