use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// TTL stamped on every answer. The store carries no per-record TTL.
    #[serde(default = "default_answer_ttl")]
    pub answer_ttl: u32,

    /// 1 keeps the listener strictly sequential; more spawns a worker pool
    /// fed by a bounded queue.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Datagrams waiting for a worker. Ignored when `workers == 1`.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            answer_ttl: default_answer_ttl(),
            workers: default_workers(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

fn default_answer_ttl() -> u32 {
    0
}

fn default_workers() -> usize {
    1
}

fn default_queue_capacity() -> usize {
    1024
}
