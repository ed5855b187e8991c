use serde::{Deserialize, Serialize};

/// Per-queue capacities double as the batch size of one flush.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WriteBackConfig {
    pub torrent_buffer: usize,
    pub user_buffer: usize,
    pub transfer_history_buffer: usize,
    pub transfer_ip_buffer: usize,
    pub snatch_buffer: usize,
    pub flush_interval_ms: u64,
    pub max_deadlock_retries: u32,
    pub deadlock_wait_ms: u64,
    pub log_flushes: bool
}
