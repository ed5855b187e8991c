use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueLengths {
    pub torrents: usize,
    pub users: usize,
    pub transfer_history: usize,
    pub transfer_ips: usize,
    pub snatches: usize,
}
