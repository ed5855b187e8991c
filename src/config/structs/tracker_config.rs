use serde::{Deserialize, Serialize};

/// All durations are in seconds.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackerConfig {
    pub announce_interval: u64,
    pub min_announce_interval: u64,
    pub whitelist_enabled: bool,
    pub announce_timeout: u64,
    pub reload_interval: u64,
    pub purge_interval: u64,
    pub peers_timeout: u64
}
