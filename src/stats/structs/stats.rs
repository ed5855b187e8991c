use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_reload: i64,
    pub timestamp_run_purge: i64,
    pub timestamp_run_console: i64,
    pub users: i64,
    pub torrents: i64,
    pub whitelist: i64,
    pub hit_and_runs: i64,
    pub freeleech: bool,
    pub announces: i64,
    pub announce_failures: i64,
    pub announce_timeouts: i64,
    pub snatches: i64,
    pub unpruned: i64,
    pub records_flushed: i64,
    pub records_dropped: i64,
    pub deadlock_retries: i64,
    pub reloads: i64,
    pub reload_failures: i64,
    pub purged_peers: i64,
}
