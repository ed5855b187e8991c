use std::sync::atomic::{AtomicBool, AtomicI64};

#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_reload: AtomicI64,
    pub timestamp_run_purge: AtomicI64,
    pub timestamp_run_console: AtomicI64,
    pub users: AtomicI64,
    pub torrents: AtomicI64,
    pub whitelist: AtomicI64,
    pub hit_and_runs: AtomicI64,
    pub freeleech: AtomicBool,
    pub announces: AtomicI64,
    pub announce_failures: AtomicI64,
    pub announce_timeouts: AtomicI64,
    pub snatches: AtomicI64,
    pub unpruned: AtomicI64,
    pub records_flushed: AtomicI64,
    pub records_dropped: AtomicI64,
    pub deadlock_retries: AtomicI64,
    pub reloads: AtomicI64,
    pub reload_failures: AtomicI64,
    pub purged_peers: AtomicI64,
}
