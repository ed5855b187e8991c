use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use crate::common::common::current_time;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        StatsAtomics {
            started: AtomicI64::new(current_time()),
            timestamp_run_reload: AtomicI64::new(0),
            timestamp_run_purge: AtomicI64::new(0),
            timestamp_run_console: AtomicI64::new(0),
            users: AtomicI64::new(0),
            torrents: AtomicI64::new(0),
            whitelist: AtomicI64::new(0),
            hit_and_runs: AtomicI64::new(0),
            freeleech: AtomicBool::new(false),
            announces: AtomicI64::new(0),
            announce_failures: AtomicI64::new(0),
            announce_timeouts: AtomicI64::new(0),
            snatches: AtomicI64::new(0),
            unpruned: AtomicI64::new(0),
            records_flushed: AtomicI64::new(0),
            records_dropped: AtomicI64::new(0),
            deadlock_retries: AtomicI64::new(0),
            reloads: AtomicI64::new(0),
            reload_failures: AtomicI64::new(0),
            purged_peers: AtomicI64::new(0),
        }
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::Users => &self.users,
            StatsEvent::Torrents => &self.torrents,
            StatsEvent::Whitelist => &self.whitelist,
            StatsEvent::HitAndRuns => &self.hit_and_runs,
            StatsEvent::Announces => &self.announces,
            StatsEvent::AnnounceFailures => &self.announce_failures,
            StatsEvent::AnnounceTimeouts => &self.announce_timeouts,
            StatsEvent::Snatches => &self.snatches,
            StatsEvent::Unpruned => &self.unpruned,
            StatsEvent::RecordsFlushed => &self.records_flushed,
            StatsEvent::RecordsDropped => &self.records_dropped,
            StatsEvent::DeadlockRetries => &self.deadlock_retries,
            StatsEvent::Reloads => &self.reloads,
            StatsEvent::ReloadFailures => &self.reload_failures,
            StatsEvent::PurgedPeers => &self.purged_peers,
            StatsEvent::TimestampReload => &self.timestamp_run_reload,
            StatsEvent::TimestampPurge => &self.timestamp_run_purge,
            StatsEvent::TimestampConsole => &self.timestamp_run_console,
        }
    }

    pub fn update(&self, event: StatsEvent, value: i64)
    {
        self.counter(event).fetch_add(value, Ordering::SeqCst);
    }

    pub fn set(&self, event: StatsEvent, value: i64)
    {
        self.counter(event).store(value, Ordering::SeqCst);
    }

    pub fn set_freeleech(&self, enabled: bool)
    {
        self.freeleech.store(enabled, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            timestamp_run_reload: self.timestamp_run_reload.load(Ordering::SeqCst),
            timestamp_run_purge: self.timestamp_run_purge.load(Ordering::SeqCst),
            timestamp_run_console: self.timestamp_run_console.load(Ordering::SeqCst),
            users: self.users.load(Ordering::SeqCst),
            torrents: self.torrents.load(Ordering::SeqCst),
            whitelist: self.whitelist.load(Ordering::SeqCst),
            hit_and_runs: self.hit_and_runs.load(Ordering::SeqCst),
            freeleech: self.freeleech.load(Ordering::SeqCst),
            announces: self.announces.load(Ordering::SeqCst),
            announce_failures: self.announce_failures.load(Ordering::SeqCst),
            announce_timeouts: self.announce_timeouts.load(Ordering::SeqCst),
            snatches: self.snatches.load(Ordering::SeqCst),
            unpruned: self.unpruned.load(Ordering::SeqCst),
            records_flushed: self.records_flushed.load(Ordering::SeqCst),
            records_dropped: self.records_dropped.load(Ordering::SeqCst),
            deadlock_retries: self.deadlock_retries.load(Ordering::SeqCst),
            reloads: self.reloads.load(Ordering::SeqCst),
            reload_failures: self.reload_failures.load(Ordering::SeqCst),
            purged_peers: self.purged_peers.load(Ordering::SeqCst),
        }
    }
}

impl Default for StatsAtomics {
    fn default() -> Self {
        Self::new()
    }
}
