use serde::{Deserialize, Serialize};

/// Counters that can be incremented with `update_stats` or overwritten with `set_stats`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Users,
    Torrents,
    Whitelist,
    HitAndRuns,
    Announces,
    AnnounceFailures,
    AnnounceTimeouts,
    Snatches,
    Unpruned,
    RecordsFlushed,
    RecordsDropped,
    DeadlockRetries,
    Reloads,
    ReloadFailures,
    PurgedPeers,
    TimestampReload,
    TimestampPurge,
    TimestampConsole,
}
