use crate::write_back::structs::snatch_record::SnatchRecord;
use crate::write_back::structs::torrent_record::TorrentRecord;
use crate::write_back::structs::transfer_history_record::TransferHistoryRecord;
use crate::write_back::structs::transfer_ip_record::TransferIpRecord;
use crate::write_back::structs::user_record::UserRecord;

/// Everything the memory engine was asked to persist, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct StorageJournal {
    pub torrents: Vec<TorrentRecord>,
    pub users: Vec<UserRecord>,
    pub transfer_history: Vec<TransferHistoryRecord>,
    pub transfer_ips: Vec<TransferIpRecord>,
    pub snatches: Vec<SnatchRecord>,
    /// Cutoffs passed to `deactivate_stale_peers`.
    pub deactivations: Vec<i64>,
    /// Number of successful batch calls across all sinks.
    pub batches: u64,
}
