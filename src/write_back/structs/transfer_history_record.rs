#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferHistoryRecord {
    pub user_id: u64,
    pub torrent_id: u64,
    pub raw_delta_upload: u64,
    pub raw_delta_download: u64,
    /// Seconds since the previous announce, zero after a long gap.
    pub delta_time: i64,
    pub delta_snatch: u64,
    pub active: bool,
    pub seeding: bool,
    pub left: u64,
    pub start_time: i64,
    pub last_announce: i64,
}
