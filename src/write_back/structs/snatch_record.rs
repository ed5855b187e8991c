#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnatchRecord {
    pub user_id: u64,
    pub torrent_id: u64,
    pub ip: String,
    pub timestamp: i64,
}
