/// Per-announce torrent update: snatch delta plus the swarm size after the announce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorrentRecord {
    pub torrent_id: u64,
    pub delta_snatch: u64,
    pub seeders: u64,
    pub leechers: u64,
    pub last_action: i64,
    /// Set when a completing announce brought a pruned torrent back.
    pub unpruned: bool,
}
