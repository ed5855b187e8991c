use crate::tracker::structs::peer_id::PeerId;

/// Written only when a peer shows up from a new address or port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferIpRecord {
    pub user_id: u64,
    pub torrent_id: u64,
    pub peer_id: PeerId,
    pub ip: String,
    pub addr: [u8; 6],
    pub port: u16,
    pub uploaded: u64,
    pub downloaded: u64,
    pub start_time: i64,
    pub last_announce: i64,
}
