use crate::tracker::structs::peer_id::PeerId;

/// One client session inside a swarm.
///
/// `uploaded` and `downloaded` hold the raw counters of the last announce so the
/// next one can compute its delta. `addr` is the compact form: 4 IPv4 bytes
/// followed by the port in network order.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Peer {
    pub id: PeerId,
    pub user_id: u64,
    pub torrent_id: u64,
    pub port: u16,
    pub ip: String,
    pub addr: [u8; 6],
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub seeding: bool,
    pub start_time: i64,
    pub last_announce: i64,
}
