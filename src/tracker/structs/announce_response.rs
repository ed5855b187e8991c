use crate::tracker::structs::peer::Peer;

/// Result of a successful announce, encoded after the torrent lock is released.
///
/// `peers` is `None` when the requester stopped or asked for no peers, which
/// omits the key from the bencoded body entirely.
#[derive(Debug, Clone)]
pub struct AnnounceResponse {
    pub complete: u64,
    pub incomplete: u64,
    pub interval: u64,
    pub min_interval: u64,
    pub compact: bool,
    pub peers: Option<Vec<Peer>>,
}
