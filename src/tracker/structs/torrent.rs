use std::collections::HashMap;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_key::PeerKey;

/// Status value of a torrent that storage has pruned.
pub const TORRENT_STATUS_PRUNED: i64 = 1;

/// A cached torrent with its live swarm.
///
/// A peer key lives in at most one of `seeders` and `leechers`.
#[derive(Debug, Clone)]
pub struct Torrent {
    pub id: u64,
    pub info_hash: InfoHash,
    pub up_multiplier: f64,
    pub down_multiplier: f64,
    pub seeders: HashMap<PeerKey, Peer>,
    pub leechers: HashMap<PeerKey, Peer>,
    pub snatched: u64,
    pub status: i64,
    pub last_action: i64,
    /// Un-pruned here but storage may still report it pruned.
    pub unprune_pending: bool,
}
