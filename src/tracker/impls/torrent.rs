use std::collections::HashMap;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_key::PeerKey;
use crate::tracker::structs::torrent::{Torrent, TORRENT_STATUS_PRUNED};

impl Torrent {
    pub fn new(id: u64, info_hash: InfoHash, up_multiplier: f64, down_multiplier: f64, snatched: u64, status: i64) -> Torrent {
        Torrent {
            id,
            info_hash,
            up_multiplier,
            down_multiplier,
            seeders: HashMap::new(),
            leechers: HashMap::new(),
            snatched,
            status,
            last_action: 0,
            unprune_pending: false,
        }
    }

    pub fn is_pruned(&self) -> bool {
        self.status == TORRENT_STATUS_PRUNED
    }

    /// Takes the peer out of whichever set holds it.
    pub fn take_peer(&mut self, key: &PeerKey) -> Option<Peer> {
        self.leechers.remove(key).or_else(|| self.seeders.remove(key))
    }

    /// Places the peer in the set matching its seeding flag.
    pub fn insert_peer(&mut self, key: PeerKey, peer: Peer) {
        if peer.seeding {
            self.seeders.insert(key, peer);
        } else {
            self.leechers.insert(key, peer);
        }
    }

    pub fn peers_count(&self) -> usize {
        self.seeders.len() + self.leechers.len()
    }

    /// Copies metadata from a freshly loaded record, keeping the live swarm.
    ///
    /// A stored `snatched` behind the cached count, or a stored pruned status
    /// after a local un-prune, means the write-back hasn't landed yet; the
    /// cached values win until storage catches up.
    pub fn update_metadata(&mut self, loaded: &Torrent) {
        self.id = loaded.id;
        self.up_multiplier = loaded.up_multiplier;
        self.down_multiplier = loaded.down_multiplier;
        self.snatched = self.snatched.max(loaded.snatched);
        if self.unprune_pending && loaded.is_pruned() {
            return;
        }
        self.unprune_pending = false;
        self.status = loaded.status;
    }

    /// Resets a pruned torrent to normal until storage records the change.
    pub fn unprune(&mut self) {
        self.status = 0;
        self.unprune_pending = true;
    }

    /// Removes peers whose last announce is older than `cutoff`.
    pub fn purge_inactive(&mut self, cutoff: i64) -> u64 {
        let before = self.peers_count();
        self.seeders.retain(|_, peer| peer.last_announce >= cutoff);
        self.leechers.retain(|_, peer| peer.last_announce >= cutoff);
        (before - self.peers_count()) as u64
    }
}
