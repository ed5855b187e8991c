use crate::tracker::structs::peer_id::PeerId;

/// Swarm membership key. Two accounts announcing the same peer id never collide.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct PeerKey {
    pub user_id: u64,
    pub peer_id: PeerId,
}
