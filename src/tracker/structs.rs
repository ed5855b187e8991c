//! Data structures for the swarm and the announce path.

/// Central tracker handle tying cache, storage and write-back together.
pub mod torrent_tracker;

/// 20-byte torrent info hash identifier.
pub mod info_hash;

/// 20-byte peer identifier.
pub mod peer_id;

/// Composite `(user id, peer id)` swarm key.
pub mod peer_key;

/// One client session in a swarm.
pub mod peer;

/// Cached torrent metadata plus its seeders and leechers.
pub mod torrent;

/// Cached tracker account.
pub mod user;

/// Parsed announce parameters.
pub mod announce_request;

/// Counts and selected peers returned to the client.
pub mod announce_response;
