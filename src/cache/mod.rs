//! The in-memory swarm cache.
//!
//! Holds every user (by passkey) and every torrent (by info hash) the tracker
//! knows about, plus the client whitelist, hit-and-run pairs and the global
//! freeleech flag. Between persistence points this is the source of truth.
//!
//! # Locking
//!
//! - One `parking_lot::RwLock` per top-level map, held only for lookups or for
//!   swapping in the result of a bulk load.
//! - Each torrent sits behind its own `tokio::sync::Mutex`, so announces on one
//!   torrent are serialized while different torrents proceed in parallel.
//!
//! Bulk loads build the new content off-lock and swap it in afterwards. A
//! failing source leaves the cache as it was.

/// Error types for cache loads.
pub mod errors;

/// Implementation blocks for the swarm cache.
pub mod impls;

/// The swarm cache itself.
pub mod structs;
