//! The announce state engine.
//!
//! [`structs::torrent_tracker::TorrentTracker`] ties the swarm cache, the
//! storage backend and the write-back pipeline together. One announce runs
//! entirely under its torrent's lock:
//!
//! 1. validate the source address, the client whitelist and the torrent
//! 2. move the peer between seeders and leechers
//! 3. compute the accounting deltas from the previously stored counters
//! 4. enqueue the torrent, transfer history, user, and when needed transfer ip
//!    and snatch records
//! 5. pick a random peer sample for the response
//!
//! Peers are keyed by `(user id, peer id)`, so the same peer id under two
//! accounts never collides.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use torrust_ratio::config::structs::configuration::Configuration;
//! use torrust_ratio::storage::structs::storage_memory::StorageMemory;
//! use torrust_ratio::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let tracker = TorrentTracker::new(Arc::new(Configuration::init()), Arc::new(StorageMemory::new())).await;
//! tracker.reload().await?;
//! let response = tracker.handle_announce(&user, &request).await?;
//! ```

/// Announce events and errors.
pub mod enums;

/// Implementation blocks for tracker structs.
///
/// The `torrent_tracker_*` files split the `TorrentTracker` methods by concern.
pub mod impls;

/// Entities, requests and responses.
pub mod structs;
