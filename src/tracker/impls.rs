//! Implementation blocks for tracker structs.

pub mod announce_event;
pub mod announce_request;
pub mod announce_response;
pub mod info_hash;
pub mod peer;
pub mod peer_id;
pub mod torrent;
pub mod torrent_tracker;
pub mod torrent_tracker_announce;
pub mod torrent_tracker_maintenance;
