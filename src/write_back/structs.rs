/// Torrent snatch delta and swarm size.
pub mod torrent_record;

/// User accounting delta.
pub mod user_record;

/// Per user and torrent transfer delta.
pub mod transfer_history_record;

/// Peer address change.
pub mod transfer_ip_record;

/// Completed download.
pub mod snatch_record;

/// Current depth of each queue.
pub mod queue_lengths;

/// The pipeline handle.
pub mod write_back;
