use async_trait::async_trait;
use crate::storage::errors::StorageError;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::user::User;
use crate::write_back::structs::snatch_record::SnatchRecord;
use crate::write_back::structs::torrent_record::TorrentRecord;
use crate::write_back::structs::transfer_history_record::TransferHistoryRecord;
use crate::write_back::structs::transfer_ip_record::TransferIpRecord;
use crate::write_back::structs::user_record::UserRecord;

/// Visitor handed to the bulk loaders. Returning an error aborts the iteration.
pub type Visitor<'a, T> = &'a mut (dyn FnMut(T) -> Result<(), StorageError> + Send);

#[async_trait]
pub trait StorageBackend: Send + Sync {
    async fn map_over_users(&self, visit: Visitor<'_, User>) -> Result<(), StorageError>;

    /// Torrents are visited with empty swarms.
    async fn map_over_torrents(&self, visit: Visitor<'_, Torrent>) -> Result<(), StorageError>;

    /// Visits client peer-id prefixes.
    async fn map_over_whitelist(&self, visit: Visitor<'_, String>) -> Result<(), StorageError>;

    /// Visits `(user id, torrent id)` pairs with an outstanding hit-and-run.
    async fn map_over_hit_and_runs(&self, visit: Visitor<'_, (u64, u64)>) -> Result<(), StorageError>;

    async fn freeleech_enabled(&self) -> Result<bool, StorageError>;

    async fn record_torrents(&self, batch: &[TorrentRecord]) -> Result<(), StorageError>;

    async fn record_users(&self, batch: &[UserRecord]) -> Result<(), StorageError>;

    async fn record_transfer_history(&self, batch: &[TransferHistoryRecord]) -> Result<(), StorageError>;

    async fn record_transfer_ips(&self, batch: &[TransferIpRecord]) -> Result<(), StorageError>;

    async fn record_snatches(&self, batch: &[SnatchRecord]) -> Result<(), StorageError>;

    /// Marks transfer history rows without an announce since `before` as inactive.
    async fn deactivate_stale_peers(&self, before: i64) -> Result<u64, StorageError>;
}
