use async_trait::async_trait;
use crate::config::structs::write_back_config::WriteBackConfig;
use crate::storage::errors::StorageError;
use crate::storage::traits::storage_backend::StorageBackend;
use crate::write_back::structs::snatch_record::SnatchRecord;
use crate::write_back::structs::torrent_record::TorrentRecord;
use crate::write_back::structs::transfer_history_record::TransferHistoryRecord;
use crate::write_back::structs::transfer_ip_record::TransferIpRecord;
use crate::write_back::structs::user_record::UserRecord;
use crate::write_back::traits::write_back_record::WriteBackRecord;

#[async_trait]
impl WriteBackRecord for TorrentRecord {
    const CATEGORY: &'static str = "torrent";

    fn capacity(config: &WriteBackConfig) -> usize {
        config.torrent_buffer
    }

    async fn persist(storage: &dyn StorageBackend, batch: &[Self]) -> Result<(), StorageError> {
        storage.record_torrents(batch).await
    }
}

#[async_trait]
impl WriteBackRecord for UserRecord {
    const CATEGORY: &'static str = "user";

    fn capacity(config: &WriteBackConfig) -> usize {
        config.user_buffer
    }

    async fn persist(storage: &dyn StorageBackend, batch: &[Self]) -> Result<(), StorageError> {
        storage.record_users(batch).await
    }
}

#[async_trait]
impl WriteBackRecord for TransferHistoryRecord {
    const CATEGORY: &'static str = "transfer history";

    fn capacity(config: &WriteBackConfig) -> usize {
        config.transfer_history_buffer
    }

    async fn persist(storage: &dyn StorageBackend, batch: &[Self]) -> Result<(), StorageError> {
        storage.record_transfer_history(batch).await
    }
}

#[async_trait]
impl WriteBackRecord for TransferIpRecord {
    const CATEGORY: &'static str = "transfer ip";

    fn capacity(config: &WriteBackConfig) -> usize {
        config.transfer_ip_buffer
    }

    async fn persist(storage: &dyn StorageBackend, batch: &[Self]) -> Result<(), StorageError> {
        storage.record_transfer_ips(batch).await
    }
}

#[async_trait]
impl WriteBackRecord for SnatchRecord {
    const CATEGORY: &'static str = "snatch";

    fn capacity(config: &WriteBackConfig) -> usize {
        config.snatch_buffer
    }

    async fn persist(storage: &dyn StorageBackend, batch: &[Self]) -> Result<(), StorageError> {
        storage.record_snatches(batch).await
    }
}
