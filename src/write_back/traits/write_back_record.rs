use async_trait::async_trait;
use crate::config::structs::write_back_config::WriteBackConfig;
use crate::storage::errors::StorageError;
use crate::storage::traits::storage_backend::StorageBackend;

/// A record category with its own queue and batched storage sink.
#[async_trait]
pub trait WriteBackRecord: Sized + Send + Sync + 'static {
    /// Used in log lines.
    const CATEGORY: &'static str;

    /// Queue capacity, which is also the largest batch handed to storage.
    fn capacity(config: &WriteBackConfig) -> usize;

    async fn persist(storage: &dyn StorageBackend, batch: &[Self]) -> Result<(), StorageError>;
}
