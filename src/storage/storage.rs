use std::sync::Arc;
use log::info;
use crate::config::structs::database_config::DatabaseConfig;
use crate::storage::enums::storage_engine::StorageEngine;
use crate::storage::errors::StorageError;
use crate::storage::structs::storage_memory::StorageMemory;
use crate::storage::structs::storage_mysql::StorageMySQL;
use crate::storage::traits::storage_backend::StorageBackend;

/// Builds the storage engine named in the configuration.
pub async fn storage_connector(config: &DatabaseConfig) -> Result<Arc<dyn StorageBackend>, StorageError>
{
    info!("[BOOT] Connecting to storage engine '{}'", config.engine);
    match config.engine {
        StorageEngine::memory => Ok(Arc::new(StorageMemory::new())),
        StorageEngine::mysql => Ok(Arc::new(StorageMySQL::create(&config.path, config.max_connections).await?))
    }
}
