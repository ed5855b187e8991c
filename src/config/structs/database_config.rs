use serde::{Deserialize, Serialize};
use crate::storage::enums::storage_engine::StorageEngine;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseConfig {
    pub engine: StorageEngine,
    pub path: String,
    pub max_connections: u32
}
