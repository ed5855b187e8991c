use std::fmt;
use crate::storage::enums::storage_engine::StorageEngine;

impl fmt::Display for StorageEngine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StorageEngine::memory => write!(f, "memory"),
            StorageEngine::mysql => write!(f, "mysql")
        }
    }
}
