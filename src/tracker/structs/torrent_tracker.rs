use std::sync::Arc;
use crate::cache::structs::swarm_cache::SwarmCache;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::storage::traits::storage_backend::StorageBackend;
use crate::write_back::structs::write_back::WriteBack;

pub struct TorrentTracker {
    pub config: Arc<Configuration>,
    pub cache: Arc<SwarmCache>,
    pub storage: Arc<dyn StorageBackend>,
    pub write_back: Arc<WriteBack>,
    pub stats: Arc<StatsAtomics>,
}
