use std::sync::Arc;
use log::info;
use crate::cache::structs::swarm_cache::SwarmCache;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::storage::traits::storage_backend::StorageBackend;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::write_back::structs::write_back::WriteBack;

impl TorrentTracker {
    /// Wires an empty cache and a running write-back pipeline to `storage`.
    ///
    /// The cache stays empty until the first [`TorrentTracker::reload`].
    #[tracing::instrument(level = "debug", skip(storage))]
    pub async fn new(config: Arc<Configuration>, storage: Arc<dyn StorageBackend>) -> TorrentTracker
    {
        let stats = Arc::new(StatsAtomics::new());
        stats.set_freeleech(false);
        let write_back = Arc::new(WriteBack::start(storage.clone(), config.write_back.clone(), stats.clone()));
        info!("[BOOT] Tracker ready, storage engine: {}", config.database.engine);

        TorrentTracker {
            config,
            cache: Arc::new(SwarmCache::new()),
            storage,
            write_back,
            stats,
        }
    }

    /// Closes the write-back queues and waits until everything queued is persisted.
    pub async fn shutdown(&self)
    {
        self.write_back.shutdown().await;
    }
}
