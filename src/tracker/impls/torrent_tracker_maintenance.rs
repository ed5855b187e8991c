use log::{error, info, warn};
use crate::cache::errors::CacheError;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Refreshes users, hit-and-runs, torrents, whitelist and the freeleech flag from storage.
    ///
    /// Each source is swapped in on its own, so a failure halfway keeps the sources
    /// loaded so far and leaves the rest as they were.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn reload(&self) -> Result<(), CacheError>
    {
        let result = self.reload_sources().await;
        match &result {
            Ok(()) => { self.stats.update(StatsEvent::Reloads, 1); }
            Err(reload_error) => {
                self.stats.update(StatsEvent::ReloadFailures, 1);
                error!("[RELOAD] Reload failed: {reload_error}");
            }
        }
        self.stats.set(StatsEvent::TimestampReload, crate::common::common::current_time());
        result
    }

    async fn reload_sources(&self) -> Result<(), CacheError>
    {
        let storage = self.storage.as_ref();

        let users = self.cache.load_users(storage).await?;
        self.stats.set(StatsEvent::Users, users as i64);

        let hit_and_runs = self.cache.load_hit_and_runs(storage).await?;
        self.stats.set(StatsEvent::HitAndRuns, hit_and_runs as i64);

        let torrents = self.cache.load_torrents(storage).await?;
        self.stats.set(StatsEvent::Torrents, torrents as i64);

        let whitelist = self.cache.load_whitelist(storage).await?;
        self.stats.set(StatsEvent::Whitelist, whitelist as i64);

        let freeleech = self.cache.load_freeleech(storage).await?;
        self.stats.set_freeleech(freeleech);

        info!("[RELOAD] Loaded {users} users, {hit_and_runs} hit and runs, {torrents} torrents, {whitelist} whitelisted clients (freeleech: {freeleech})");
        Ok(())
    }

    /// Drops peers that have not announced within `peers_timeout` seconds of `now`,
    /// and marks them inactive in storage.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn purge_inactive_peers(&self, now: i64) -> u64
    {
        let cutoff = now - self.config.tracker_config.peers_timeout as i64;
        let purged = self.cache.purge_inactive_peers(cutoff).await;
        self.stats.update(StatsEvent::PurgedPeers, purged as i64);
        self.stats.set(StatsEvent::TimestampPurge, now);

        match self.storage.deactivate_stale_peers(cutoff).await {
            Ok(rows) => info!("[PURGE] Removed {purged} inactive peers, {rows} stored rows deactivated"),
            Err(storage_error) => warn!("[PURGE] Removed {purged} inactive peers, deactivating in storage failed: {storage_error}")
        }
        purged
    }
}
