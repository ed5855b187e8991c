use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use log::debug;
use parking_lot::RwLock;
use tokio::sync::Mutex;
use crate::cache::errors::CacheError;
use crate::cache::structs::swarm_cache::SwarmCache;
use crate::storage::traits::storage_backend::StorageBackend;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::user::User;

impl SwarmCache {
    pub fn new() -> SwarmCache {
        SwarmCache {
            users: RwLock::new(HashMap::new()),
            torrents: RwLock::new(HashMap::new()),
            hit_and_runs: RwLock::new(HashSet::new()),
            whitelist: RwLock::new(Vec::new()),
            freeleech: AtomicBool::new(false),
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn load_users(&self, storage: &dyn StorageBackend) -> Result<u64, CacheError>
    {
        let mut users = HashMap::new();
        storage.map_over_users(&mut |user: User| {
            users.insert(user.passkey.clone(), Arc::new(user));
            Ok(())
        }).await?;
        let count = users.len() as u64;
        *self.users.write() = users;
        Ok(count)
    }

    /// Reloads torrent metadata. Torrents that survive keep their live swarm.
    ///
    /// The result is merged into the live map, so a `save_torrent` or
    /// `remove_torrent` racing with the reload is kept.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn load_torrents(&self, storage: &dyn StorageBackend) -> Result<u64, CacheError>
    {
        let mut loaded = Vec::new();
        storage.map_over_torrents(&mut |torrent: Torrent| {
            loaded.push(torrent);
            Ok(())
        }).await?;

        let snapshot = self.torrents.read().clone();
        let mut stored = HashSet::with_capacity(loaded.len());
        let mut fresh = Vec::new();
        for torrent in loaded {
            stored.insert(torrent.info_hash);
            match snapshot.get(&torrent.info_hash) {
                Some(entry) => entry.lock().await.update_metadata(&torrent),
                None => fresh.push(torrent)
            }
        }

        let mut torrents = self.torrents.write();
        torrents.retain(|info_hash, _| stored.contains(info_hash) || !snapshot.contains_key(info_hash));
        for torrent in fresh {
            torrents.entry(torrent.info_hash).or_insert_with(|| Arc::new(Mutex::new(torrent)));
        }
        Ok(torrents.len() as u64)
    }

    /// Rebuilds the client whitelist from scratch.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn load_whitelist(&self, storage: &dyn StorageBackend) -> Result<u64, CacheError>
    {
        let mut whitelist = Vec::new();
        storage.map_over_whitelist(&mut |prefix: String| {
            whitelist.push(prefix);
            Ok(())
        }).await?;
        let count = whitelist.len() as u64;
        *self.whitelist.write() = whitelist;
        Ok(count)
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn load_hit_and_runs(&self, storage: &dyn StorageBackend) -> Result<u64, CacheError>
    {
        let mut hit_and_runs = HashSet::new();
        storage.map_over_hit_and_runs(&mut |pair: (u64, u64)| {
            hit_and_runs.insert(pair);
            Ok(())
        }).await?;
        let count = hit_and_runs.len() as u64;
        *self.hit_and_runs.write() = hit_and_runs;
        Ok(count)
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn load_freeleech(&self, storage: &dyn StorageBackend) -> Result<bool, CacheError>
    {
        let enabled = storage.freeleech_enabled().await?;
        self.set_freeleech(enabled);
        Ok(enabled)
    }

    pub fn find_user(&self, passkey: &str) -> Option<Arc<User>>
    {
        self.users.read().get(passkey).cloned()
    }

    pub fn find_torrent(&self, info_hash: &InfoHash) -> Option<Arc<Mutex<Torrent>>>
    {
        self.torrents.read().get(info_hash).cloned()
    }

    pub fn peer_whitelisted(&self, peer_id: &PeerId) -> bool
    {
        self.whitelist.read().iter().any(|prefix| peer_id.starts_with(prefix.as_bytes()))
    }

    pub fn has_hit_and_run(&self, user_id: u64, torrent_id: u64) -> bool
    {
        self.hit_and_runs.read().contains(&(user_id, torrent_id))
    }

    pub fn freeleech(&self) -> bool
    {
        self.freeleech.load(Ordering::SeqCst)
    }

    pub fn set_freeleech(&self, enabled: bool)
    {
        self.freeleech.store(enabled, Ordering::SeqCst);
    }

    pub fn save_user(&self, user: User)
    {
        self.users.write().insert(user.passkey.clone(), Arc::new(user));
    }

    /// Inserts a torrent, or refreshes the metadata of a cached one without touching its peers.
    pub async fn save_torrent(&self, torrent: Torrent)
    {
        match self.find_torrent(&torrent.info_hash) {
            Some(entry) => entry.lock().await.update_metadata(&torrent),
            None => {
                let info_hash = torrent.info_hash;
                self.torrents.write().entry(info_hash).or_insert_with(|| Arc::new(Mutex::new(torrent)));
            }
        }
    }

    pub fn remove_user(&self, passkey: &str) -> bool
    {
        self.users.write().remove(passkey).is_some()
    }

    pub fn remove_torrent(&self, info_hash: &InfoHash) -> bool
    {
        self.torrents.write().remove(info_hash).is_some()
    }

    pub fn total_users(&self) -> u64
    {
        self.users.read().len() as u64
    }

    pub fn total_torrents(&self) -> u64
    {
        self.torrents.read().len() as u64
    }

    fn torrent_entries(&self) -> Vec<Arc<Mutex<Torrent>>>
    {
        self.torrents.read().values().cloned().collect()
    }

    /// Seeders and leechers across all torrents.
    pub async fn swarm_totals(&self) -> (u64, u64)
    {
        let mut seeders = 0u64;
        let mut leechers = 0u64;
        for entry in self.torrent_entries() {
            let torrent = entry.lock().await;
            seeders += torrent.seeders.len() as u64;
            leechers += torrent.leechers.len() as u64;
        }
        (seeders, leechers)
    }

    pub async fn total_peers(&self) -> u64
    {
        let (seeders, leechers) = self.swarm_totals().await;
        seeders + leechers
    }

    /// Drops peers whose last announce is older than `cutoff`.
    pub async fn purge_inactive_peers(&self, cutoff: i64) -> u64
    {
        let mut purged = 0u64;
        for entry in self.torrent_entries() {
            let mut torrent = entry.lock().await;
            let removed = torrent.purge_inactive(cutoff);
            if removed > 0 {
                debug!("[PURGE] Removed {removed} peers from torrent {}", torrent.info_hash);
            }
            purged += removed;
        }
        purged
    }
}

impl Default for SwarmCache {
    fn default() -> Self {
        Self::new()
    }
}
