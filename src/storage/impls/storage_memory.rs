use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use crate::storage::errors::StorageError;
use crate::storage::structs::storage_journal::StorageJournal;
use crate::storage::structs::storage_memory::StorageMemory;
use crate::storage::traits::storage_backend::{StorageBackend, Visitor};
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::user::User;
use crate::write_back::structs::snatch_record::SnatchRecord;
use crate::write_back::structs::torrent_record::TorrentRecord;
use crate::write_back::structs::transfer_history_record::TransferHistoryRecord;
use crate::write_back::structs::transfer_ip_record::TransferIpRecord;
use crate::write_back::structs::user_record::UserRecord;

impl StorageMemory {
    pub fn new() -> StorageMemory {
        Self::build(None)
    }

    /// Keeps every recorded batch in a [`StorageJournal`].
    pub fn with_journal() -> StorageMemory {
        Self::build(Some(Mutex::new(StorageJournal::default())))
    }

    fn build(journal: Option<Mutex<StorageJournal>>) -> StorageMemory {
        StorageMemory {
            users: RwLock::new(Vec::new()),
            torrents: RwLock::new(Vec::new()),
            whitelist: RwLock::new(Vec::new()),
            hit_and_runs: RwLock::new(Vec::new()),
            freeleech: AtomicBool::new(false),
            journal,
            injected_failures: Mutex::new(VecDeque::new()),
            fail_loads: AtomicBool::new(false),
        }
    }

    pub fn add_user(&self, user: User) {
        let mut users = self.users.write();
        users.retain(|existing| existing.id != user.id);
        users.push(user);
    }

    pub fn remove_user(&self, user_id: u64) {
        self.users.write().retain(|existing| existing.id != user_id);
    }

    pub fn add_torrent(&self, torrent: Torrent) {
        let mut torrents = self.torrents.write();
        torrents.retain(|existing| existing.info_hash != torrent.info_hash);
        torrents.push(torrent);
    }

    pub fn remove_torrent(&self, torrent_id: u64) {
        self.torrents.write().retain(|existing| existing.id != torrent_id);
    }

    pub fn add_whitelist(&self, prefix: &str) {
        self.whitelist.write().push(prefix.to_string());
    }

    pub fn clear_whitelist(&self) {
        self.whitelist.write().clear();
    }

    pub fn add_hit_and_run(&self, user_id: u64, torrent_id: u64) {
        self.hit_and_runs.write().push((user_id, torrent_id));
    }

    pub fn set_freeleech(&self, enabled: bool) {
        self.freeleech.store(enabled, Ordering::SeqCst);
    }

    /// The next batch calls fail with these errors, one per call.
    pub fn inject_failure(&self, error: StorageError) {
        self.injected_failures.lock().push_back(error);
    }

    /// Makes every bulk visitor fail until switched off again.
    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    pub fn journal(&self) -> StorageJournal {
        self.journal.as_ref().map(|journal| journal.lock().clone()).unwrap_or_default()
    }

    pub fn stored_torrent(&self, torrent_id: u64) -> Option<Torrent> {
        self.torrents.read().iter().find(|torrent| torrent.id == torrent_id).cloned()
    }

    fn check_load(&self) -> Result<(), StorageError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(StorageError::Failure(String::from("memory storage is unavailable")));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<(), StorageError> {
        match self.injected_failures.lock().pop_front() {
            Some(error) => Err(error),
            None => Ok(())
        }
    }

    fn journal_append(&self, append: impl FnOnce(&mut StorageJournal)) {
        if let Some(journal) = &self.journal {
            let mut journal = journal.lock();
            append(&mut journal);
            journal.batches += 1;
        }
    }
}

impl Default for StorageMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageBackend for StorageMemory {
    async fn map_over_users(&self, visit: Visitor<'_, User>) -> Result<(), StorageError> {
        self.check_load()?;
        let users = self.users.read().clone();
        for user in users {
            visit(user)?;
        }
        Ok(())
    }

    async fn map_over_torrents(&self, visit: Visitor<'_, Torrent>) -> Result<(), StorageError> {
        self.check_load()?;
        let torrents = self.torrents.read().clone();
        for torrent in torrents {
            visit(torrent)?;
        }
        Ok(())
    }

    async fn map_over_whitelist(&self, visit: Visitor<'_, String>) -> Result<(), StorageError> {
        self.check_load()?;
        let whitelist = self.whitelist.read().clone();
        for prefix in whitelist {
            visit(prefix)?;
        }
        Ok(())
    }

    async fn map_over_hit_and_runs(&self, visit: Visitor<'_, (u64, u64)>) -> Result<(), StorageError> {
        self.check_load()?;
        let hit_and_runs = self.hit_and_runs.read().clone();
        for pair in hit_and_runs {
            visit(pair)?;
        }
        Ok(())
    }

    async fn freeleech_enabled(&self) -> Result<bool, StorageError> {
        self.check_load()?;
        Ok(self.freeleech.load(Ordering::SeqCst))
    }

    async fn record_torrents(&self, batch: &[TorrentRecord]) -> Result<(), StorageError> {
        self.check_write()?;
        {
            let mut torrents = self.torrents.write();
            for record in batch {
                if let Some(torrent) = torrents.iter_mut().find(|torrent| torrent.id == record.torrent_id) {
                    torrent.snatched += record.delta_snatch;
                    torrent.last_action = torrent.last_action.max(record.last_action);
                    if record.unpruned {
                        torrent.status = 0;
                    }
                }
            }
        }
        self.journal_append(|journal| journal.torrents.extend_from_slice(batch));
        Ok(())
    }

    async fn record_users(&self, batch: &[UserRecord]) -> Result<(), StorageError> {
        self.check_write()?;
        self.journal_append(|journal| journal.users.extend_from_slice(batch));
        Ok(())
    }

    async fn record_transfer_history(&self, batch: &[TransferHistoryRecord]) -> Result<(), StorageError> {
        self.check_write()?;
        self.journal_append(|journal| journal.transfer_history.extend_from_slice(batch));
        Ok(())
    }

    async fn record_transfer_ips(&self, batch: &[TransferIpRecord]) -> Result<(), StorageError> {
        self.check_write()?;
        self.journal_append(|journal| journal.transfer_ips.extend_from_slice(batch));
        Ok(())
    }

    async fn record_snatches(&self, batch: &[SnatchRecord]) -> Result<(), StorageError> {
        self.check_write()?;
        self.journal_append(|journal| journal.snatches.extend_from_slice(batch));
        Ok(())
    }

    async fn deactivate_stale_peers(&self, before: i64) -> Result<u64, StorageError> {
        self.check_write()?;
        self.journal_append(|journal| journal.deactivations.push(before));
        Ok(0)
    }
}
