use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
use parking_lot::{Mutex, RwLock};
use crate::storage::errors::StorageError;
use crate::storage::structs::storage_journal::StorageJournal;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::user::User;

/// In-process storage engine.
///
/// Seed data is returned by the bulk visitors. Recorded batches update the seeded
/// torrents (snatch count, un-prune) and, when the journal is enabled, are kept
/// verbatim for inspection.
pub struct StorageMemory {
    pub(crate) users: RwLock<Vec<User>>,
    pub(crate) torrents: RwLock<Vec<Torrent>>,
    pub(crate) whitelist: RwLock<Vec<String>>,
    pub(crate) hit_and_runs: RwLock<Vec<(u64, u64)>>,
    pub(crate) freeleech: AtomicBool,
    pub(crate) journal: Option<Mutex<StorageJournal>>,
    pub(crate) injected_failures: Mutex<VecDeque<StorageError>>,
    pub(crate) fail_loads: AtomicBool,
}
