use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use parking_lot::RwLock;
use tokio::sync::Mutex;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::user::User;

pub struct SwarmCache {
    pub users: RwLock<HashMap<String, Arc<User>>>,
    pub torrents: RwLock<HashMap<InfoHash, Arc<Mutex<Torrent>>>>,
    pub hit_and_runs: RwLock<HashSet<(u64, u64)>>,
    pub whitelist: RwLock<Vec<String>>,
    pub freeleech: AtomicBool,
}
