#![allow(dead_code)]
use rand::RngExt;
use std::sync::Arc;
use tempfile::TempDir;
use torrust_ratio::config::structs::configuration::Configuration;
use torrust_ratio::config::structs::http_trackers_config::HttpTrackersConfig;
use torrust_ratio::storage::structs::storage_memory::StorageMemory;
use torrust_ratio::tracker::enums::announce_event::AnnounceEvent;
use torrust_ratio::tracker::structs::announce_request::AnnounceRequest;
use torrust_ratio::tracker::structs::info_hash::InfoHash;
use torrust_ratio::tracker::structs::peer_id::PeerId;
use torrust_ratio::tracker::structs::torrent::Torrent;
use torrust_ratio::tracker::structs::torrent_tracker::TorrentTracker;
use torrust_ratio::tracker::structs::user::User;

pub type TestTracker = Arc<TorrentTracker>;
pub type TestConfig = Arc<Configuration>;
pub type TestStorage = Arc<StorageMemory>;

pub const TEST_PASSKEY: &str = "abcdefghijklmnopqrstuvwxyz012345";
pub const TEST_INFO_HASH: InfoHash = InfoHash([0x42; 20]);

pub async fn create_test_config() -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.write_back.flush_interval_ms = 10;
    config.write_back.deadlock_wait_ms = 1;
    Arc::new(config)
}

pub fn create_test_http_config() -> Arc<HttpTrackersConfig> {
    Arc::new(HttpTrackersConfig {
        enabled: true,
        bind_address: "127.0.0.1:34000".to_string(),
        real_ip: String::new(),
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        max_connections: 1000,
        threads: 4,
    })
}

pub fn create_test_user(id: u64, passkey: &str) -> User {
    User {
        id,
        passkey: passkey.to_string(),
        up_multiplier: 1.0,
        down_multiplier: 1.0,
        disable_download: false,
        slots: -1,
        used_slots: 0,
        slots_last_checked: 0,
    }
}

/// Memory storage holding one user, one torrent and the `-TR` client prefix.
pub fn create_test_storage() -> TestStorage {
    let storage = StorageMemory::with_journal();
    storage.add_user(create_test_user(1, TEST_PASSKEY));
    storage.add_torrent(Torrent::new(1, TEST_INFO_HASH, 1.0, 1.0, 0, 0));
    storage.add_whitelist("-TR");
    Arc::new(storage)
}

pub async fn create_test_tracker_with(config: TestConfig, storage: TestStorage) -> TestTracker {
    let tracker = Arc::new(TorrentTracker::new(config, storage).await);
    tracker.reload().await.expect("memory storage loads");
    tracker
}

pub async fn create_test_tracker() -> (TestTracker, TestStorage) {
    let storage = create_test_storage();
    let tracker = create_test_tracker_with(create_test_config().await, storage.clone()).await;
    (tracker, storage)
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash(bytes)
}

/// Random peer id carrying the whitelisted `-TR` client prefix.
pub fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    let mut bytes: [u8; 20] = rng.random();
    bytes[..8].copy_from_slice(b"-TR2940-");
    PeerId(bytes)
}

pub fn create_test_request(info_hash: InfoHash, peer_id: PeerId, left: u64) -> AnnounceRequest {
    AnnounceRequest {
        info_hash,
        peer_id,
        port: 6881,
        uploaded: 0,
        downloaded: 0,
        left,
        event: AnnounceEvent::Started,
        numwant: 50,
        compact: true,
        ip: String::from("10.0.0.1"),
    }
}
