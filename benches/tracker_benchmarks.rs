// Performance benchmarks for the announce path
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::RngExt;
use std::collections::HashMap;
use std::hint::black_box;
use std::sync::Arc;
use bip_bencode::ben_bytes;
use torrust_ratio::bencode::bencode::{announce_envelope, insert_key};
use torrust_ratio::config::structs::configuration::Configuration;
use torrust_ratio::storage::structs::storage_memory::StorageMemory;
use torrust_ratio::tracker::enums::announce_event::AnnounceEvent;
use torrust_ratio::tracker::structs::announce_request::AnnounceRequest;
use torrust_ratio::tracker::structs::info_hash::InfoHash;
use torrust_ratio::tracker::structs::peer::Peer;
use torrust_ratio::tracker::structs::peer_id::PeerId;
use torrust_ratio::tracker::structs::peer_key::PeerKey;
use torrust_ratio::tracker::structs::torrent::Torrent;
use torrust_ratio::tracker::structs::torrent_tracker::TorrentTracker;
use torrust_ratio::tracker::structs::user::User;

const PASSKEY: &str = "benchbenchbenchbenchbenchbench00";
const INFO_HASH: InfoHash = InfoHash([0x17; 20]);

fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    let mut bytes: [u8; 20] = rng.random();
    bytes[..8].copy_from_slice(b"-TR2940-");
    PeerId(bytes)
}

fn bench_user(id: u64) -> User {
    User {
        id,
        passkey: PASSKEY.to_string(),
        up_multiplier: 1.0,
        down_multiplier: 1.0,
        disable_download: false,
        slots: -1,
        used_slots: 0,
        slots_last_checked: 0,
    }
}

fn request(peer_id: PeerId, left: u64) -> AnnounceRequest {
    AnnounceRequest {
        info_hash: INFO_HASH,
        peer_id,
        port: 6881,
        uploaded: 0,
        downloaded: 0,
        left,
        event: AnnounceEvent::None,
        numwant: 50,
        compact: true,
        ip: String::from("10.0.0.1"),
    }
}

async fn create_tracker() -> Arc<TorrentTracker> {
    let storage = StorageMemory::new();
    storage.add_user(bench_user(1));
    storage.add_torrent(Torrent::new(1, INFO_HASH, 1.0, 1.0, 0, 0));
    storage.add_whitelist("-TR");
    let mut config = Configuration::init();
    config.write_back.log_flushes = false;
    let tracker = Arc::new(TorrentTracker::new(Arc::new(config), Arc::new(storage)).await);
    if let Err(error) = tracker.reload().await {
        panic!("memory storage failed to load: {error}");
    }
    tracker
}

fn populated_torrent(peers: u32) -> Torrent {
    let mut torrent = Torrent::new(1, INFO_HASH, 1.0, 1.0, 0, 0);
    for i in 0..peers {
        let peer_id = random_peer_id();
        let user_id = 2 + u64::from(i);
        let mut peer = Peer::new(peer_id, user_id, 1, 0, 0, 0);
        let ip = format!("10.{}.{}.{}", (i >> 16) as u8, (i >> 8) as u8, i as u8);
        if let Ok(parsed) = ip.parse() {
            peer.set_address(&ip, parsed, 6881);
        }
        peer.seeding = i % 3 == 0;
        torrent.insert_peer(PeerKey { user_id, peer_id }, peer);
    }
    torrent
}

fn bench_announce(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let tracker = rt.block_on(create_tracker());
    let user = tracker.cache.find_user(PASSKEY).unwrap();
    let peer_id = random_peer_id();
    let (tracker_ref, user_ref) = (&tracker, &user);

    c.bench_function("announce_existing_peer", |b| {
        b.to_async(&rt).iter(|| async move {
            black_box(tracker_ref.handle_announce(user_ref, &request(peer_id, 1000)).await.ok());
        });
    });

    c.bench_function("announce_new_peer", |b| {
        b.to_async(&rt).iter(|| async move {
            black_box(tracker_ref.handle_announce(user_ref, &request(random_peer_id(), 1000)).await.ok());
        });
    });

    rt.block_on(tracker.shutdown());
}

fn bench_concurrent_announces(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let tracker = rt.block_on(create_tracker());
    let user = tracker.cache.find_user(PASSKEY).unwrap();
    let (tracker_ref, user_ref) = (&tracker, &user);

    c.bench_function("concurrent_100_announces", |b| {
        b.to_async(&rt).iter(|| async move {
            let mut handles = Vec::with_capacity(100);
            for _ in 0..100 {
                let tracker = tracker_ref.clone();
                let user = user_ref.clone();
                handles.push(tokio::spawn(async move {
                    tracker.handle_announce(&user, &request(random_peer_id(), 1000)).await.ok()
                }));
            }
            for handle in handles {
                black_box(handle.await.unwrap());
            }
        });
    });

    rt.block_on(tracker.shutdown());
}

fn bench_select_peers(c: &mut Criterion) {
    let torrent = populated_torrent(1000);
    let mut group = c.benchmark_group("select_peers");

    for numwant in [10usize, 50, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(numwant), numwant, |b, &numwant| {
            b.iter(|| {
                black_box(TorrentTracker::select_peers(&torrent, 1, false, numwant));
            });
        });
    }

    group.finish();
}

fn bench_bencode_response(c: &mut Criterion) {
    let peers: Vec<u8> = (0..50u8).flat_map(|i| [10, 0, 0, i, 0x1a, 0xe1]).collect();

    c.bench_function("bencode_compact_response", |b| {
        b.iter(|| {
            let mut response = announce_envelope(120, 340, 1800, 900);
            insert_key(&mut response, "peers", ben_bytes!(peers.clone()));
            black_box(response.encode());
        });
    });
}

fn bench_query_parsing(c: &mut Criterion) {
    let query = "info_hash=%17%17%17%17%17%17%17%17%17%17%17%17%17%17%17%17%17%17%17%17\
        &peer_id=-TR2940-abcdefghijkl&port=6881&uploaded=1024&downloaded=2048&left=0&event=completed&compact=1";

    c.bench_function("parse_announce_query", |b| {
        b.iter(|| {
            let parsed: HashMap<String, Vec<Vec<u8>>> = torrust_ratio::common::common::parse_query(Some(query.to_string())).unwrap();
            black_box(AnnounceRequest::from_query(&parsed, String::from("10.0.0.1")).ok());
        });
    });
}

criterion_group!(
    benches,
    bench_announce,
    bench_concurrent_announces,
    bench_select_peers,
    bench_bencode_response,
    bench_query_parsing,
);

criterion_main!(benches);
