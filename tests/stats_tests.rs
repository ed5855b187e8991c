// Integration tests for statistics

mod common;

use torrust_ratio::stats::enums::stats_event::StatsEvent;

#[tokio::test]
async fn test_stats_after_initial_load() {
    let (tracker, _storage) = common::create_test_tracker().await;

    let stats = tracker.get_stats();

    assert_eq!(stats.users, 1, "One user loaded");
    assert_eq!(stats.torrents, 1, "One torrent loaded");
    assert_eq!(stats.whitelist, 1, "One whitelisted client");
    assert_eq!(stats.reloads, 1);
    assert_eq!(stats.announces, 0);
    assert!(!stats.freeleech);
    tracker.shutdown().await;
}

#[tokio::test]
async fn test_stats_increment_decrement() {
    let (tracker, _storage) = common::create_test_tracker().await;

    tracker.update_stats(StatsEvent::Announces, 10);
    tracker.update_stats(StatsEvent::AnnounceFailures, 2);
    let stats = tracker.update_stats(StatsEvent::Announces, -3);
    assert_eq!(stats.announces, 7);
    assert_eq!(stats.announce_failures, 2);

    let stats = tracker.set_stats(StatsEvent::Announces, 0);
    assert_eq!(stats.announces, 0);
    tracker.shutdown().await;
}

#[tokio::test]
async fn test_announce_counters() {
    let (tracker, _storage) = common::create_test_tracker().await;
    let user = tracker.cache.find_user(common::TEST_PASSKEY).unwrap();

    let request = common::create_test_request(common::TEST_INFO_HASH, common::random_peer_id(), 100);
    tracker.handle_announce(&user, &request).await.unwrap();

    let unknown = common::create_test_request(common::random_info_hash(), common::random_peer_id(), 100);
    assert!(tracker.handle_announce(&user, &unknown).await.is_err());

    tracker.shutdown().await;
    let stats = tracker.get_stats();
    assert_eq!(stats.announces, 1);
    assert_eq!(stats.announce_failures, 1);
    assert_eq!(stats.records_flushed, 4, "torrent, transfer history, user and transfer ip");
}
