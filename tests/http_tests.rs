mod common;

use std::sync::Arc;
use actix_web::{test, App};
use percent_encoding::{percent_encode, NON_ALPHANUMERIC};
use torrust_ratio::config::structs::http_trackers_config::HttpTrackersConfig;
use torrust_ratio::http::http::{http_service_announce_handler, http_service_routes};
use torrust_ratio::http::structs::http_service_data::HttpServiceData;
use torrust_ratio::storage::errors::StorageError;
use torrust_ratio::tracker::enums::announce_error::AnnounceError;
use torrust_ratio::tracker::structs::info_hash::InfoHash;
use torrust_ratio::tracker::structs::peer_id::PeerId;

fn announce_uri(passkey: &str, info_hash: InfoHash, peer_id: PeerId, extra: &str) -> String {
    format!(
        "/{passkey}/announce?info_hash={}&peer_id={}&port=6881&uploaded=0&downloaded=0&left=1000{extra}",
        percent_encode(&info_hash.0, NON_ALPHANUMERIC),
        percent_encode(&peer_id.0, NON_ALPHANUMERIC)
    )
}

fn service_data(tracker: common::TestTracker, http_config: Arc<HttpTrackersConfig>) -> Arc<HttpServiceData> {
    Arc::new(HttpServiceData {
        torrent_tracker: tracker,
        http_trackers_config: http_config,
    })
}

#[actix_web::test]
async fn test_http_announce_endpoint() {
    let (tracker, _storage) = common::create_test_tracker().await;
    let app = test::init_service(
        App::new().configure(http_service_routes(service_data(tracker.clone(), common::create_test_http_config())))
    ).await;

    let req = test::TestRequest::get()
        .uri(&announce_uri(common::TEST_PASSKEY, common::TEST_INFO_HASH, common::random_peer_id(), "&compact=1"))
        .peer_addr("10.0.0.1:50000".parse().unwrap())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(resp.headers().get("content-type").unwrap(), "text/plain; charset=utf-8");
    let body = test::read_body(resp).await;
    assert!(body.starts_with(b"d8:completei0e10:incompletei1e8:intervali1800e12:min intervali900e5:peers0:e"));
    tracker.shutdown().await;
}

#[actix_web::test]
async fn test_http_unknown_passkey() {
    let (tracker, _storage) = common::create_test_tracker().await;
    let app = test::init_service(
        App::new().configure(http_service_routes(service_data(tracker.clone(), common::create_test_http_config())))
    ).await;

    let req = test::TestRequest::get()
        .uri(&announce_uri("nobody", common::TEST_INFO_HASH, common::random_peer_id(), ""))
        .peer_addr("10.0.0.1:50000".parse().unwrap())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success(), "failures are still 200");
    assert_eq!(test::read_body(resp).await.as_ref(), b"d14:failure reason17:Passkey not founde");
    tracker.shutdown().await;
}

#[actix_web::test]
async fn test_http_malformed_request() {
    let (tracker, _storage) = common::create_test_tracker().await;
    let app = test::init_service(
        App::new().configure(http_service_routes(service_data(tracker.clone(), common::create_test_http_config())))
    ).await;

    let req = test::TestRequest::get()
        .uri(&format!("/{}/announce?port=6881", common::TEST_PASSKEY))
        .peer_addr("10.0.0.1:50000".parse().unwrap())
        .to_request();
    let body = test::read_body(test::call_service(&app, req).await).await;

    assert_eq!(body.as_ref(), b"d14:failure reason17:Malformed requeste");
    tracker.shutdown().await;
}

#[actix_web::test]
async fn test_http_ipv6_peer_is_rejected() {
    let (tracker, _storage) = common::create_test_tracker().await;
    let app = test::init_service(
        App::new().configure(http_service_routes(service_data(tracker.clone(), common::create_test_http_config())))
    ).await;

    let req = test::TestRequest::get()
        .uri(&announce_uri(common::TEST_PASSKEY, common::TEST_INFO_HASH, common::random_peer_id(), ""))
        .peer_addr("[2001:db8::1]:50000".parse().unwrap())
        .to_request();
    let body = test::read_body(test::call_service(&app, req).await).await;

    assert_eq!(body.as_ref(), b"d14:failure reason20:Malformed IP addresse");
    tracker.shutdown().await;
}

#[actix_web::test]
async fn test_http_real_ip_header() {
    let (tracker, storage) = common::create_test_tracker().await;
    let mut http_config = (*common::create_test_http_config()).clone();
    http_config.real_ip = String::from("X-Real-IP");
    let app = test::init_service(
        App::new().configure(http_service_routes(service_data(tracker.clone(), Arc::new(http_config))))
    ).await;

    let req = test::TestRequest::get()
        .uri(&announce_uri(common::TEST_PASSKEY, common::TEST_INFO_HASH, common::random_peer_id(), ""))
        .peer_addr("127.0.0.1:50000".parse().unwrap())
        .insert_header(("X-Real-IP", "192.0.2.7"))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    tracker.shutdown().await;
    let journal = storage.journal();
    assert_eq!(journal.transfer_ips.len(), 1);
    assert_eq!(journal.transfer_ips[0].ip, "192.0.2.7");
}

#[actix_web::test]
async fn test_http_stats_endpoint() {
    let (tracker, _storage) = common::create_test_tracker().await;
    let app = test::init_service(
        App::new().configure(http_service_routes(service_data(tracker.clone(), common::create_test_http_config())))
    ).await;

    let req = test::TestRequest::get().uri("/stats").to_request();
    let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(json["total_users"], 1);
    assert_eq!(json["total_torrents"], 1);
    assert_eq!(json["total_peers"], 0);
    assert_eq!(json["stats"]["reloads"], 1);
    assert_eq!(json["queues"]["users"], 0);
    tracker.shutdown().await;
}

#[actix_web::test]
async fn test_http_not_found() {
    let (tracker, _storage) = common::create_test_tracker().await;
    let app = test::init_service(
        App::new().configure(http_service_routes(service_data(tracker.clone(), common::create_test_http_config())))
    ).await;

    let req = test::TestRequest::get().uri("/scrape").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    tracker.shutdown().await;
}

#[actix_web::test]
async fn test_http_announce_timeout_keeps_swarm_without_requeue() {
    let storage = common::create_test_storage();
    let mut config = (*common::create_test_config().await).clone();
    config.tracker_config.announce_timeout = 1;
    config.write_back.torrent_buffer = 1;
    config.write_back.user_buffer = 1;
    config.write_back.transfer_history_buffer = 1;
    config.write_back.transfer_ip_buffer = 1;
    config.write_back.deadlock_wait_ms = 1500;
    let tracker = common::create_test_tracker_with(Arc::new(config), storage.clone()).await;
    for _ in 0..4 {
        storage.inject_failure(StorageError::Conflict(String::from("Deadlock found when trying to get lock")));
    }
    let ip = "10.0.0.1".parse().unwrap();
    let stalled = common::random_peer_id();

    // The consumers pick up the first announce and stall on the conflicts, the
    // second one fills every queue.
    for _ in 0..2 {
        let request = test::TestRequest::get()
            .uri(&announce_uri(common::TEST_PASSKEY, common::TEST_INFO_HASH, stalled, ""))
            .to_http_request();
        assert!(http_service_announce_handler(&request, ip, common::TEST_PASSKEY, tracker.clone()).await.is_ok());
    }

    let blocked = common::random_peer_id();
    let request = test::TestRequest::get()
        .uri(&announce_uri(common::TEST_PASSKEY, common::TEST_INFO_HASH, blocked, ""))
        .to_http_request();
    let result = http_service_announce_handler(&request, ip, common::TEST_PASSKEY, tracker.clone()).await;

    assert_eq!(result.unwrap_err(), AnnounceError::Timeout);
    assert_eq!(tracker.get_stats().announce_timeouts, 1);
    assert_eq!(tracker.cache.swarm_totals().await, (0, 2), "the timed out peer stays in the swarm");

    tracker.shutdown().await;
    let journal = storage.journal();
    assert_eq!(journal.torrents.len(), 2);
    assert_eq!(journal.users.len(), 2);
    assert_eq!(journal.transfer_history.len(), 2);
    assert_eq!(journal.transfer_ips.len(), 1);
    assert_eq!(tracker.get_stats().records_dropped, 0);
}
