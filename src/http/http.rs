use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use serde_json::json;
use crate::bencode::bencode::failure_envelope;
use crate::common::common::parse_query;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::announce_error::AnnounceError;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/stats").route(web::get().to(http_service_stats)));
        cfg.service(web::resource("/{passkey}/announce").route(web::get().to(http_service_announce)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

pub async fn http_service(
    addr: SocketAddr,
    data: Arc<TorrentTracker>,
    http_server_object: HttpTrackersConfig
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>), std::io::Error>
{
    let keep_alive = http_server_object.keep_alive;
    let request_timeout = http_server_object.request_timeout;
    let disconnect_timeout = http_server_object.disconnect_timeout;
    let max_connections = http_server_object.max_connections;
    let worker_threads = http_server_object.threads;
    let service_data = Arc::new(HttpServiceData {
        torrent_tracker: data,
        http_trackers_config: Arc::new(http_server_object)
    });

    info!("[HTTP] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(sentry_actix::Sentry::new())
            .configure(http_service_routes(service_data.clone()))
    })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(request_timeout))
        .client_disconnect_timeout(Duration::from_secs(disconnect_timeout))
        .max_connections(max_connections as usize)
        .workers(worker_threads as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_announce(request: HttpRequest, path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let passkey = path.into_inner();
    let ip = match http_service_retrieve_remote_ip(&request, &data.http_trackers_config.real_ip) {
        Ok(ip) => ip,
        Err(_) => return http_service_failure("unknown origin ip")
    };

    match http_service_announce_handler(&request, ip, &passkey, data.torrent_tracker.clone()).await {
        Ok(body) => HttpResponse::Ok().content_type(ContentType::plaintext()).body(body),
        Err(error) => {
            debug!("[HTTP] Announce from {ip} failed: {error}");
            http_service_failure(&error.to_string())
        }
    }
}

/// Resolves the passkey, parses the query and runs the announce within `announce_timeout`.
pub async fn http_service_announce_handler(request: &HttpRequest, ip: IpAddr, passkey: &str, tracker: Arc<TorrentTracker>) -> Result<Vec<u8>, AnnounceError>
{
    let user = tracker.cache.find_user(passkey).ok_or(AnnounceError::PassKeyNotFound)?;
    let query = parse_query(Some(request.query_string().to_string()))
        .map_err(|error| AnnounceError::MalformedRequest(error.to_string()))?;
    let announce = AnnounceRequest::from_query(&query, ip.to_string())?;

    let announce_timeout = Duration::from_secs(tracker.config.tracker_config.announce_timeout);
    match tokio::time::timeout(announce_timeout, tracker.handle_announce(&user, &announce)).await {
        Ok(result) => Ok(result?.encode()),
        Err(_) => {
            tracker.update_stats(StatsEvent::AnnounceTimeouts, 1);
            Err(AnnounceError::Timeout)
        }
    }
}

pub async fn http_service_stats(data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let tracker = &data.torrent_tracker;
    let (seeders, leechers) = tracker.cache.swarm_totals().await;
    HttpResponse::Ok().json(json!({
        "stats": tracker.get_stats(),
        "total_users": tracker.cache.total_users(),
        "total_torrents": tracker.cache.total_torrents(),
        "total_peers": seeders + leechers,
        "seeders": seeders,
        "leechers": leechers,
        "queues": tracker.write_back.queue_lengths()
    }))
}

pub async fn http_service_not_found(request: HttpRequest) -> HttpResponse
{
    debug!("[HTTP] Request for {}: 404 Not Found", request.path());
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body(failure_envelope("unknown request").encode())
}

pub fn http_service_failure(reason: &str) -> HttpResponse
{
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(failure_envelope(reason).encode())
}

/// Socket address of the client, or the `real_ip` header when one is configured and present.
/// IPv4-mapped IPv6 addresses are reported as plain IPv4.
pub fn http_service_retrieve_remote_ip(request: &HttpRequest, real_ip: &str) -> Result<IpAddr, ()>
{
    let origin_ip = match request.peer_addr() {
        None => return Err(()),
        Some(addr) => addr.ip()
    };
    if real_ip.is_empty() {
        return Ok(origin_ip.to_canonical());
    }
    match request.headers().get(real_ip) {
        Some(header) => {
            let value = header.to_str().map_err(|_| ())?;
            IpAddr::from_str(value.trim()).map(|ip| ip.to_canonical()).map_err(|_| ())
        }
        None => Ok(origin_ip.to_canonical())
    }
}
