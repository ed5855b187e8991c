use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use torrust_ratio::common::common::{current_time, setup_logging};
use torrust_ratio::config::structs::configuration::Configuration;
use torrust_ratio::http::http::http_service;
use torrust_ratio::stats::enums::stats_event::StatsEvent;
use torrust_ratio::storage::storage::storage_connector;
use torrust_ratio::structs::Cli;
use torrust_ratio::tracker::structs::torrent_tracker::TorrentTracker;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = config.validate() {
        eprintln!("Invalid configuration: {error}");
        exit(101);
    }

    if let Err(error) = setup_logging(&config) {
        eprintln!("Unable to set up logging: {error}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let _sentry_guard: Option<ClientInitGuard> = config.sentry_config.enabled.then(|| {
        sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(config.sentry_config.environment.clone().into()),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            ..Default::default()
        }))
    });

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let storage = match storage_connector(&config.database).await {
                Ok(storage) => storage,
                Err(error) => {
                    error!("[BOOT] Unable to open storage: {error}");
                    exit(1);
                }
            };

            let tracker = Arc::new(TorrentTracker::new(config.clone(), storage).await);
            if tracker.reload().await.is_err() {
                error!("[BOOT] Initial load failed, exiting...");
                exit(1);
            }

            let tokio_shutdown = Shutdown::new().map_err(|_| std::io::Error::other("shutdown handler already created"))?;
            let mut background_tasks = Vec::new();

            let deadlocks_handler = tokio_shutdown.clone();
            background_tasks.push(tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            }));

            let reload_handler = tokio_shutdown.clone();
            let tracker_spawn_reload = tracker.clone();
            let reload_interval = config.tracker_config.reload_interval;
            info!("[BOOT] Starting thread for reloading with {reload_interval} seconds delay...");
            background_tasks.push(tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(reload_interval));
                interval.tick().await;
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let _ = tracker_spawn_reload.reload().await;
                        }
                        _ = reload_handler.handle() => {
                            info!("[BOOT] Shutting down thread for reloading...");
                            return;
                        }
                    }
                }
            }));

            let purge_handler = tokio_shutdown.clone();
            let tracker_spawn_purge = tracker.clone();
            let purge_interval = config.tracker_config.purge_interval;
            info!("[BOOT] Starting thread for peer purging with {purge_interval} seconds delay...");
            background_tasks.push(tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(purge_interval));
                interval.tick().await;
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            tracker_spawn_purge.purge_inactive_peers(current_time()).await;
                        }
                        _ = purge_handler.handle() => {
                            info!("[BOOT] Shutting down thread for peer purging...");
                            return;
                        }
                    }
                }
            }));

            let stats_handler = tokio_shutdown.clone();
            let tracker_spawn_stats = tracker.clone();
            let console_interval = config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
            background_tasks.push(tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            tracker_spawn_stats.set_stats(StatsEvent::TimestampConsole, current_time());
                            let stats = tracker_spawn_stats.get_stats();
                            let (seeders, leechers) = tracker_spawn_stats.cache.swarm_totals().await;
                            let queues = tracker_spawn_stats.write_back.queue_lengths();

                            info!(
                                "[STATS] Users: {} - Torrents: {} - Seeds: {} - Peers: {} - WList: {} - HnR: {} - Freeleech: {}",
                                stats.users, stats.torrents, seeders, leechers, stats.whitelist, stats.hit_and_runs, stats.freeleech
                            );
                            info!(
                                "[STATS] Announces: {} - Failures: {} - Timeouts: {} - Snatches: {} - Unpruned: {} - Purged: {}",
                                stats.announces, stats.announce_failures, stats.announce_timeouts,
                                stats.snatches, stats.unpruned, stats.purged_peers
                            );
                            info!(
                                "[STATS WRITE BACK] Flushed: {} - Dropped: {} - Retries: {} | Q: T:{} U:{} TH:{} TI:{} S:{}",
                                stats.records_flushed, stats.records_dropped, stats.deadlock_retries,
                                queues.torrents, queues.users, queues.transfer_history, queues.transfer_ips, queues.snatches
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            }));

            let mut http_futures = Vec::new();
            for http_server_object in &config.http_server {
                if http_server_object.enabled {
                    let address: SocketAddr = match http_server_object.bind_address.parse() {
                        Ok(address) => address,
                        Err(error) => {
                            error!("[BOOT] Invalid bind address {}: {error}", http_server_object.bind_address);
                            exit(1);
                        }
                    };
                    let (handle, future) = match http_service(address, tracker.clone(), http_server_object.clone()).await {
                        Ok(server) => server,
                        Err(error) => {
                            error!("[BOOT] Unable to bind to {address}: {error}");
                            exit(1);
                        }
                    };
                    http_futures.push((handle, future));
                }
            }

            let (http_handles, futures): (Vec<_>, Vec<_>) = http_futures.into_iter().unzip();
            tokio::spawn(async move {
                if let Err(error) = try_join_all(futures).await {
                    sentry::capture_error(&error);
                    error!("[HTTP] Server stopped with an error: {error}");
                }
            });

            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown request received, shutting down...");

            for handle in http_handles {
                handle.stop(true).await;
            }

            tokio_shutdown.handle().await;
            for task in background_tasks {
                let _ = task.await;
            }

            info!("Saving final data to storage...");
            tracker.shutdown().await;

            info!("Server shutting down completed");
            Ok(())
        })
}
