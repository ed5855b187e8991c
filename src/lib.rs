//! # Torrust-Ratio
//!
//! A ratio-accounting private BitTorrent tracker built on Actix-web.
//!
//! ## Overview
//!
//! Announces are answered entirely from an in-memory swarm cache. Every
//! accounting effect of an announce (upload/download credit, seed time, snatches,
//! peer addresses) is pushed into a bounded write-back pipeline that persists
//! batches in the background, so storage latency never reaches the client.
//!
//! ## Features
//!
//! - **Passkey announces** on `/{passkey}/announce`, compact or dictionary peer lists
//! - **Ratio accounting** with user and torrent multipliers, global freeleech and
//!   hit-and-run exemptions for users with disabled downloads
//! - **Client whitelist** by peer id prefix
//! - **Write-back** with batching, deadlock-aware retry and a flushing shutdown
//! - **Storage engines**: in-memory or MySQL (Gazelle schema)
//! - **Monitoring**: console statistics, `/stats` JSON and Sentry integration
//!
//! ## Modules
//!
//! - [`bencode`] - Response encoding
//! - [`cache`] - The in-memory swarm cache
//! - [`common`] - Query parsing, logging setup and shared helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - HTTP tracker endpoints
//! - [`stats`] - Atomic statistics counters
//! - [`storage`] - Storage engines behind a common trait
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - The announce state engine and maintenance tasks
//! - [`write_back`] - The batched persistence pipeline

/// Minimal bencode encoder for announce responses.
pub mod bencode;

/// In-memory swarm cache.
///
/// Users by passkey, torrents by info hash with their live seeders and
/// leechers, the client whitelist, hit-and-run pairs and the freeleech flag.
pub mod cache;

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
///
/// Handles loading, saving and validating `config.toml`.
pub mod config;

/// HTTP tracker protocol implementation.
pub mod http;

/// Statistics tracking and monitoring module.
pub mod stats;

/// Storage engines (memory and MySQL).
pub mod storage;

/// CLI argument parsing.
pub mod structs;

/// Core tracker logic module.
///
/// The announce state machine, peer selection, reload and purge.
pub mod tracker;

/// Batched asynchronous persistence of announce accounting.
pub mod write_back;
