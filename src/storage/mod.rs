//! Persistent storage behind the swarm cache.
//!
//! The tracker talks to storage only through the [`traits::storage_backend::StorageBackend`]
//! trait: bulk visitors for reloading the cache, and batched sinks fed by the
//! write-back pipeline. The backend is chosen once at startup from
//! `database.engine` and injected as an `Arc<dyn StorageBackend>`.
//!
//! # Engines
//!
//! - **memory**: seedable in-process store. Used by tests and for running the
//!   tracker without a database; accounting is only kept in its journal.
//! - **mysql**: Gazelle schema (`users_main`, `torrents`, `transfer_history`,
//!   `transfer_ips`, `xbt_snatched`, `xbt_client_whitelist`, `mod_core`) over a
//!   sqlx pool.

/// Storage engine selection.
pub mod enums;

/// Error types for storage operations.
pub mod errors;

/// Implementation blocks for the storage engines.
pub mod impls;

/// Storage engine state.
pub mod structs;

/// The storage backend trait.
pub mod traits;

/// Engine factory.
pub mod storage;
