//! Asynchronous write-back pipeline.
//!
//! Announces never touch storage directly. Each accounting effect is pushed as
//! an owned record into one of five bounded queues (torrent, user,
//! transfer history, transfer ip, snatch). One consumer task per queue collects
//! up to the queue's capacity, or whatever arrived within `flush_interval_ms`,
//! and hands the batch to storage in a single call.
//!
//! # Backpressure
//!
//! A full queue makes the producing announce wait. Memory stays bounded and no
//! accounting is dropped on the announce side.
//!
//! # Failures
//!
//! A batch that fails with a lock conflict is retried as-is, waiting
//! `deadlock_wait_ms × attempt` between tries, up to `max_deadlock_retries`
//! attempts. Anything else, or running out of attempts, is logged as critical,
//! reported to sentry and the batch is dropped.
//!
//! # Shutdown
//!
//! [`structs::write_back::WriteBack::shutdown`] closes every queue, lets the
//! consumers flush what is left and waits for all of them.

/// Error types for the pipeline producers.
pub mod errors;

/// Implementation blocks for the pipeline and its records.
pub mod impls;

/// Record snapshots and the pipeline handle.
pub mod structs;

/// The per-category persistence trait.
pub mod traits;

#[cfg(test)]
mod tests;
