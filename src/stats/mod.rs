//! Tracker statistics.
//!
//! Atomic counters shared by the announce path, the write-back consumers and
//! the maintenance tasks. A [`structs::stats::Stats`] snapshot is printed to
//! the console every `log_console_interval` seconds and served as JSON on
//! `/stats`.

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;
