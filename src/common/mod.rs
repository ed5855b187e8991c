//! Common utilities and shared functionality.
//!
//! Helpers used across the tracker: query string decoding, logging setup,
//! unix timestamps and the boot-time `CustomError` type.
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_ratio::common::common::{parse_query, current_time};
//!
//! let params = parse_query(Some(String::from("info_hash=%ab%cd&left=0")))?;
//! let now = current_time();
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
