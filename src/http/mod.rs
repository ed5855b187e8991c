//! HTTP front door of the tracker.
//!
//! # Endpoints
//!
//! - `GET /{passkey}/announce` - announce for the account owning `passkey`
//! - `GET /stats` - JSON counters, swarm totals and write-back queue depths
//!
//! Announce answers are always `200 text/plain` with a bencoded body, a
//! failure being `{failure reason: <message>}`. The remote address comes
//! from the socket, or from the configured `real_ip` header when the tracker
//! runs behind a proxy.

/// Data structures shared by the request handlers.
pub mod structs;

/// Server setup and request handlers.
#[allow(clippy::module_inception)]
pub mod http;
