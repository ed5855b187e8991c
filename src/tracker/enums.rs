//! Enumerations for tracker operations.

/// Client-reported announce event.
pub mod announce_event;

/// Announce failures surfaced to the client.
pub mod announce_error;
