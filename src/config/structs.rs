//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Announce intervals, whitelist toggle and maintenance timers.
pub mod tracker_config;

/// Write-back queue and flush settings.
pub mod write_back_config;

/// Storage engine selection.
pub mod database_config;

/// HTTP announce listener configuration.
pub mod http_trackers_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
