//! Configuration management module.
//!
//! Loads, creates and saves `config.toml`. Every section has a default through
//! [`structs::configuration::Configuration::init`], so a fresh install can write
//! a complete file with `--create-config` and edit it afterwards.
//!
//! # Sections
//!
//! - **tracker_config**: announce intervals, whitelist toggle, reload and purge timers
//! - **write_back**: queue capacities, batch sizes and deadlock retry policy
//! - **database**: storage engine (`memory` or `mysql`) and its DSN
//! - **http_server**: one or more announce listeners
//! - **sentry_config**: error reporting

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

#[cfg(test)]
mod tests;
