use std::fs::File;
use std::io::Write;
use std::thread::available_parallelism;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::config::structs::write_back_config::WriteBackConfig;
use crate::storage::enums::storage_engine::StorageEngine;

impl Configuration {
    pub fn init() -> Configuration {
        let threads = available_parallelism().map(|n| n.get() as u64).unwrap_or(4);
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig {
                announce_interval: 1800,
                min_announce_interval: 900,
                whitelist_enabled: true,
                announce_timeout: 10,
                reload_interval: 45,
                purge_interval: 60,
                peers_timeout: 3600
            },
            write_back: WriteBackConfig {
                torrent_buffer: 10000,
                user_buffer: 10000,
                transfer_history_buffer: 10000,
                transfer_ip_buffer: 1000,
                snatch_buffer: 100,
                flush_interval_ms: 3000,
                max_deadlock_retries: 10,
                deadlock_wait_ms: 1000,
                log_flushes: true
            },
            database: DatabaseConfig {
                engine: StorageEngine::memory,
                path: String::from("mysql://root:@127.0.0.1:3306/gazelle"),
                max_connections: 10
            },
            http_server: vec!(
                HttpTrackersConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:34000"),
                    real_ip: String::from("X-Real-IP"),
                    keep_alive: 60,
                    request_timeout: 15,
                    disconnect_timeout: 15,
                    max_connections: 25000,
                    threads
                }
            ),
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::from(""),
                environment: String::from("production"),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true
            }
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError)
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(create: bool) -> Result<Configuration, CustomError> {
        Self::load_from_path("config.toml", create)
    }

    pub fn load_from_path(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start the tracker again, exiting now...");
                        Err(CustomError::new(&format!("created {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would stall the write-back consumers or the announce path.
    pub fn validate(&self) -> Result<(), CustomError> {
        let write_back = &self.write_back;
        let check_map = [
            ("[WRITE BACK] torrent_buffer", write_back.torrent_buffer as u64),
            ("[WRITE BACK] user_buffer", write_back.user_buffer as u64),
            ("[WRITE BACK] transfer_history_buffer", write_back.transfer_history_buffer as u64),
            ("[WRITE BACK] transfer_ip_buffer", write_back.transfer_ip_buffer as u64),
            ("[WRITE BACK] snatch_buffer", write_back.snatch_buffer as u64),
            ("[WRITE BACK] flush_interval_ms", write_back.flush_interval_ms),
            ("[WRITE BACK] max_deadlock_retries", write_back.max_deadlock_retries as u64),
            ("[TRACKER] announce_interval", self.tracker_config.announce_interval),
            ("[TRACKER] announce_timeout", self.tracker_config.announce_timeout),
            ("[TRACKER] reload_interval", self.tracker_config.reload_interval),
            ("[TRACKER] purge_interval", self.tracker_config.purge_interval),
        ];
        for (name, value) in check_map {
            if value == 0 {
                return Err(CustomError::new(&format!("[VALIDATE CONFIG] {name} must be greater than zero")));
            }
        }
        if self.tracker_config.min_announce_interval > self.tracker_config.announce_interval {
            return Err(CustomError::new("[VALIDATE CONFIG] [TRACKER] min_announce_interval must not exceed announce_interval"));
        }
        Ok(())
    }
}
