#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::config::structs::configuration::Configuration;
        use crate::storage::enums::storage_engine::StorageEngine;

        #[test]
        fn test_default_configuration_is_valid() {
            let config = Configuration::init();
            assert!(config.validate().is_ok());
            assert_eq!(config.tracker_config.announce_interval, 1800);
            assert_eq!(config.tracker_config.min_announce_interval, 900);
            assert_eq!(config.write_back.snatch_buffer, 100);
            assert_eq!(config.write_back.max_deadlock_retries, 10);
            assert_eq!(config.database.engine, StorageEngine::memory);
        }

        #[test]
        fn test_configuration_toml_round_trip() {
            let mut config = Configuration::init();
            config.log_level = String::from("debug");
            config.database.engine = StorageEngine::mysql;
            config.write_back.transfer_ip_buffer = 42;

            let serialized = toml::to_string(&config).unwrap();
            let loaded = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(loaded.log_level, "debug");
            assert_eq!(loaded.database.engine, StorageEngine::mysql);
            assert_eq!(loaded.write_back.transfer_ip_buffer, 42);
            assert_eq!(loaded.http_server.len(), 1);
        }

        #[test]
        fn test_save_and_load_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();

            Configuration::save_from_config(path, &Configuration::init()).unwrap();
            let loaded = Configuration::load_file(path).unwrap();
            assert_eq!(loaded.tracker_config.reload_interval, 45);
        }

        #[test]
        fn test_load_from_path_creates_default_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();

            assert!(Configuration::load_from_path(path, false).is_err());
            assert!(Configuration::load_from_path(path, true).is_err());
            assert!(Configuration::load_from_path(path, false).is_ok());
        }

        #[test]
        fn test_load_rejects_garbage() {
            assert!(Configuration::load(b"log_level = [").is_err());
        }

        #[test]
        fn test_validate_rejects_zero_batch() {
            let mut config = Configuration::init();
            config.write_back.user_buffer = 0;
            assert!(config.validate().is_err());

            let mut config = Configuration::init();
            config.tracker_config.min_announce_interval = config.tracker_config.announce_interval + 1;
            assert!(config.validate().is_err());
        }
    }
}
