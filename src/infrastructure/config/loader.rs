use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project-local configuration directory.
pub const CONFIG_DIR: &str = ".verity";

/// Largest history capacity accepted.
pub const MAX_HISTORY_CAPACITY: usize = 1000;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Service base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("Invalid service base_url: {0}. Must start with http:// or https://")]
    InvalidBaseUrl(String),

    #[error("Invalid history capacity: {0}. Must be between 1 and {MAX_HISTORY_CAPACITY}")]
    InvalidCapacity(usize),

    #[error("History storage_key cannot be empty")]
    EmptyStorageKey,

    #[error("Invalid history storage_key: {0}. Use letters, digits, '_' or '-'")]
    InvalidStorageKey(String),

    #[error("Invalid notification ttl_ms: {0}. Must be positive")]
    InvalidTtl(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .verity/config.yaml (project config, created by init)
    /// 3. .verity/local.yaml (project local overrides, optional)
    /// 4. Environment variables (VERITY_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(format!("{CONFIG_DIR}/config.yaml")))
            .merge(Yaml::file(format!("{CONFIG_DIR}/local.yaml")))
            .merge(Env::prefixed("VERITY_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.as_ref().display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let base_url = config.service.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }

        if config.history.capacity == 0 || config.history.capacity > MAX_HISTORY_CAPACITY {
            return Err(ConfigError::InvalidCapacity(config.history.capacity));
        }

        let key = &config.history.storage_key;
        if key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::InvalidStorageKey(key.clone()));
        }

        if config.notifications.ttl_ms == 0 {
            return Err(ConfigError::InvalidTtl(config.notifications.ttl_ms));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidLogRotation(
                config.logging.rotation.clone(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::HISTORY_CAPACITY;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.service.verify_path, "/verify");
        assert_eq!(config.service.timeout_secs, None);
        assert_eq!(config.history.capacity, HISTORY_CAPACITY);
        assert_eq!(config.history.storage_key, "verification_history");
        assert_eq!(config.notifications.ttl_ms, 4500);
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
service:
  base_url: https://verify.example.com
  timeout_secs: 30
history:
  capacity: 50
  storage_dir: /var/lib/verity
logging:
  level: debug
  format: json
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.service.base_url, "https://verify.example.com");
        assert_eq!(config.service.verify_path, "/verify");
        assert_eq!(config.service.timeout_secs, Some(30));
        assert_eq!(config.history.capacity, 50);
        assert_eq!(config.history.storage_dir, "/var/lib/verity");
        assert_eq!(config.history.storage_key, "verification_history");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");

        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_validate_empty_base_url() {
        let mut config = Config::default();
        config.service.base_url = "  ".to_string();

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyBaseUrl)
        ));
    }

    #[test]
    fn test_validate_base_url_scheme() {
        let mut config = Config::default();
        config.service.base_url = "ftp://example.com".to_string();

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_validate_capacity_bounds() {
        let mut config = Config::default();
        config.history.capacity = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidCapacity(0))
        ));

        config.history.capacity = MAX_HISTORY_CAPACITY + 1;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidCapacity(_))
        ));
    }

    #[test]
    fn test_validate_storage_key() {
        let mut config = Config::default();
        config.history.storage_key = String::new();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyStorageKey)
        ));

        config.history.storage_key = "../history".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidStorageKey(_))
        ));
    }

    #[test]
    fn test_validate_zero_ttl() {
        let mut config = Config::default();
        config.notifications.ttl_ms = 0;

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidTtl(0))
        ));
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "invalid".to_string();

        match ConfigLoader::validate(&config).unwrap_err() {
            ConfigError::InvalidLogLevel(level) => assert_eq!(level, "invalid"),
            other => panic!("Expected InvalidLogLevel error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_invalid_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();

        match ConfigLoader::validate(&config).unwrap_err() {
            ConfigError::InvalidLogFormat(format) => assert_eq!(format, "xml"),
            other => panic!("Expected InvalidLogFormat error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_invalid_rotation() {
        let mut config = Config::default();
        config.logging.rotation = "weekly".to_string();

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogRotation(_))
        ));
    }

    #[test]
    fn test_env_override() {
        temp_env::with_vars(
            [
                ("VERITY_SERVICE__BASE_URL", Some("https://env.example.com")),
                ("VERITY_HISTORY__CAPACITY", Some("5")),
            ],
            || {
                let config: Config = Figment::new()
                    .merge(Serialized::defaults(Config::default()))
                    .merge(Env::prefixed("VERITY_").split("__"))
                    .extract()
                    .unwrap();

                assert_eq!(config.service.base_url, "https://env.example.com");
                assert_eq!(config.history.capacity, 5);
            },
        );
    }

    #[test]
    fn test_hierarchical_merging() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut base_file = NamedTempFile::new().unwrap();
        writeln!(
            base_file,
            "history:\n  capacity: 10\nlogging:\n  level: info\n  format: json"
        )
        .unwrap();
        base_file.flush().unwrap();

        let mut override_file = NamedTempFile::new().unwrap();
        writeln!(override_file, "history:\n  capacity: 15\nlogging:\n  level: debug").unwrap();
        override_file.flush().unwrap();

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(base_file.path()))
            .merge(Yaml::file(override_file.path()))
            .extract()
            .unwrap();

        assert_eq!(config.history.capacity, 15, "Override should win");
        assert_eq!(
            config.logging.level, "debug",
            "Override should win for nested fields"
        );
        assert_eq!(
            config.logging.format, "json",
            "Base value should persist when not overridden"
        );
    }

    #[test]
    fn test_load_from_file_rejects_invalid() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "history:\n  capacity: 0").unwrap();
        file.flush().unwrap();

        assert!(ConfigLoader::load_from_file(file.path()).is_err());
    }
}
