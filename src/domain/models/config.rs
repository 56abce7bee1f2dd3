use serde::{Deserialize, Serialize};

/// Number of entries the verification history keeps.
pub const HISTORY_CAPACITY: usize = 20;

/// Default key the history is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "verification_history";

/// Main configuration structure for Verity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Remote verification service configuration
    #[serde(default)]
    pub service: ServiceConfig,

    /// Verification history configuration
    #[serde(default)]
    pub history: HistoryConfig,

    /// Notification configuration
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote verification service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServiceConfig {
    /// Base URL of the verification service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the verification endpoint
    #[serde(default = "default_verify_path")]
    pub verify_path: String,

    /// Path of the model catalogue endpoint
    #[serde(default = "default_models_path")]
    pub models_path: String,

    /// Request timeout in seconds; unset waits for the call to settle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_verify_path() -> String {
    "/verify".to_string()
}

fn default_models_path() -> String {
    "/list-models".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            verify_path: default_verify_path(),
            models_path: default_models_path(),
            timeout_secs: None,
        }
    }
}

/// Verification history configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HistoryConfig {
    /// Maximum number of entries kept
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Directory holding persisted state
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,

    /// Key under which the history is persisted
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

const fn default_capacity() -> usize {
    HISTORY_CAPACITY
}

fn default_storage_dir() -> String {
    ".verity/storage".to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            storage_dir: default_storage_dir(),
            storage_key: default_storage_key(),
        }
    }
}

/// Notification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NotificationConfig {
    /// How long a notification stays live, in milliseconds
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u64,
}

const fn default_ttl_ms() -> u64 {
    4500
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            ttl_ms: default_ttl_ms(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files; unset logs to stderr only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,

    /// Log file rotation: daily, hourly, never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}
