pub mod config;
pub mod notification;
pub mod verification;

pub use config::{
    Config, HistoryConfig, LoggingConfig, NotificationConfig, ServiceConfig, DEFAULT_STORAGE_KEY,
    HISTORY_CAPACITY,
};
pub use notification::{Notification, NotificationEvent, Severity};
pub use verification::{
    EntryId, HistoryEntry, VerificationResult, CONFIDENCE_UNAVAILABLE, CORRECTION_WHEN_CORRECT,
    NO_CORRECTION, NO_EXPLANATION,
};
