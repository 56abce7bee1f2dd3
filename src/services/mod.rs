//! Service layer
//!
//! - HistoryStore: bounded, persisted, replayable verification history
//! - ResultNormalizer: raw service payloads to canonical verdicts
//! - NotificationEmitter: self-expiring user-facing notifications
//! - RequestOrchestrator: the submit → verdict state machine

pub mod history_store;
pub mod notification_emitter;
pub mod request_orchestrator;
pub mod result_normalizer;

pub use history_store::{HistoryStore, DEFAULT_STORAGE_KEY};
pub use notification_emitter::{NotificationEmitter, DEFAULT_NOTIFICATION_TTL};
pub use request_orchestrator::{OrchestratorState, RequestOrchestrator, ResultDisplay};
pub use result_normalizer::{interpret_response, normalize, NormalizeError};
