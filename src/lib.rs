//! Verity - free-text verification client
//!
//! Verity sends a piece of text to a verification service, normalizes the
//! verdict it returns and keeps a bounded, replayable history of past
//! verifications on disk.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, errors and ports
//! - **Service Layer** (`services`): History store, result normalizer,
//!   notification emitter and the request orchestrator
//! - **Adapters** (`adapters`): HTTP verification client and key-value storage
//! - **Infrastructure Layer** (`infrastructure`): Configuration and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use verity::adapters::{http::HttpVerificationClient, storage::MemoryKeyValueStore};
//! use verity::services::{HistoryStore, NotificationEmitter, RequestOrchestrator};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = verity::ConfigLoader::load()?;
//!     let client = Arc::new(HttpVerificationClient::new(&config.service)?);
//!     let history = HistoryStore::load(Arc::new(MemoryKeyValueStore::new())).await;
//!     let mut orchestrator =
//!         RequestOrchestrator::new(client, history, Arc::new(NotificationEmitter::new()));
//!     let verdict = orchestrator.submit("2+2=4").await?;
//!     println!("{}", verdict.is_correct());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{OutOfRange, StorageError, TransportError, VerifyError};
pub use domain::models::{
    Config, HistoryEntry, Notification, NotificationEvent, Severity, VerificationResult,
};
pub use domain::ports::{KeyValueStore, VerificationService, VerifyRequest};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{
    HistoryStore, NotificationEmitter, OrchestratorState, RequestOrchestrator, ResultDisplay,
};
