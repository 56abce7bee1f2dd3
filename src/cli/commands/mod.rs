//! CLI command implementations.

pub mod history;
pub mod init;
pub mod models;
pub mod session;
pub mod verify;

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::adapters::http::HttpVerificationClient;
use crate::adapters::storage::FileKeyValueStore;
use crate::domain::models::Config;
use crate::services::{HistoryStore, NotificationEmitter, RequestOrchestrator};

/// Orchestrator wired to the real HTTP service and on-disk history.
pub type CliOrchestrator = RequestOrchestrator<HttpVerificationClient, FileKeyValueStore>;

/// Load persisted history from the configured storage directory.
pub async fn open_history(config: &Config) -> HistoryStore<FileKeyValueStore> {
    let storage = Arc::new(FileKeyValueStore::new(PathBuf::from(
        &config.history.storage_dir,
    )));
    HistoryStore::load_with(
        storage,
        config.history.storage_key.clone(),
        config.history.capacity,
    )
    .await
}

/// Assemble an orchestrator from configuration.
pub async fn build_orchestrator(config: &Config) -> Result<CliOrchestrator> {
    let client = HttpVerificationClient::new(&config.service)
        .context("Failed to create verification client")?;
    let history = open_history(config).await;
    let notifier = Arc::new(NotificationEmitter::with_ttl(Duration::from_millis(
        config.notifications.ttl_ms,
    )));

    Ok(RequestOrchestrator::new(Arc::new(client), history, notifier))
}
