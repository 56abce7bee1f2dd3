//! Common test utilities for integration tests
//!
//! Shared fixtures for wiring an orchestrator against a mock verification
//! server and an on-disk history.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

use verity::adapters::http::HttpVerificationClient;
use verity::adapters::storage::FileKeyValueStore;
use verity::domain::models::ServiceConfig;
use verity::services::{HistoryStore, NotificationEmitter, RequestOrchestrator};

pub type FileOrchestrator = RequestOrchestrator<HttpVerificationClient, FileKeyValueStore>;

/// Create a temporary directory for test isolation
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Service config pointing at a mock server.
pub fn service_config(base_url: &str) -> ServiceConfig {
    ServiceConfig {
        base_url: base_url.to_string(),
        timeout_secs: Some(5),
        ..Default::default()
    }
}

/// Orchestrator talking to `base_url` and persisting history under `dir`.
pub async fn orchestrator(base_url: &str, dir: &Path) -> FileOrchestrator {
    let client = HttpVerificationClient::new(&service_config(base_url))
        .expect("Failed to build HTTP client");
    let history = HistoryStore::load(Arc::new(FileKeyValueStore::new(dir))).await;
    RequestOrchestrator::new(
        Arc::new(client),
        history,
        Arc::new(NotificationEmitter::new()),
    )
}

/// `{"success": true, "result": ...}` body.
pub fn success_body(result: serde_json::Value) -> String {
    serde_json::json!({
        "success": true,
        "result": result,
        "model_used": "models/gemini-1.5-flash"
    })
    .to_string()
}
