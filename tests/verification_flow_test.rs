//! End-to-end verification flow
//!
//! Drives the orchestrator against a mockito server with history persisted
//! to a temporary directory, then reloads the history as a fresh process
//! would.

mod common;

use mockito::Server;
use std::sync::Arc;
use verity::adapters::storage::FileKeyValueStore;
use verity::services::{HistoryStore, DEFAULT_STORAGE_KEY};
use verity::{OrchestratorState, ResultDisplay, Severity, VerifyError};

#[tokio::test]
async fn test_verify_persist_and_reload() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/verify")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::success_body(serde_json::json!({
            "is_correct": true,
            "confidence": 95,
            "explanation": "Basic arithmetic."
        })))
        .create_async()
        .await;
    let dir = common::temp_dir();

    let mut orchestrator = common::orchestrator(&server.url(), dir.path()).await;
    let result = orchestrator.submit("2+2=4").await.unwrap();

    assert!(result.is_correct());
    assert_eq!(result.confidence(), Some(95));
    assert_eq!(result.explanation(), "Basic arithmetic.");
    assert_eq!(result.correction(), "None");
    assert_eq!(orchestrator.state(), OrchestratorState::Displaying);
    assert!(dir.path().join(format!("{DEFAULT_STORAGE_KEY}.json")).exists());

    let reloaded = HistoryStore::load(Arc::new(FileKeyValueStore::new(dir.path()))).await;
    assert_eq!(reloaded.len(), 1);
    let entry = reloaded.get_at(0).unwrap();
    assert_eq!(entry.input_text, "2+2=4");
    assert_eq!(entry.result.as_ref(), Some(&result));
}

#[tokio::test]
async fn test_replay_after_restart_needs_no_network() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/verify")
        .with_status(200)
        .with_body(common::success_body(serde_json::json!({
            "is_correct": false,
            "reasoning": "Water boils at 100°C at sea level.",
            "suggestions": "Water boils at 100°C."
        })))
        .expect(1)
        .create_async()
        .await;
    let dir = common::temp_dir();

    {
        let mut first = common::orchestrator(&server.url(), dir.path()).await;
        first.submit("Water boils at 50°C").await.unwrap();
    }

    let mut second = common::orchestrator(&server.url(), dir.path()).await;
    let entry = second.select_history(0).unwrap();

    assert_eq!(entry.input_text, "Water boils at 50°C");
    assert_eq!(second.state(), OrchestratorState::Displaying);
    assert_eq!(
        second.current_result().map(|r| r.correction()),
        Some("Water boils at 100°C.")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_leaves_history_untouched() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/verify")
        .with_status(500)
        .create_async()
        .await;
    let dir = common::temp_dir();

    let mut orchestrator = common::orchestrator(&server.url(), dir.path()).await;
    let err = orchestrator.submit("anything").await.unwrap_err();

    assert!(matches!(err, VerifyError::Transport(_)));
    assert_eq!(orchestrator.state(), OrchestratorState::Failed);
    assert!(matches!(orchestrator.display(), ResultDisplay::Error { .. }));
    assert!(orchestrator.is_submit_enabled());
    assert!(orchestrator.history().is_empty());

    let live = orchestrator.notifier().live();
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].severity, Severity::Error);
}

#[tokio::test]
async fn test_service_reported_failure_is_shown_verbatim() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/verify")
        .with_status(200)
        .with_body(r#"{"success": false, "error": "Input too long"}"#)
        .create_async()
        .await;
    let dir = common::temp_dir();

    let mut orchestrator = common::orchestrator(&server.url(), dir.path()).await;
    orchestrator.submit("The moon is made of cheese").await.unwrap_err();

    assert_eq!(orchestrator.error_message(), Some("Input too long"));
    assert_eq!(orchestrator.notifier().live()[0].message, "Input too long");
    assert!(orchestrator.history().is_empty());
}

#[tokio::test]
async fn test_history_is_capped_across_restarts() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/verify")
        .with_status(200)
        .with_body(common::success_body(serde_json::json!({"is_correct": true})))
        .expect(22)
        .create_async()
        .await;
    let dir = common::temp_dir();

    let mut orchestrator = common::orchestrator(&server.url(), dir.path()).await;
    for i in 0..22 {
        orchestrator.submit(&format!("claim {i}")).await.unwrap();
    }

    let reloaded = HistoryStore::load(Arc::new(FileKeyValueStore::new(dir.path()))).await;
    assert_eq!(reloaded.len(), 20);
    assert_eq!(reloaded.get_at(0).unwrap().input_text, "claim 21");
    assert_eq!(reloaded.get_at(19).unwrap().input_text, "claim 2");
}

#[tokio::test]
async fn test_clear_history_removes_file() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/verify")
        .with_status(200)
        .with_body(common::success_body(serde_json::json!({"is_correct": true})))
        .create_async()
        .await;
    let dir = common::temp_dir();

    let mut orchestrator = common::orchestrator(&server.url(), dir.path()).await;
    orchestrator.submit("2+2=4").await.unwrap();
    orchestrator.clear_history().await.unwrap();

    assert!(!dir.path().join(format!("{DEFAULT_STORAGE_KEY}.json")).exists());
    let reloaded = HistoryStore::load(Arc::new(FileKeyValueStore::new(dir.path()))).await;
    assert!(reloaded.is_empty());
}
