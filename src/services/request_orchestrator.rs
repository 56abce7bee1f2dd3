//! Submit → verdict lifecycle.
//!
//! The orchestrator validates input, makes exactly one call to the
//! verification service per submission, routes the response through the
//! normalizer, records verdicts in the history store and posts a
//! notification on every failure path.
//!
//! `submit` takes `&mut self`, so a second submission cannot begin while one
//! is still awaited. There is no cancellation: a call runs until it settles.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::domain::errors::{StorageError, VerifyError};
use crate::domain::models::{HistoryEntry, VerificationResult};
use crate::domain::ports::{KeyValueStore, VerificationService, VerifyRequest};
use crate::services::history_store::HistoryStore;
use crate::services::notification_emitter::NotificationEmitter;
use crate::services::result_normalizer::interpret_response;

const VERIFIED_MESSAGE: &str = "Verification complete.";
const NOT_SAVED_MESSAGE: &str = "Verification complete, but it could not be saved to history.";
const NO_RESULT_MESSAGE: &str = "No detailed result available for this entry yet.";
const CLEARED_MESSAGE: &str = "History cleared.";
const CLEAR_FAILED_MESSAGE: &str = "History cleared, but the saved copy could not be removed.";

/// Orchestrator lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrchestratorState {
    Idle,
    Submitting,
    Displaying,
    Failed,
}

impl OrchestratorState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Displaying => "displaying",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for OrchestratorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the result area should currently show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultDisplay {
    Empty,
    Verdict {
        input: String,
        result: VerificationResult,
    },
    Error {
        message: String,
    },
    /// A replayed entry that has no verdict recorded.
    Pending {
        input: String,
    },
}

/// Drives submissions and history replay.
pub struct RequestOrchestrator<V: VerificationService, S: KeyValueStore> {
    service: Arc<V>,
    history: HistoryStore<S>,
    notifier: Arc<NotificationEmitter>,
    state: OrchestratorState,
    display: ResultDisplay,
    submit_enabled: bool,
}

impl<V: VerificationService, S: KeyValueStore> RequestOrchestrator<V, S> {
    pub fn new(
        service: Arc<V>,
        history: HistoryStore<S>,
        notifier: Arc<NotificationEmitter>,
    ) -> Self {
        Self {
            service,
            history,
            notifier,
            state: OrchestratorState::Idle,
            display: ResultDisplay::Empty,
            submit_enabled: true,
        }
    }

    pub fn state(&self) -> OrchestratorState {
        self.state
    }

    pub fn display(&self) -> &ResultDisplay {
        &self.display
    }

    /// The verdict on display, if any.
    pub fn current_result(&self) -> Option<&VerificationResult> {
        match &self.display {
            ResultDisplay::Verdict { result, .. } => Some(result),
            _ => None,
        }
    }

    /// The error message on display, if any.
    pub fn error_message(&self) -> Option<&str> {
        match &self.display {
            ResultDisplay::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    pub fn notifier(&self) -> &Arc<NotificationEmitter> {
        &self.notifier
    }

    /// Whether the UI should offer the submit action.
    pub fn is_submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Verify `raw_input`.
    ///
    /// Blank input is rejected with a warning and no request. Otherwise one
    /// request is made; a verdict lands in history, any failure moves to
    /// `Failed` with an error notification. Submit is re-enabled whatever
    /// the outcome.
    #[instrument(skip(self, raw_input), fields(input_len = raw_input.len()))]
    pub async fn submit(&mut self, raw_input: &str) -> Result<VerificationResult, VerifyError> {
        let input = raw_input.trim();
        if input.is_empty() {
            let err = VerifyError::EmptyInput;
            self.surface(&err);
            return Err(err);
        }

        self.transition(OrchestratorState::Submitting);
        self.submit_enabled = false;
        self.display = ResultDisplay::Empty;

        let outcome = self.dispatch(input).await;
        self.submit_enabled = true;

        match outcome {
            Ok(result) => {
                self.record(input, result.clone()).await;
                Ok(result)
            }
            Err(err) => {
                self.surface(&err);
                Err(err)
            }
        }
    }

    /// Replay history entry `index` without any network call.
    pub fn select_history(&mut self, index: usize) -> Result<HistoryEntry, VerifyError> {
        let entry = match self.history.select(index) {
            Ok(entry) => entry.clone(),
            Err(range) => {
                let err = VerifyError::from(range);
                self.surface(&err);
                return Err(err);
            }
        };

        match &entry.result {
            Some(result) => {
                self.display = ResultDisplay::Verdict {
                    input: entry.input_text.clone(),
                    result: result.clone(),
                };
                self.transition(OrchestratorState::Displaying);
            }
            None => {
                self.display = ResultDisplay::Pending {
                    input: entry.input_text.clone(),
                };
                self.transition(OrchestratorState::Idle);
                self.notifier.info(NO_RESULT_MESSAGE);
            }
        }

        debug!(index, id = %entry.id, "history entry replayed");
        Ok(entry)
    }

    /// Empty the history and its persisted copy.
    pub async fn clear_history(&mut self) -> Result<(), StorageError> {
        let cleared = self.history.clear().await;
        self.display = ResultDisplay::Empty;
        self.transition(OrchestratorState::Idle);

        match cleared {
            Ok(()) => {
                self.notifier.success(CLEARED_MESSAGE);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "failed to remove persisted history");
                self.notifier.warning(CLEAR_FAILED_MESSAGE);
                Err(e)
            }
        }
    }

    async fn dispatch(&self, input: &str) -> Result<VerificationResult, VerifyError> {
        let payload = self.service.verify(&VerifyRequest::new(input)).await?;
        let result = interpret_response(&payload)?;

        info!(
            is_correct = result.is_correct(),
            confidence = ?result.confidence(),
            model_used = payload.get("model_used").and_then(|m| m.as_str()),
            "verification completed"
        );
        Ok(result)
    }

    async fn record(&mut self, input: &str, result: VerificationResult) {
        self.display = ResultDisplay::Verdict {
            input: input.to_string(),
            result: result.clone(),
        };
        self.transition(OrchestratorState::Displaying);

        match self
            .history
            .insert_most_recent(HistoryEntry::completed(input, result))
            .await
        {
            Ok(_) => {
                self.notifier.success(VERIFIED_MESSAGE);
            }
            Err(e) => {
                warn!(error = %e, "failed to persist verification history");
                self.notifier.warning(NOT_SAVED_MESSAGE);
            }
        }
    }

    /// Post the failure's notification and, for failures that replace the
    /// result display, move to `Failed`.
    fn surface(&mut self, err: &VerifyError) {
        warn!(error = %err, "verification intent failed");
        self.notifier
            .post(err.notification_message(), err.severity());

        if let Some(message) = err.display_message() {
            self.display = ResultDisplay::Error { message };
            self.transition(OrchestratorState::Failed);
        }
    }

    fn transition(&mut self, to: OrchestratorState) {
        if self.state != to {
            debug!(from = %self.state, to = %to, "orchestrator transition");
        }
        self.state = to;
    }
}
