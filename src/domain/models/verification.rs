//! Verification domain model.
//!
//! A [`VerificationResult`] is the canonical verdict produced by the result
//! normalizer. A [`HistoryEntry`] pairs the submitted input with that verdict
//! and is what the history store persists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Literal shown as the correction for inputs judged correct.
pub const CORRECTION_WHEN_CORRECT: &str = "None";

/// Fallback explanation when the service supplied none.
pub const NO_EXPLANATION: &str = "No reasoning provided.";

/// Fallback correction when the service supplied none.
pub const NO_CORRECTION: &str = "No suggestions provided.";

/// Rendered in place of an absent confidence.
pub const CONFIDENCE_UNAVAILABLE: &str = "N/A";

/// Canonical verdict for one verification.
///
/// Only the normalizer constructs these; fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct VerificationResult {
    is_correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    confidence: Option<u8>,
    explanation: String,
    correction: String,
}

impl VerificationResult {
    pub(crate) fn new(
        is_correct: bool,
        confidence: Option<u8>,
        explanation: String,
        correction: String,
    ) -> Self {
        Self {
            is_correct,
            confidence,
            explanation,
            correction,
        }
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    /// Confidence in the verdict, 0-100.
    pub fn confidence(&self) -> Option<u8> {
        self.confidence
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn correction(&self) -> &str {
        &self.correction
    }

    /// Confidence formatted for display, `"N/A"` when absent.
    pub fn confidence_label(&self) -> String {
        self.confidence
            .map_or_else(|| CONFIDENCE_UNAVAILABLE.to_string(), |c| format!("{c}%"))
    }
}

/// Opaque, time-ordered identifier for a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub Uuid);

impl EntryId {
    /// UUIDv7 embeds the creation timestamp, so ids sort by creation.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One past verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HistoryEntry {
    pub id: EntryId,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "input")]
    pub input_text: String,
    /// Absent while no verdict has been recorded for this input.
    #[serde(default)]
    pub result: Option<VerificationResult>,
}

impl HistoryEntry {
    /// Entry for an input that already has a verdict.
    pub fn completed(input_text: impl Into<String>, result: VerificationResult) -> Self {
        Self {
            id: EntryId::new(),
            created_at: Utc::now(),
            input_text: input_text.into(),
            result: Some(result),
        }
    }

    /// Entry with no verdict yet.
    pub fn pending(input_text: impl Into<String>) -> Self {
        Self {
            id: EntryId::new(),
            created_at: Utc::now(),
            input_text: input_text.into(),
            result: None,
        }
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }
}
