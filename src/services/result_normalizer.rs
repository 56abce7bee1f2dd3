//! Maps raw service payloads onto [`VerificationResult`].
//!
//! The verification service has shipped more than one result schema
//! (`explanation`/`correction` and the older `reasoning`/`suggestions`), so
//! every text field is resolved from an ordered list of candidate keys. The
//! first present, non-blank string wins.

use serde_json::Value;
use thiserror::Error;

use crate::domain::errors::VerifyError;
use crate::domain::models::{
    VerificationResult, CORRECTION_WHEN_CORRECT, NO_CORRECTION, NO_EXPLANATION,
};

const EXPLANATION_KEYS: &[&str] = &["explanation", "reasoning"];
const CORRECTION_KEYS: &[&str] = &["correction", "suggestions"];

/// Message used when the service reports failure without saying why.
const DEFAULT_SERVICE_FAILURE: &str = "Verification failed.";

/// Why a result payload could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("result is not an object")]
    NotAnObject,

    #[error("result is missing `is_correct`")]
    MissingVerdict,

    #[error("`is_correct` is not a boolean")]
    InvalidVerdict,
}

/// Normalize a single result object.
///
/// `is_correct` must be present and boolean; `false` is a valid verdict.
pub fn normalize(payload: &Value) -> Result<VerificationResult, NormalizeError> {
    let fields = payload.as_object().ok_or(NormalizeError::NotAnObject)?;

    let is_correct = match fields.get("is_correct") {
        None | Some(Value::Null) => return Err(NormalizeError::MissingVerdict),
        Some(Value::Bool(b)) => *b,
        Some(_) => return Err(NormalizeError::InvalidVerdict),
    };

    let explanation =
        first_text(payload, EXPLANATION_KEYS).unwrap_or_else(|| NO_EXPLANATION.to_string());

    let correction = if is_correct {
        CORRECTION_WHEN_CORRECT.to_string()
    } else {
        first_text(payload, CORRECTION_KEYS).unwrap_or_else(|| NO_CORRECTION.to_string())
    };

    let confidence = fields.get("confidence").and_then(parse_confidence);

    Ok(VerificationResult::new(
        is_correct,
        confidence,
        explanation,
        correction,
    ))
}

/// Interpret a full response envelope
/// `{success, result?, error?}` into a verdict or the failure it describes.
pub fn interpret_response(envelope: &Value) -> Result<VerificationResult, VerifyError> {
    let success = envelope
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !success {
        let message = envelope
            .get("error")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_SERVICE_FAILURE);
        return Err(VerifyError::ServiceError(message.to_string()));
    }

    let result = envelope
        .get("result")
        .ok_or_else(|| VerifyError::MalformedResponse("response has no `result`".to_string()))?;

    normalize(result).map_err(|e| VerifyError::MalformedResponse(e.to_string()))
}

fn first_text(payload: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| payload.get(*key).and_then(Value::as_str))
        .find(|text| !text.trim().is_empty())
        .map(str::to_string)
}

/// Accepts numbers and numeric strings, rounded and clamped to 0-100.
fn parse_confidence(value: &Value) -> Option<u8> {
    let raw = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().trim_end_matches('%').parse::<f64>().ok()?,
        _ => return None,
    };
    if !raw.is_finite() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(raw.round().clamp(0.0, 100.0) as u8)
}
