use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::errors::TransportError;

/// Request body sent to the verification service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub input: String,
}

impl VerifyRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// A model offered by the verification service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_token_limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_token_limit: Option<u64>,
}

/// Some services send `"description": null` for undocumented models.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Remote verification capability.
///
/// `verify` resolves exactly once per call with the decoded response body,
/// whatever shape it has; interpreting the envelope is the caller's job.
/// Non-success status codes and failed calls resolve to a [`TransportError`].
#[async_trait]
pub trait VerificationService: Send + Sync {
    async fn verify(&self, request: &VerifyRequest) -> Result<serde_json::Value, TransportError>;

    /// Models the service can verify with.
    async fn list_models(&self) -> Result<Vec<ModelInfo>, TransportError>;
}
