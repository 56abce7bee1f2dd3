//! HTTP adapter for the remote verification service.
//!
//! Posts `{"input": ...}` to the verify endpoint and hands back whatever JSON
//! the service answered with. Interpreting the envelope is left to the
//! orchestrator and normalizer.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::domain::errors::TransportError;
use crate::domain::models::ServiceConfig;
use crate::domain::ports::{ModelInfo, VerificationService, VerifyRequest};

/// Envelope of the model catalogue endpoint.
#[derive(Debug, Deserialize)]
struct ModelsEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    models: Vec<ModelInfo>,
    #[serde(default)]
    error: Option<String>,
}

/// reqwest-backed [`VerificationService`].
#[derive(Debug, Clone)]
pub struct HttpVerificationClient {
    client: Client,
    verify_url: String,
    models_url: String,
}

impl HttpVerificationClient {
    /// Build a client for the service described by `config`.
    pub fn new(config: &ServiceConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Network(format!("Failed to create HTTP client: {e}")))?;

        let base = config.base_url.trim_end_matches('/');
        Ok(Self {
            client,
            verify_url: join_url(base, &config.verify_path),
            models_url: join_url(base, &config.models_path),
        })
    }

    pub fn verify_url(&self) -> &str {
        &self.verify_url
    }
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[async_trait]
impl VerificationService for HttpVerificationClient {
    #[instrument(skip(self, request), fields(url = %self.verify_url, input_len = request.input.len()))]
    async fn verify(&self, request: &VerifyRequest) -> Result<serde_json::Value, TransportError> {
        let response = self
            .client
            .post(&self.verify_url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %body, "verification request failed");
            return Err(TransportError::Status(status.as_u16()));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        debug!(
            model_used = payload.get("model_used").and_then(|m| m.as_str()),
            "verification response received"
        );
        Ok(payload)
    }

    #[instrument(skip(self), fields(url = %self.models_url))]
    async fn list_models(&self) -> Result<Vec<ModelInfo>, TransportError> {
        let response = self
            .client
            .get(&self.models_url)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let envelope: ModelsEnvelope = response
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        if !envelope.success {
            return Err(TransportError::Decode(
                envelope
                    .error
                    .unwrap_or_else(|| "service reported failure".to_string()),
            ));
        }
        Ok(envelope.models)
    }
}
