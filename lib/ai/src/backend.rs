//! LLM backend abstraction.
//!
//! A single trait over single-shot inference, with one production
//! implementation speaking the Ollama generate API. The gateway's handlers
//! only see the trait, so tests substitute a stub without touching the
//! network.

use crate::error::LlmError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for an Ollama backend.
///
/// Passed in explicitly at construction; the backend holds no process-wide
/// state.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL of the inference server.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Deadline for a single inference call.
    pub timeout: Duration,
}

impl OllamaConfig {
    /// Creates a configuration with the default 60 second deadline.
    #[must_use]
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the inference deadline.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// A request to the inference server, serialized verbatim to the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Model identifier.
    pub model: String,
    /// The fully rendered prompt.
    pub prompt: String,
    /// Always false; the gateway only relays complete responses.
    pub stream: bool,
}

impl GenerateRequest {
    /// Creates a non-streaming generate request.
    #[must_use]
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }
}

/// A successful response from the inference server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated text. Servers that omit the field yield an empty
    /// string rather than a parse failure.
    #[serde(rename = "response", default)]
    pub text: String,
}

/// Trait for LLM backends.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Issues exactly one inference call for the given request.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Timeout`] when the deadline elapses,
    /// [`LlmError::Unavailable`] when the server answers with a non-success
    /// status, and [`LlmError::Transport`] for any other fault, including a
    /// malformed response body.
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, LlmError>;

    /// Returns the model identifier this backend targets.
    fn model(&self) -> &str;
}

/// Client for an Ollama-compatible inference server.
pub struct OllamaBackend {
    client: reqwest::Client,
    config: OllamaConfig,
}

impl OllamaBackend {
    /// Creates a backend for the given configuration.
    #[must_use]
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl LlmBackend for OllamaBackend {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, LlmError> {
        let response = self
            .client
            .post(self.generate_url())
            .timeout(self.config.timeout)
            .json(request)
            .send()
            .await
            .map_err(fault_to_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                model = %request.model,
                "inference server returned non-success"
            );
            return Err(LlmError::Unavailable {
                status: status.as_u16(),
            });
        }

        response
            .json::<GenerateResponse>()
            .await
            .map_err(fault_to_error)
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

fn fault_to_error(fault: reqwest::Error) -> LlmError {
    if fault.is_timeout() {
        LlmError::Timeout
    } else {
        LlmError::Transport {
            reason: fault.to_string(),
        }
    }
}
