//! Centralized server configuration.
//!
//! Strongly-typed configuration loaded via the `config` crate from
//! environment variables. Nested fields use `__` as the separator, so the
//! downstream base URL is `OLLAMA__BASE_URL` and the listen port is `PORT`.
//! Every default matches the gateway's original deployment constants.

use sentinel_ai::OllamaConfig;
use serde::Deserialize;
use std::time::Duration;

/// Server configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Port the gateway listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Inference server settings.
    #[serde(default)]
    pub ollama: OllamaSettings,
}

/// Inference-server-related configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaSettings {
    /// Base URL of the inference server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier sent with every inference request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Deadline for a single inference call, in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_port() -> u16 {
    5000
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "deepseek-coder:1.3b-base".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

impl Default for OllamaSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl OllamaSettings {
    /// Converts these settings into a backend configuration.
    #[must_use]
    pub fn to_backend_config(&self) -> OllamaConfig {
        OllamaConfig::new(&self.base_url, &self.model)
            .with_timeout(Duration::from_secs(self.timeout_seconds))
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a provided value cannot be parsed.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
