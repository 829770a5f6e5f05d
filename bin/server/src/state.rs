//! Shared application state.

use sentinel_ai::LlmBackend;
use std::sync::Arc;

/// State shared by all route handlers.
///
/// The backend handle is the only cross-request value; no handler mutates
/// it, so requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    backend: Arc<dyn LlmBackend>,
}

impl AppState {
    /// Creates state around an inference backend.
    #[must_use]
    pub fn new(backend: Arc<dyn LlmBackend>) -> Self {
        Self { backend }
    }

    /// Returns the inference backend.
    #[must_use]
    pub fn backend(&self) -> &dyn LlmBackend {
        self.backend.as_ref()
    }

    /// Returns the model's short display name, with any tag stripped:
    /// "deepseek-coder" for "deepseek-coder:1.3b-base".
    #[must_use]
    pub fn model_display(&self) -> &str {
        let model = self.backend.model();
        model.split(':').next().unwrap_or(model)
    }
}
