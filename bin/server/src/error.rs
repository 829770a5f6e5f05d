//! Request-boundary error handling.
//!
//! Every fault a handler can hit is converted here into a JSON body with an
//! `error` field and the matching status code; nothing propagates to the
//! caller as an unhandled fault.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sentinel_ai::LlmError;
use std::fmt;

/// Errors surfaced by the gateway's route handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request payload was missing or empty after trimming.
    InvalidInput { message: &'static str },
    /// The request body could not be read as JSON.
    MalformedBody { message: String },
    /// The inference call failed.
    Llm(LlmError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { message } => write!(f, "{message}"),
            Self::MalformedBody { message } => write!(f, "{message}"),
            Self::Llm(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        Self::Llm(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody {
            message: rejection.body_text(),
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } | Self::MalformedBody { .. } => StatusCode::BAD_REQUEST,
            Self::Llm(LlmError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            Self::Llm(LlmError::Unavailable { .. }) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Llm(LlmError::Transport { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(self) -> String {
        match self {
            Self::InvalidInput { message } => message.to_string(),
            Self::MalformedBody { message } => message,
            Self::Llm(LlmError::Timeout) => "Request timeout - model is processing".to_string(),
            Self::Llm(LlmError::Unavailable { .. }) => "Model unavailable".to_string(),
            Self::Llm(LlmError::Transport { reason }) => reason,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Llm(err) = &self {
            tracing::warn!(error = %err, "inference call failed");
        }

        let status = self.status();
        let body = Json(serde_json::json!({ "error": self.message() }));
        (status, body).into_response()
    }
}
