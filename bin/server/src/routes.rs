//! Route handlers for the gateway's JSON surface.
//!
//! Each POST handler runs the same straight line: validate the payload,
//! render the task's prompt, issue one inference call, and map the outcome
//! to a status code. No state survives the request.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use sentinel_ai::{GenerateRequest, TaskKind};
use serde::{Deserialize, Serialize};

/// Builds the gateway router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/analyze", post(analyze))
        .route("/api/chat", post(chat))
        .route("/api/threat-detect", post(threat_detect))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ThreatDetectRequest {
    #[serde(default)]
    logs: Option<String>,
}

/// Body for /api/analyze and /api/threat-detect responses.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
    pub model: String,
}

/// Body for /api/chat responses.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: String,
}

/// Health check endpoint.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        model: state.model_display().to_string(),
    })
}

/// Analyzes code for security vulnerabilities.
async fn analyze(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let Json(body) = body?;
    let code = require_payload(body.code, "No code provided")?;
    let text = run_inference(&state, TaskKind::CodeAnalysis, &code).await?;
    Ok(Json(AnalysisResponse {
        analysis: text,
        model: state.backend().model().to_string(),
    }))
}

/// General chat endpoint for security questions.
async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(body) = body?;
    let message = require_payload(body.message, "No message provided")?;
    let text = run_inference(&state, TaskKind::Chat, &message).await?;
    Ok(Json(ChatResponse {
        response: text,
        model: state.backend().model().to_string(),
    }))
}

/// Detects threats in logs or network traffic.
async fn threat_detect(
    State(state): State<AppState>,
    body: Result<Json<ThreatDetectRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let Json(body) = body?;
    let logs = require_payload(body.logs, "No logs provided")?;
    let text = run_inference(&state, TaskKind::ThreatDetect, &logs).await?;
    Ok(Json(AnalysisResponse {
        analysis: text,
        model: state.backend().model().to_string(),
    }))
}

/// Rejects missing or whitespace-only payloads before any prompt is built.
fn require_payload(value: Option<String>, missing: &'static str) -> Result<String, ApiError> {
    match value {
        Some(payload) if !payload.trim().is_empty() => Ok(payload),
        _ => Err(ApiError::InvalidInput { message: missing }),
    }
}

async fn run_inference(
    state: &AppState,
    kind: TaskKind,
    payload: &str,
) -> Result<String, ApiError> {
    let prompt = kind.render(payload);
    let request = GenerateRequest::new(state.backend().model(), prompt);
    let response = state.backend().generate(&request).await?;
    tracing::info!(task = ?kind, "inference completed");
    Ok(response.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_payload_accepts_non_empty() {
        let result = require_payload(Some("print(1)".to_string()), "No code provided");
        assert_eq!(result.expect("accepted"), "print(1)");
    }

    #[test]
    fn require_payload_rejects_missing() {
        let result = require_payload(None, "No code provided");
        assert_eq!(
            result.expect_err("rejected"),
            ApiError::InvalidInput {
                message: "No code provided"
            }
        );
    }

    #[test]
    fn require_payload_rejects_whitespace_only() {
        let result = require_payload(Some("  \n\t ".to_string()), "No logs provided");
        assert!(result.is_err());
    }
}
