//! AI primitives for the sentinel gateway.
//!
//! This crate provides the two building blocks the gateway composes per
//! request:
//!
//! - **Prompt templates**: fixed, per-task prompt text with a single
//!   payload insertion point
//! - **LLM backend**: single-shot inference against an Ollama-compatible
//!   server, with every failure mapped to an explicit error kind
//!
//! The HTTP surface lives in `sentinel-server`; this crate is pure glue
//! between a payload string and the inference server's text channel.

pub mod backend;
pub mod error;
pub mod prompt;

pub use backend::{GenerateRequest, GenerateResponse, LlmBackend, OllamaBackend, OllamaConfig};
pub use error::LlmError;
pub use prompt::{PromptTemplate, TaskKind};
