//! HTTP gateway for the sentinel security assistant.
//!
//! Three JSON routes wrap a caller's payload in a fixed prompt and relay it
//! to a local inference server; a health route reports the configured
//! model. All state is per-request apart from the shared backend handle.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
