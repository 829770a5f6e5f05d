//! Error types for the AI crate.
//!
//! Every failure of a backend call maps to exactly one `LlmError` variant,
//! so callers handle the full taxonomy exhaustively instead of relying on a
//! catch-all.

use std::fmt;

/// Errors from LLM backend operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// The inference server did not respond within the configured deadline.
    Timeout,
    /// The inference server responded with a non-success status.
    Unavailable { status: u16 },
    /// Transport-level fault: connection refused, DNS failure, or a
    /// malformed response body.
    Transport { reason: String },
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "inference request timed out"),
            Self::Unavailable { status } => {
                write!(f, "inference server unavailable (HTTP {status})")
            }
            Self::Transport { reason } => {
                write!(f, "inference transport failed: {reason}")
            }
        }
    }
}

impl std::error::Error for LlmError {}
