//! Chat-completion backend abstraction and the Groq client.

mod client;

pub use client::{GroqClient, GroqConfig};

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when calling the completion backend.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("{0}")]
    Credential(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// A single request/response round trip to a hosted completion service.
///
/// The analysis dispatcher takes this as an explicitly constructed
/// dependency so tests can substitute a recording backend.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Produce a completion for the given system instruction and user content.
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError>;
}
