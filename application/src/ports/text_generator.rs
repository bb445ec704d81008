//! Text generator port
//!
//! Defines the interface for the remote generative-model fallback.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when calling the remote model
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Unexpected API response format")]
    UnexpectedFormat,
}

/// Gateway to a remote text-generation model
///
/// This port defines how the application layer reaches the hosted model.
/// Implementations (adapters) live in the infrastructure layer. Callers on
/// the answering path downgrade every error to a displayable string; this
/// trait never needs to distinguish retryable failures.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Identifier of the underlying model (for display and transcripts)
    fn model(&self) -> &str;

    /// Send a prompt and return the model's text output
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}
