//! Error types shared across the crate.
//!
//! Every failure the pipeline can hit is one of a small closed set of
//! variants, so callers (and the CLI) can report corpus problems, vector
//! shape problems and remote-service problems distinctly instead of
//! funneling everything through one opaque message.

use async_openai::error::OpenAIError;
use thiserror::Error;

/// Unified error type for the shelfwise library and CLI.
#[derive(Debug, Error)]
pub enum ShelfwiseError {
    /// The review corpus is unusable (empty, or it produced no vocabulary).
    #[error("corpus error: {0}")]
    Corpus(String),

    /// A vector's length does not match the fitted vocabulary / index.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The chat completion endpoint failed (network, auth, rate limit).
    #[error("remote service error: {0}")]
    RemoteService(#[from] OpenAIError),

    /// The endpoint answered but the first choice carried no text content.
    #[error("remote service returned a response with no text content")]
    EmptyResponse,

    /// A YAML file (config, corpus or template) failed to parse.
    #[error("configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Anything without a dedicated variant, e.g. a missing config directory.
    #[error("{0}")]
    Other(String),
}

impl From<String> for ShelfwiseError {
    fn from(message: String) -> Self {
        ShelfwiseError::Other(message)
    }
}

impl From<&str> for ShelfwiseError {
    fn from(message: &str) -> Self {
        ShelfwiseError::Other(message.to_string())
    }
}
