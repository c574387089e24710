//! Error types for the router core

use thiserror::Error;
use webc_types::WebcError;

/// Router error types
#[derive(Debug, Error)]
pub enum RouterError {
    /// Base URL of the routing configuration is unusable
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Pages prefix could not be turned into a pattern
    #[error("Invalid pages prefix: {0}")]
    InvalidPagesPrefix(String),

    /// Embedding shell exposed a base URL that does not parse
    #[error("Invalid embedded context: {0}")]
    InvalidEmbeddedContext(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] WebcError),
}
