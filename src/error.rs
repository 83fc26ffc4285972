use crate::context::ContextError;
use thiserror::Error;

/// Top-level error type for the galaxy-configurator library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("context error: {0}")]
    Context(#[from] ContextError),

    #[error("failed to convert context for rendering: {0}")]
    EngineValue(#[from] serde_json::Error),
}
