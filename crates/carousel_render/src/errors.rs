//! Render assembly error types.
//!
//! Errors here are collaborator or template failures only. An empty render
//! result (disabled config, unresolved item, missing query display) is a
//! normal outcome and is never represented as an error.

use thiserror::Error;

use carousel_config::ConfigError;

/// Render assembly errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error(transparent)]
    Store(#[from] ConfigError),

    #[error("Content resolution failed: {reason}")]
    ContentResolution { reason: String },

    #[error("Query display '{query_id}:{display_id}' failed: {reason}")]
    QueryExecution {
        query_id: String,
        display_id: String,
        reason: String,
    },

    #[error("Markup template failed: {reason}")]
    Template { reason: String },
}

/// Result type alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
