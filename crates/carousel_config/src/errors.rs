//! Configuration system error types.
//!
//! Domain-specific errors for carousel configuration normalization,
//! validation, and storage operations.

use thiserror::Error;

use crate::validation::ValidationError;

/// Carousel configuration errors.
///
/// These errors occur when normalizing form submissions, validating a
/// configuration, or talking to the configuration store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Carousel configuration not found: {id}")]
    NotFound { id: String },

    #[error("A carousel configuration with id '{id}' already exists")]
    DuplicateId { id: String },

    #[error("Configuration store operation failed: {reason}")]
    StoreFailure { reason: String },

    #[error("Configuration validation failed with {error_count} error(s)")]
    ValidationFailed {
        error_count: usize,
        errors: Vec<ValidationError>,
    },
}

impl ConfigError {
    /// Wrap the errors collected in a validation pass.
    pub fn from_validation_errors(errors: Vec<ValidationError>) -> Self {
        Self::ValidationFailed {
            error_count: errors.len(),
            errors,
        }
    }
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
