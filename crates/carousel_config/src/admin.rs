//! Admin save/load service.
//!
//! Ties form normalization to the configuration store and enforces the
//! lifecycle rules of the machine-name key: unique on create, immutable
//! afterwards.

use std::sync::Arc;
use tracing::info;

use crate::errors::{ConfigError, ConfigResult};
use crate::form::{normalize_submission, FormSubmission, NormalizedCarousel};
use crate::store::ConfigStore;

/// Create/update service for carousel configurations.
pub struct CarouselAdmin {
    store: Arc<dyn ConfigStore>,
}

impl CarouselAdmin {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// Normalize and persist a new configuration.
    ///
    /// Fails with [`ConfigError::DuplicateId`] when the id is already
    /// taken, and with [`ConfigError::ValidationFailed`] when the
    /// submission has blocking field errors.
    pub async fn create(&self, submission: &FormSubmission) -> ConfigResult<NormalizedCarousel> {
        let normalized = normalize_submission(submission)?;
        if self.store.load(&normalized.config.id).await?.is_some() {
            return Err(ConfigError::DuplicateId {
                id: normalized.config.id.clone(),
            });
        }
        self.store.save(&normalized.config).await?;
        info!(id = %normalized.config.id, "created carousel configuration");
        Ok(normalized)
    }

    /// Normalize and persist changes to an existing configuration.
    ///
    /// The id names the record to replace and cannot be changed.
    pub async fn update(&self, submission: &FormSubmission) -> ConfigResult<NormalizedCarousel> {
        let normalized = normalize_submission(submission)?;
        if self.store.load(&normalized.config.id).await?.is_none() {
            return Err(ConfigError::NotFound {
                id: normalized.config.id.clone(),
            });
        }
        self.store.save(&normalized.config).await?;
        info!(id = %normalized.config.id, "updated carousel configuration");
        Ok(normalized)
    }

    /// Load a configuration, failing when it does not exist.
    pub async fn load(&self, id: &str) -> ConfigResult<crate::CarouselConfig> {
        self.store
            .load(id)
            .await?
            .ok_or_else(|| ConfigError::NotFound { id: id.to_string() })
    }

    /// Delete a configuration and its sub-structures.
    pub async fn delete(&self, id: &str) -> ConfigResult<()> {
        self.store.delete(id).await?;
        info!(id, "deleted carousel configuration");
        Ok(())
    }
}

#[cfg(test)]
#[path = "admin_tests.rs"]
mod tests;
