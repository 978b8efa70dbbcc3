//! In-memory configuration store.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::config::CarouselConfig;
use crate::errors::{ConfigError, ConfigResult};
use crate::store::ConfigStore;

/// A [`ConfigStore`] backed by a map, for tests and embedding hosts that
/// manage persistence themselves.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    records: RwLock<BTreeMap<String, CarouselConfig>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(_: impl std::fmt::Debug) -> ConfigError {
    ConfigError::StoreFailure {
        reason: "store lock poisoned".to_string(),
    }
}

#[async_trait]
impl ConfigStore for MemoryConfigStore {
    async fn load(&self, id: &str) -> ConfigResult<Option<CarouselConfig>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.get(id).cloned())
    }

    async fn load_multiple(&self, ids: &[String]) -> ConfigResult<Vec<CarouselConfig>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(ids
            .iter()
            .filter_map(|id| records.get(id).cloned())
            .collect())
    }

    async fn save(&self, config: &CarouselConfig) -> ConfigResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        records.insert(config.id.clone(), config.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> ConfigResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        records.remove(id);
        Ok(())
    }

    async fn list_ids(&self) -> ConfigResult<Vec<String>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.keys().cloned().collect())
    }
}

#[cfg(test)]
#[path = "memory_store_tests.rs"]
mod tests;
