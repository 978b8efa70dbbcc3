//! Block derivation.
//!
//! Every stored carousel configuration is exposed to the host's layout
//! system as its own placeable block, plus a generic block that binds to
//! a configuration chosen at placement time. Both resolve to the same
//! assembly path.

use tracing::warn;

use carousel_config::ConfigStore;

use crate::assembler::{CarouselAssembler, RenderedCarousel};
use crate::cache::config_cache_tag;
use crate::errors::RenderResult;

/// A derived block plugin definition for one carousel configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDefinition {
    /// Block plugin id, `carousel_block:<config id>`.
    pub id: String,
    pub config_id: String,
    /// Label shown in the block placement UI.
    pub admin_label: String,
    /// Cache tag of the configuration the block depends on; a host's
    /// plugin registry invalidates derived definitions through it.
    pub config_dependency: String,
}

/// Derive one block definition per stored configuration.
///
/// Disabled configurations still get a definition; placing one simply
/// renders nothing until the configuration is re-enabled.
pub async fn derive_block_definitions(
    store: &dyn ConfigStore,
) -> RenderResult<Vec<BlockDefinition>> {
    let ids = store.list_ids().await?;
    let configs = store.load_multiple(&ids).await?;

    Ok(configs
        .into_iter()
        .map(|config| {
            let admin_label = if config.label.trim().is_empty() {
                config.id.clone()
            } else {
                config.label.clone()
            };
            BlockDefinition {
                id: format!("carousel_block:{}", config.id),
                config_dependency: config_cache_tag(&config.id),
                config_id: config.id,
                admin_label,
            }
        })
        .collect())
}

/// A placed carousel block bound to one configuration id.
///
/// Covers both the derived per-configuration blocks and the select block,
/// which stores the editor's chosen id in its placement settings.
pub struct CarouselBlock {
    config_id: String,
}

impl CarouselBlock {
    pub fn new(config_id: impl Into<String>) -> Self {
        Self {
            config_id: config_id.into(),
        }
    }

    pub fn from_definition(definition: &BlockDefinition) -> Self {
        Self::new(definition.config_id.clone())
    }

    pub fn config_id(&self) -> &str {
        &self.config_id
    }

    /// Build the block's render product.
    ///
    /// A select block placed without choosing a configuration renders
    /// nothing. A missing configuration (deleted after placement) also
    /// renders to nothing; the dangling placement is an operator concern,
    /// not a page failure.
    pub async fn build(
        &self,
        store: &dyn ConfigStore,
        assembler: &CarouselAssembler,
    ) -> RenderResult<Option<RenderedCarousel>> {
        if self.config_id.trim().is_empty() {
            return Ok(None);
        }
        let Some(config) = store.load(&self.config_id).await? else {
            warn!(
                config_id = %self.config_id,
                "Placed carousel block references a missing configuration"
            );
            return Ok(None);
        };
        assembler.render(&config).await
    }
}

#[cfg(test)]
#[path = "blocks_tests.rs"]
mod tests;
