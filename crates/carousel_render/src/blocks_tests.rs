//! Tests for block derivation.

use super::*;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

use carousel_config::{CarouselConfig, MemoryConfigStore};

use crate::collaborators::{ContentResolver, QueryOutput, QueryRunner, ResolvedItem};

struct NullResolver;

#[async_trait]
impl ContentResolver for NullResolver {
    async fn resolve(&self, _ids: &[String]) -> RenderResult<BTreeMap<String, ResolvedItem>> {
        Ok(BTreeMap::new())
    }

    async fn render(&self, _item: &ResolvedItem, _view_mode: &str) -> RenderResult<String> {
        Ok(String::new())
    }
}

struct NullRunner;

#[async_trait]
impl QueryRunner for NullRunner {
    async fn execute(
        &self,
        _query_id: &str,
        _display_id: &str,
    ) -> RenderResult<Option<QueryOutput>> {
        Ok(None)
    }
}

fn config(id: &str, label: &str) -> CarouselConfig {
    CarouselConfig {
        id: id.to_string(),
        label: label.to_string(),
        ..CarouselConfig::default()
    }
}

async fn seeded_store(configs: &[CarouselConfig]) -> MemoryConfigStore {
    let store = MemoryConfigStore::new();
    for config in configs {
        store.save(config).await.expect("save");
    }
    store
}

/// Verify one definition derives per stored configuration.
#[tokio::test]
async fn test_derive_definitions() {
    let store = seeded_store(&[config("hero", "Hero carousel"), config("news", "News")]).await;

    let definitions = derive_block_definitions(&store).await.expect("derive");

    assert_eq!(definitions.len(), 2);
    let hero = definitions
        .iter()
        .find(|definition| definition.config_id == "hero")
        .expect("hero derived");
    assert_eq!(hero.id, "carousel_block:hero");
    assert_eq!(hero.admin_label, "Hero carousel");
    assert_eq!(hero.config_dependency, "carousel_config:hero");
}

/// Verify the admin label falls back to the id when the label is blank.
#[tokio::test]
async fn test_admin_label_falls_back_to_id() {
    let store = seeded_store(&[config("hero", "   ")]).await;

    let definitions = derive_block_definitions(&store).await.expect("derive");
    assert_eq!(definitions[0].admin_label, "hero");
}

/// Verify a disabled configuration still derives a definition.
#[tokio::test]
async fn test_disabled_config_still_derives() {
    let mut disabled = config("hero", "Hero carousel");
    disabled.enabled = false;
    let store = seeded_store(&[disabled]).await;

    let definitions = derive_block_definitions(&store).await.expect("derive");
    assert_eq!(definitions.len(), 1);
}

/// Verify a placed block renders its configuration.
#[tokio::test]
async fn test_block_builds() {
    let store = seeded_store(&[config("hero", "Hero carousel")]).await;
    let assembler = CarouselAssembler::new(Arc::new(NullResolver), Arc::new(NullRunner), "teaser")
        .expect("assembler");

    let block = CarouselBlock::new("hero");
    let rendered = block
        .build(&store, &assembler)
        .await
        .expect("build")
        .expect("rendered");
    assert_eq!(rendered.carousel_id, "hero");
    assert!(rendered.markup.contains("splide--hero"));
}

/// Verify a select block without a chosen configuration renders nothing.
#[tokio::test]
async fn test_blank_selection_renders_nothing() {
    let store = seeded_store(&[config("hero", "Hero carousel")]).await;
    let assembler = CarouselAssembler::new(Arc::new(NullResolver), Arc::new(NullRunner), "teaser")
        .expect("assembler");

    let block = CarouselBlock::new("");
    let rendered = block.build(&store, &assembler).await.expect("build");
    assert!(rendered.is_none());
}

/// Verify a block whose configuration was deleted renders nothing.
#[tokio::test]
async fn test_missing_config_renders_nothing() {
    let store = seeded_store(&[]).await;
    let assembler = CarouselAssembler::new(Arc::new(NullResolver), Arc::new(NullRunner), "teaser")
        .expect("assembler");

    let block = CarouselBlock::from_definition(&BlockDefinition {
        id: "carousel_block:ghost".to_string(),
        config_id: "ghost".to_string(),
        admin_label: "Ghost".to_string(),
        config_dependency: "carousel_config:ghost".to_string(),
    });
    let rendered = block.build(&store, &assembler).await.expect("build");
    assert!(rendered.is_none());
}
