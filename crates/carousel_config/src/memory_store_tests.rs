//! Tests for the in-memory configuration store.

use super::*;

fn config(id: &str) -> CarouselConfig {
    CarouselConfig {
        id: id.to_string(),
        label: id.to_string(),
        ..CarouselConfig::default()
    }
}

/// Verify save then load round-trips the record.
#[tokio::test]
async fn test_save_and_load() {
    let store = MemoryConfigStore::new();
    store.save(&config("hero")).await.expect("save");

    let loaded = store.load("hero").await.expect("load");
    assert_eq!(loaded, Some(config("hero")));
}

/// Verify loading a missing id yields None.
#[tokio::test]
async fn test_load_missing_is_none() {
    let store = MemoryConfigStore::new();
    assert_eq!(store.load("absent").await.expect("load"), None);
}

/// Verify load_multiple skips missing ids.
#[tokio::test]
async fn test_load_multiple_skips_missing() {
    let store = MemoryConfigStore::new();
    store.save(&config("a")).await.expect("save");
    store.save(&config("b")).await.expect("save");

    let loaded = store
        .load_multiple(&["a".to_string(), "ghost".to_string(), "b".to_string()])
        .await
        .expect("load");
    assert_eq!(loaded.len(), 2);
}

/// Verify saving twice replaces the record (last write wins).
#[tokio::test]
async fn test_save_replaces() {
    let store = MemoryConfigStore::new();
    store.save(&config("hero")).await.expect("save");

    let mut updated = config("hero");
    updated.enabled = false;
    store.save(&updated).await.expect("save");

    let loaded = store.load("hero").await.expect("load");
    assert_eq!(loaded.map(|c| c.enabled), Some(false));
}

/// Verify delete removes the record and tolerates missing ids.
#[tokio::test]
async fn test_delete() {
    let store = MemoryConfigStore::new();
    store.save(&config("hero")).await.expect("save");
    store.delete("hero").await.expect("delete");
    store.delete("hero").await.expect("delete again");
    assert_eq!(store.load("hero").await.expect("load"), None);
}

/// Verify list_ids reports every stored id.
#[tokio::test]
async fn test_list_ids() {
    let store = MemoryConfigStore::new();
    store.save(&config("b")).await.expect("save");
    store.save(&config("a")).await.expect("save");

    let ids = store.list_ids().await.expect("list");
    assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
}
