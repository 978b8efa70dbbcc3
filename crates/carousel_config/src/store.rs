//! Configuration storage collaborator.

use async_trait::async_trait;

use crate::config::CarouselConfig;
use crate::errors::ConfigResult;

/// Key-value storage for carousel configurations.
///
/// The admin service and the render layer depend on this seam; the host
/// application decides where records actually live. Implementations must
/// round-trip records unchanged. Concurrent saves are last-write-wins;
/// this crate attempts no conflict detection.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load a configuration by id, `None` when it does not exist.
    async fn load(&self, id: &str) -> ConfigResult<Option<CarouselConfig>>;

    /// Load several configurations at once, skipping missing ids.
    async fn load_multiple(&self, ids: &[String]) -> ConfigResult<Vec<CarouselConfig>>;

    /// Persist a configuration, replacing any record with the same id.
    async fn save(&self, config: &CarouselConfig) -> ConfigResult<()>;

    /// Delete a configuration; deleting a missing id is not an error.
    async fn delete(&self, id: &str) -> ConfigResult<()>;

    /// All stored configuration ids.
    async fn list_ids(&self) -> ConfigResult<Vec<String>>;
}
