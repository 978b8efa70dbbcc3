//! Content collaborator traits.
//!
//! The assembler never touches storage or query machinery directly; the
//! host application injects implementations of these traits. Both are
//! request-scoped and synchronous in effect: one render pass performs a
//! bounded number of calls and holds no state between passes.

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::cache::CacheMetadata;
use crate::errors::RenderResult;

/// A content item resolved from a reference id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedItem {
    pub id: String,
    /// The item's bundle, used to pick a view-mode override.
    pub bundle: String,
}

/// Resolves and renders referenced content items.
#[async_trait]
pub trait ContentResolver: Send + Sync {
    /// Resolve reference ids to items. Ids that no longer resolve are
    /// simply absent from the returned map; that is not an error.
    async fn resolve(&self, ids: &[String]) -> RenderResult<BTreeMap<String, ResolvedItem>>;

    /// Render one resolved item with the given view mode, returning an
    /// HTML fragment.
    async fn render(&self, item: &ResolvedItem, view_mode: &str) -> RenderResult<String>;
}

/// The output of executing a query display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryOutput {
    /// Row-level fragments, one per result row, when the display can
    /// decompose its result.
    pub rows: Vec<String>,
    /// The combined rendering, used as a single slide when no row-level
    /// decomposition is available.
    pub combined: String,
    /// Cache metadata produced by the query execution; merged into the
    /// assembler's own output metadata.
    pub cache: CacheMetadata,
}

/// Executes named query displays.
#[async_trait]
pub trait QueryRunner: Send + Sync {
    /// Execute a query display. `Ok(None)` means the display does not
    /// exist or is not accessible; the carousel renders without slides.
    async fn execute(&self, query_id: &str, display_id: &str) -> RenderResult<Option<QueryOutput>>;
}
