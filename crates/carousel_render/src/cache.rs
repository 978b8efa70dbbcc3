//! Cache dependency metadata.
//!
//! The assembler does not cache anything itself; it carries the tags the
//! host's caching layer needs to invalidate rendered output when the
//! configuration record or a query result changes.

use std::collections::BTreeSet;

/// Cache dependency tags attached to a rendered carousel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CacheMetadata {
    pub tags: BTreeSet<String>,
}

impl CacheMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata carrying a single tag.
    pub fn with_tag(tag: impl Into<String>) -> Self {
        let mut metadata = Self::new();
        metadata.add_tag(tag);
        metadata
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.insert(tag.into());
    }

    /// Absorb another source's tags.
    pub fn merge(&mut self, other: &CacheMetadata) {
        self.tags.extend(other.tags.iter().cloned());
    }
}

/// The cache tag of a stored carousel configuration.
pub fn config_cache_tag(id: &str) -> String {
    format!("carousel_config:{id}")
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
