//! Content portion of the carousel configuration schema.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Whether carousel items are meaningful content or purely visual.
///
/// Decorative carousels are exposed to assistive technology as a plain
/// group; the accessibility rule engine derives the ARIA role from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Semantics {
    #[default]
    Content,
    Decorative,
}

/// Where carousel slides come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    /// An editor-ordered list of content items.
    Node,
    /// A pre-configured query display.
    Views,
}

/// A rich-text block with an optional text format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormattedText {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl FormattedText {
    /// A block whose value is blank is never rendered.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Reference to a single content item with an explicit ordering weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    pub id: String,
    #[serde(default)]
    pub weight: i64,
}

/// Node-sourced content: allowed bundles, the ordered item list, and
/// per-bundle view-mode overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeContent {
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub allowed_bundles: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemRef>,
    /// Bundle id mapped to the view mode used to render items of that
    /// bundle. An empty string means "use the default view mode".
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub view_modes: BTreeMap<String, String>,
}

/// Views-sourced content: the query display to execute and an optional
/// CSS selector for the mount point.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewsContent {
    #[serde(default)]
    pub query_id: String,
    #[serde(default)]
    pub display_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

/// The `content` sub-record of a carousel configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentSpec {
    #[serde(default)]
    pub semantics: Semantics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ContentSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<FormattedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<FormattedText>,
    #[serde(default)]
    pub node: NodeContent,
    #[serde(default)]
    pub views: ViewsContent,
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;
