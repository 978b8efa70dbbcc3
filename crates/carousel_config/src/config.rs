//! The persisted carousel configuration record.

use serde::{Deserialize, Serialize};

use crate::content::ContentSpec;
use crate::options::OptionsSpec;

/// A stored carousel configuration, keyed by a unique machine name.
///
/// The persisted shape is `{id, label, enabled, options}` where `options`
/// carries the content sub-record alongside the widget option groups; this
/// shape round-trips bit-exact through save/load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Unique machine name, immutable after creation.
    pub id: String,
    /// Human-readable label.
    #[serde(default)]
    pub label: String,
    /// Disabled configurations render to empty output.
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default)]
    pub options: CarouselOptions,
}

fn enabled_default() -> bool {
    true
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            label: String::new(),
            enabled: true,
            options: CarouselOptions::default(),
        }
    }
}

/// The `options` record: content specification plus widget option groups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CarouselOptions {
    #[serde(default)]
    pub content: ContentSpec,
    #[serde(flatten)]
    pub widget: OptionsSpec,
}

impl CarouselConfig {
    /// The content specification (source, items, semantics).
    pub fn content(&self) -> &ContentSpec {
        &self.options.content
    }

    /// The widget option groups, excluding content.
    pub fn widget_options(&self) -> &OptionsSpec {
        &self.options.widget
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
