//! Widget option groups of the carousel configuration schema.
//!
//! Options are stored grouped by admin-form topic. Scalar groups hold raw
//! option keys whose values flatten into the compiled payload; `classes`,
//! `i18n`, and `breakpoints` are structured tables built by their
//! sub-builders, and `reducedMotion` stays nested in the output.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::coerce::coerce;

/// A single option group: option key mapped to a raw scalar value.
pub type OptionGroup = serde_json::Map<String, Value>;

/// The `options` groups of a carousel configuration.
///
/// Group names and their compile order follow the admin form: general,
/// layout, navigation, autoplay, lazy, drag, accessibility, behavior,
/// reducedMotion, classes, i18n, breakpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptionsSpec {
    #[serde(default, skip_serializing_if = "OptionGroup::is_empty")]
    pub general: OptionGroup,
    #[serde(default, skip_serializing_if = "OptionGroup::is_empty")]
    pub layout: OptionGroup,
    #[serde(default, skip_serializing_if = "OptionGroup::is_empty")]
    pub navigation: OptionGroup,
    #[serde(default, skip_serializing_if = "OptionGroup::is_empty")]
    pub autoplay: OptionGroup,
    #[serde(default, skip_serializing_if = "OptionGroup::is_empty")]
    pub lazy: OptionGroup,
    #[serde(default, skip_serializing_if = "OptionGroup::is_empty")]
    pub drag: OptionGroup,
    #[serde(default, skip_serializing_if = "OptionGroup::is_empty")]
    pub accessibility: OptionGroup,
    #[serde(default, skip_serializing_if = "OptionGroup::is_empty")]
    pub behavior: OptionGroup,
    #[serde(
        default,
        rename = "reducedMotion",
        skip_serializing_if = "OptionGroup::is_empty"
    )]
    pub reduced_motion: OptionGroup,
    /// Class slot mapped to extra CSS classes (overrides only; default
    /// classes are concatenated by the render assembler).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub classes: BTreeMap<String, String>,
    /// i18n string key mapped to override text.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub i18n: BTreeMap<String, String>,
    /// Breakpoint pixel width (serialized as a string) mapped to a partial
    /// option group that applies at that width.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub breakpoints: BTreeMap<String, OptionGroup>,
}

impl OptionsSpec {
    /// The scalar groups in their fixed compile order.
    pub fn scalar_groups(&self) -> [(&'static str, &OptionGroup); 8] {
        [
            ("general", &self.general),
            ("layout", &self.layout),
            ("navigation", &self.navigation),
            ("autoplay", &self.autoplay),
            ("lazy", &self.lazy),
            ("drag", &self.drag),
            ("accessibility", &self.accessibility),
            ("behavior", &self.behavior),
        ]
    }

    /// Look up a flattened option value across the scalar groups.
    ///
    /// Groups are scanned in compile order with later groups overriding
    /// earlier ones, so this reports the value the compiled payload would
    /// carry. The value is returned coerced; `None` means the key is unset
    /// (the client widget falls back to its own default).
    pub fn lookup(&self, key: &str) -> Option<Value> {
        let mut found = None;
        for (_, group) in self.scalar_groups() {
            if let Some(value) = group.get(key).and_then(coerce) {
                found = Some(value);
            }
        }
        found
    }

    /// Look up a flattened option as a boolean, when it coerces to one.
    pub fn lookup_bool(&self, key: &str) -> Option<bool> {
        match self.lookup(key)? {
            Value::Bool(flag) => Some(flag),
            _ => None,
        }
    }

    /// Look up a flattened option as an integer, when it coerces to one.
    pub fn lookup_i64(&self, key: &str) -> Option<i64> {
        self.lookup(key)?.as_i64()
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
