//! Options compiler.
//!
//! Compiles the stored option groups into the single options object the
//! client-side widget consumes. Scalar groups flatten into the top level
//! in a fixed order (later groups win for colliding keys); `classes`,
//! `i18n`, and `breakpoints` keep their own nested keys, and
//! `reducedMotion` is the one group that stays nested as submitted.
//!
//! The output is sparse: coercion guarantees no empty-string or null
//! values survive, so an unset option never masks the widget's default.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::breakpoints::normalize_breakpoint_map;
use crate::coerce::coerce;
use crate::options::OptionsSpec;

/// Compile the stored option groups into the client options payload.
///
/// Deterministic: identical input always yields an identical object.
pub fn compile_options(options: &OptionsSpec) -> Map<String, Value> {
    let mut compiled = Map::new();

    for (_, group) in options.scalar_groups() {
        for (key, raw) in group {
            if let Some(value) = coerce(raw) {
                compiled.insert(key.clone(), value);
            }
        }
    }

    let mut reduced = Map::new();
    for (key, raw) in &options.reduced_motion {
        if let Some(value) = coerce(raw) {
            reduced.insert(key.clone(), value);
        }
    }
    if !reduced.is_empty() {
        compiled.insert("reducedMotion".to_string(), Value::Object(reduced));
    }

    let classes = string_table(&options.classes);
    if !classes.is_empty() {
        compiled.insert("classes".to_string(), Value::Object(classes));
    }

    let i18n = string_table(&options.i18n);
    if !i18n.is_empty() {
        compiled.insert("i18n".to_string(), Value::Object(i18n));
    }

    let breakpoints = normalize_breakpoint_map(&options.breakpoints);
    if !breakpoints.is_empty() {
        let mut table = Map::new();
        for (width, group) in breakpoints {
            table.insert(width, Value::Object(group));
        }
        compiled.insert("breakpoints".to_string(), Value::Object(table));
    }

    compiled
}

fn string_table(entries: &BTreeMap<String, String>) -> Map<String, Value> {
    entries
        .iter()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(key, text)| (key.clone(), Value::String(text.trim().to_string())))
        .collect()
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
