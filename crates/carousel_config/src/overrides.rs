//! Class and i18n override tables.
//!
//! Both tables expose a fixed, library-defined key set; editors fill in
//! override text per key and only keys with non-blank text are stored.

use std::collections::BTreeMap;

/// Splide class slots and their built-in default class strings.
///
/// The sub-builder stores override text only; the render assembler
/// concatenates the default class with the override when compiling the
/// payload.
pub const CLASS_SLOTS: [(&str, &str); 6] = [
    ("arrows", "splide__arrows"),
    ("arrow", "splide__arrow"),
    ("prev", "splide__arrow--prev"),
    ("next", "splide__arrow--next"),
    ("pagination", "splide__pagination"),
    ("page", "splide__pagination__page"),
];

/// Splide i18n string keys editors may override.
pub const I18N_KEYS: [&str; 12] = [
    "prev",
    "next",
    "first",
    "last",
    "slideX",
    "pageX",
    "play",
    "pause",
    "carousel",
    "slide",
    "select",
    "slideLabel",
];

/// The built-in default class string for a class slot, if the slot exists.
pub fn default_class(slot: &str) -> Option<&'static str> {
    CLASS_SLOTS
        .iter()
        .find(|(name, _)| *name == slot)
        .map(|(_, default)| *default)
}

/// Build the class override table: well-known slots with non-blank text.
pub fn build_class_overrides(input: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    filter_known_keys(input, CLASS_SLOTS.iter().map(|(slot, _)| *slot))
}

/// Build the i18n override table: well-known keys with non-blank text.
pub fn build_i18n_overrides(input: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    filter_known_keys(input, I18N_KEYS.iter().copied())
}

fn filter_known_keys<'a>(
    input: &BTreeMap<String, String>,
    known: impl Iterator<Item = &'a str>,
) -> BTreeMap<String, String> {
    known
        .filter_map(|key| {
            let text = input.get(key)?.trim();
            if text.is_empty() {
                None
            } else {
                Some((key.to_string(), text.to_string()))
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "overrides_tests.rs"]
mod tests;
