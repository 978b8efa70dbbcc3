//! Mount-point selector resolution.

use carousel_config::{ContentSource, ContentSpec};

/// A resolved mount-point selector.
///
/// `raw` is the selector string handed to the client bootstrap; `id` and
/// `class` are the wrapper attributes it implies (exactly one is set).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub raw: String,
    pub id: Option<String>,
    pub class: Option<String>,
}

/// Resolve the selector for a carousel.
///
/// A selector configured on a views source wins: `#value` is an id
/// selector, `.value` a class selector, and a bare name is treated as a
/// class. Otherwise the selector is derived from the config id as
/// `.splide--<id>`.
pub fn resolve_selector(config_id: &str, content: &ContentSpec) -> Selector {
    let configured = match content.source {
        Some(ContentSource::Views) => content
            .views
            .selector
            .as_deref()
            .map(str::trim)
            .unwrap_or(""),
        _ => "",
    };

    if !configured.is_empty() {
        if let Some(id) = configured.strip_prefix('#') {
            return Selector {
                raw: configured.to_string(),
                id: Some(id.to_string()),
                class: None,
            };
        }
        if let Some(class) = configured.strip_prefix('.') {
            return Selector {
                raw: configured.to_string(),
                id: None,
                class: Some(class.to_string()),
            };
        }
        return Selector {
            raw: format!(".{configured}"),
            id: None,
            class: Some(configured.to_string()),
        };
    }

    Selector {
        raw: format!(".splide--{config_id}"),
        id: None,
        class: Some(format!("splide--{config_id}")),
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
