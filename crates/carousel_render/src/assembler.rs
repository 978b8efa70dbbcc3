//! Carousel render assembly.
//!
//! Takes a stored configuration record and produces the full render
//! product: markup, mount-point selector, the compiled client options
//! payload, the autoplay toggle affordance, and cache metadata. Content
//! slides come from the injected collaborators.

use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};

use carousel_config::{
    compile_options, default_class, CarouselConfig, ContentSource, ContentSpec, NodeContent,
    ViewsContent,
};

use crate::cache::{config_cache_tag, CacheMetadata};
use crate::collaborators::{ContentResolver, QueryRunner};
use crate::errors::RenderResult;
use crate::selector::{resolve_selector, Selector};
use crate::skeleton::{SkeletonContext, SkeletonRenderer, ToggleContext};

const DEFAULT_PLAY_LABEL: &str = "Start autoplay";
const DEFAULT_PAUSE_LABEL: &str = "Pause autoplay";

/// The autoplay toggle affordance rendered alongside the slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayToggle {
    pub play_label: String,
    pub pause_label: String,
}

/// Everything a page needs to mount one carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCarousel {
    pub carousel_id: String,
    pub markup: String,
    pub selector: Selector,
    /// The compiled options payload, with default class strings merged
    /// into any class overrides.
    pub options: Map<String, Value>,
    pub toggle: Option<AutoplayToggle>,
    pub cache: CacheMetadata,
}

impl RenderedCarousel {
    /// The per-carousel settings object handed to the client bootstrap.
    pub fn client_settings(&self) -> Value {
        json!({
            "selector": self.selector.raw,
            "options": Value::Object(self.options.clone()),
        })
    }
}

/// Assembles rendered carousels from stored configurations.
pub struct CarouselAssembler {
    resolver: Arc<dyn ContentResolver>,
    query_runner: Arc<dyn QueryRunner>,
    skeleton: SkeletonRenderer,
    /// View mode used for item bundles without an explicit override.
    default_view_mode: String,
}

impl CarouselAssembler {
    pub fn new(
        resolver: Arc<dyn ContentResolver>,
        query_runner: Arc<dyn QueryRunner>,
        default_view_mode: impl Into<String>,
    ) -> RenderResult<Self> {
        Ok(Self {
            resolver,
            query_runner,
            skeleton: SkeletonRenderer::new()?,
            default_view_mode: default_view_mode.into(),
        })
    }

    /// Render one carousel configuration.
    ///
    /// Returns `Ok(None)` for a disabled configuration. Content that
    /// cannot be resolved is skipped, not fatal: a carousel whose items
    /// all vanished still renders its shell so the page layout holds.
    pub async fn render(&self, config: &CarouselConfig) -> RenderResult<Option<RenderedCarousel>> {
        if !config.enabled {
            debug!(carousel_id = %config.id, "Skipping disabled carousel");
            return Ok(None);
        }

        let content = config.content();
        let mut cache = CacheMetadata::with_tag(config_cache_tag(&config.id));

        let mut options = compile_options(config.widget_options());
        merge_default_classes(&mut options);

        let selector = resolve_selector(&config.id, content);

        let slides = match content.source {
            Some(ContentSource::Node) => self.node_slides(&content.node, &mut cache).await?,
            Some(ContentSource::Views) => {
                self.views_slides(&config.id, &content.views, &mut cache)
                    .await?
            }
            None => Vec::new(),
        };

        let toggle = autoplay_toggle(&options);
        let context = skeleton_context(content, &selector, &options, slides, toggle.as_ref());
        let markup = self.skeleton.render(&context)?;

        debug!(
            carousel_id = %config.id,
            slides = context.slides.len(),
            "Assembled carousel"
        );

        Ok(Some(RenderedCarousel {
            carousel_id: config.id.clone(),
            markup,
            selector,
            options,
            toggle,
            cache,
        }))
    }

    /// Render slides from an editor-ordered item list.
    async fn node_slides(
        &self,
        node: &NodeContent,
        cache: &mut CacheMetadata,
    ) -> RenderResult<Vec<String>> {
        let ids: Vec<String> = node.items.iter().map(|item| item.id.clone()).collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let resolved = self.resolver.resolve(&ids).await?;

        let mut slides = Vec::new();
        for reference in &node.items {
            let Some(item) = resolved.get(&reference.id) else {
                // Deleted or unpublished items drop out silently for
                // visitors; the log line is for site operators.
                warn!(item_id = %reference.id, "Carousel item no longer resolves, skipping");
                continue;
            };

            let view_mode = node
                .view_modes
                .get(&item.bundle)
                .map(String::as_str)
                .filter(|mode| !mode.is_empty())
                .unwrap_or(&self.default_view_mode);

            slides.push(self.resolver.render(item, view_mode).await?);
            cache.add_tag(format!("content_item:{}", item.id));
        }

        Ok(slides)
    }

    /// Render slides by executing a query display.
    async fn views_slides(
        &self,
        carousel_id: &str,
        views: &ViewsContent,
        cache: &mut CacheMetadata,
    ) -> RenderResult<Vec<String>> {
        let Some(output) = self
            .query_runner
            .execute(&views.query_id, &views.display_id)
            .await?
        else {
            debug!(
                carousel_id = %carousel_id,
                query_id = %views.query_id,
                display_id = %views.display_id,
                "Query display unavailable, rendering carousel without slides"
            );
            return Ok(Vec::new());
        };

        cache.merge(&output.cache);

        if !output.rows.is_empty() {
            return Ok(output.rows);
        }
        if output.combined.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![output.combined])
    }
}

/// Merge the built-in default class string into each class override.
///
/// Stored overrides hold the editor's text only; the widget needs the
/// default class kept alongside it so styling and behavior hooks survive.
fn merge_default_classes(options: &mut Map<String, Value>) {
    let Some(Value::Object(classes)) = options.get_mut("classes") else {
        return;
    };
    for (slot, value) in classes.iter_mut() {
        if let (Some(default), Value::String(text)) = (default_class(slot), &*value) {
            *value = Value::String(format!("{default} {text}"));
        }
    }
}

fn autoplay_toggle(options: &Map<String, Value>) -> Option<AutoplayToggle> {
    if !matches!(options.get("autoplay"), Some(Value::Bool(true))) {
        return None;
    }
    Some(AutoplayToggle {
        play_label: i18n_string(options, "play").unwrap_or_else(|| DEFAULT_PLAY_LABEL.to_string()),
        pause_label: i18n_string(options, "pause")
            .unwrap_or_else(|| DEFAULT_PAUSE_LABEL.to_string()),
    })
}

fn i18n_string(options: &Map<String, Value>, key: &str) -> Option<String> {
    options
        .get("i18n")?
        .as_object()?
        .get(key)?
        .as_str()
        .map(str::to_string)
}

fn skeleton_context(
    content: &ContentSpec,
    selector: &Selector,
    options: &Map<String, Value>,
    slides: Vec<String>,
    toggle: Option<&AutoplayToggle>,
) -> SkeletonContext {
    let mut wrapper_classes = "splide".to_string();
    if let Some(class) = &selector.class {
        wrapper_classes.push(' ');
        wrapper_classes.push_str(class);
    }

    SkeletonContext {
        wrapper_id: selector.id.clone(),
        wrapper_classes,
        role: options
            .get("role")
            .and_then(Value::as_str)
            .map(str::to_string),
        aria_label: options
            .get("label")
            .and_then(Value::as_str)
            .map(str::to_string),
        prefix: formatted_text_value(content.prefix.as_ref()),
        suffix: formatted_text_value(content.suffix.as_ref()),
        slides,
        toggle: toggle.map(|toggle| ToggleContext {
            play: toggle.play_label.clone(),
            pause: toggle.pause_label.clone(),
        }),
    }
}

fn formatted_text_value(text: Option<&carousel_config::FormattedText>) -> Option<String> {
    text.filter(|block| !block.is_blank())
        .map(|block| block.value.clone())
}

#[cfg(test)]
#[path = "assembler_tests.rs"]
mod tests;
