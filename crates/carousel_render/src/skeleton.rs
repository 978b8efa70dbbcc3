//! Markup skeleton for the carousel wrapper.
//!
//! The structure mirrors what the Splide library expects: a wrapper
//! carrying the mount-point class or id, a slider/track/list nesting, one
//! list item per slide, an optional autoplay toggle button, and optional
//! prefix/suffix blocks around the widget.

use handlebars::Handlebars;
use serde::Serialize;

use crate::errors::{RenderError, RenderResult};

const SKELETON_TEMPLATE_NAME: &str = "carousel_skeleton";

const SKELETON_TEMPLATE: &str = "\
<section{{#if wrapper_id}} id=\"{{wrapper_id}}\"{{/if}} class=\"{{wrapper_classes}}\"\
{{#if role}} role=\"{{role}}\"{{/if}}{{#if aria_label}} aria-label=\"{{aria_label}}\"{{/if}}>
{{#if prefix}}  <div class=\"splide-carousel__prefix\">{{{prefix}}}</div>
{{/if}}\
  <div class=\"splide__slider\">
    <div class=\"splide__track\">
      <ul class=\"splide__list\">
{{#each slides}}        <li class=\"splide__slide\">{{{this}}}</li>
{{/each}}\
      </ul>
    </div>
  </div>
{{#if toggle}}  <button class=\"splide__toggle\" type=\"button\">\
<span class=\"splide__toggle__play\">{{toggle.play}}</span>\
<span class=\"splide__toggle__pause\">{{toggle.pause}}</span></button>
{{/if}}\
{{#if suffix}}  <div class=\"splide-carousel__suffix\">{{{suffix}}}</div>
{{/if}}\
</section>
";

/// Template context for one carousel skeleton.
///
/// `prefix`, `suffix`, and `slides` carry trusted, already-rendered HTML
/// fragments; labels and attributes are escaped by the template.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SkeletonContext {
    pub wrapper_id: Option<String>,
    pub wrapper_classes: String,
    pub role: Option<String>,
    pub aria_label: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub slides: Vec<String>,
    pub toggle: Option<ToggleContext>,
}

/// Play/pause labels of the autoplay toggle button.
#[derive(Debug, Clone, Serialize)]
pub struct ToggleContext {
    pub play: String,
    pub pause: String,
}

/// Renders carousel skeletons through a registered Handlebars template.
pub struct SkeletonRenderer {
    registry: Handlebars<'static>,
}

impl SkeletonRenderer {
    pub fn new() -> RenderResult<Self> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string(SKELETON_TEMPLATE_NAME, SKELETON_TEMPLATE)
            .map_err(|error| RenderError::Template {
                reason: error.to_string(),
            })?;
        Ok(Self { registry })
    }

    /// Render the skeleton for one carousel.
    pub fn render(&self, context: &SkeletonContext) -> RenderResult<String> {
        self.registry
            .render(SKELETON_TEMPLATE_NAME, context)
            .map_err(|error| RenderError::Template {
                reason: error.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "skeleton_tests.rs"]
mod tests;
