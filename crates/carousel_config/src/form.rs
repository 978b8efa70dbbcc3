//! Admin-form submission types and normalization.
//!
//! This is the typed boundary between the loosely-shaped values a form
//! posts and the configuration schema everything downstream operates on.
//! Normalization runs the coercion and sub-builder passes, applies the
//! semantics rule, validates the result, and either returns the
//! configuration ready to persist or every collected field error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::breakpoints::{build_breakpoints, BreakpointInput};
use crate::builders::{build_item_list, build_view_mode_map, ItemRow, ViewModeRow};
use crate::coerce::coerce;
use crate::config::{CarouselConfig, CarouselOptions};
use crate::content::{ContentSource, ContentSpec, FormattedText, Semantics};
use crate::errors::{ConfigError, ConfigResult};
use crate::options::{OptionGroup, OptionsSpec};
use crate::overrides::{build_class_overrides, build_i18n_overrides};
use crate::semantics::apply_semantics;
use crate::validation::{
    ValidationError, ValidationErrorType, ValidationResult, ValidationWarning,
};
use crate::validator::validate_config;

/// A raw admin-form submission for a carousel configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormSubmission {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default)]
    pub content: ContentInput,
    #[serde(default)]
    pub options: OptionsInput,
}

fn enabled_default() -> bool {
    true
}

/// Raw content section of a submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentInput {
    /// `"content"` or `"decorative"`; blank falls back to content.
    #[serde(default)]
    pub semantics: String,
    /// `"node"`, `"views"`, or blank for no source.
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub prefix: Option<FormattedText>,
    #[serde(default)]
    pub suffix: Option<FormattedText>,
    #[serde(default)]
    pub node: NodeInput,
    #[serde(default)]
    pub views: ViewsInput,
}

/// Raw node-source tables of a submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeInput {
    #[serde(default)]
    pub allowed_bundles: Vec<String>,
    #[serde(default)]
    pub items: Vec<ItemRow>,
    #[serde(default)]
    pub view_modes: BTreeMap<String, ViewModeRow>,
}

/// Raw views-source fields of a submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewsInput {
    #[serde(default)]
    pub query_id: String,
    #[serde(default)]
    pub display_id: String,
    #[serde(default)]
    pub selector: String,
}

/// Raw option groups of a submission.
///
/// Scalar groups arrive as maps of raw values straight off the form;
/// classes, i18n, and breakpoints arrive in their form-friendly table
/// shapes and go through their sub-builders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionsInput {
    #[serde(default)]
    pub general: OptionGroup,
    #[serde(default)]
    pub layout: OptionGroup,
    #[serde(default)]
    pub navigation: OptionGroup,
    #[serde(default)]
    pub autoplay: OptionGroup,
    #[serde(default)]
    pub lazy: OptionGroup,
    #[serde(default)]
    pub drag: OptionGroup,
    #[serde(default)]
    pub accessibility: OptionGroup,
    #[serde(default)]
    pub behavior: OptionGroup,
    #[serde(default, rename = "reducedMotion")]
    pub reduced_motion: OptionGroup,
    #[serde(default)]
    pub classes: BTreeMap<String, String>,
    #[serde(default)]
    pub i18n: BTreeMap<String, String>,
    #[serde(default)]
    pub breakpoints: Option<BreakpointInput>,
}

/// A submission normalized into a persistable configuration.
///
/// Advisory warnings accompany the configuration; they never block the
/// save and are surfaced to the editor as-is.
#[derive(Debug, Clone)]
pub struct NormalizedCarousel {
    pub config: CarouselConfig,
    pub warnings: Vec<ValidationWarning>,
}

/// Normalize a form submission into a carousel configuration.
///
/// Returns [`ConfigError::ValidationFailed`] with every collected field
/// error when the submission cannot be saved; warnings alone never fail.
pub fn normalize_submission(submission: &FormSubmission) -> ConfigResult<NormalizedCarousel> {
    let mut result = ValidationResult::new();

    let semantics = parse_semantics(&submission.content.semantics, &mut result);
    let source = parse_source(&submission.content.source, &mut result);

    let node = crate::content::NodeContent {
        allowed_bundles: submission
            .content
            .node
            .allowed_bundles
            .iter()
            .map(|bundle| bundle.trim().to_string())
            .filter(|bundle| !bundle.is_empty())
            .collect(),
        items: build_item_list(&submission.content.node.items),
        view_modes: build_view_mode_map(&submission.content.node.view_modes),
    };

    let selector = submission.content.views.selector.trim();
    let views = crate::content::ViewsContent {
        query_id: submission.content.views.query_id.trim().to_string(),
        display_id: submission.content.views.display_id.trim().to_string(),
        selector: if selector.is_empty() {
            None
        } else {
            Some(selector.to_string())
        },
    };

    let mut accessibility = normalize_group(&submission.options.accessibility);
    apply_semantics(semantics, &mut accessibility);

    let breakpoints = submission
        .options
        .breakpoints
        .as_ref()
        .map(|input| build_breakpoints(input, &mut result))
        .unwrap_or_default();

    let widget = OptionsSpec {
        general: normalize_group(&submission.options.general),
        layout: normalize_group(&submission.options.layout),
        navigation: normalize_group(&submission.options.navigation),
        autoplay: normalize_group(&submission.options.autoplay),
        lazy: normalize_group(&submission.options.lazy),
        drag: normalize_group(&submission.options.drag),
        accessibility,
        behavior: normalize_group(&submission.options.behavior),
        reduced_motion: normalize_group(&submission.options.reduced_motion),
        classes: build_class_overrides(&submission.options.classes),
        i18n: build_i18n_overrides(&submission.options.i18n),
        breakpoints,
    };

    let config = CarouselConfig {
        id: submission.id.trim().to_string(),
        label: submission.label.trim().to_string(),
        enabled: submission.enabled,
        options: CarouselOptions {
            content: ContentSpec {
                semantics,
                source,
                prefix: keep_formatted(&submission.content.prefix),
                suffix: keep_formatted(&submission.content.suffix),
                node,
                views,
            },
            widget,
        },
    };

    result.merge(validate_config(&config));

    if !result.is_valid() {
        return Err(ConfigError::from_validation_errors(result.errors));
    }

    debug!(
        id = %config.id,
        warnings = result.warnings.len(),
        "normalized carousel submission"
    );
    Ok(NormalizedCarousel {
        config,
        warnings: result.warnings,
    })
}

fn parse_semantics(raw: &str, result: &mut ValidationResult) -> Semantics {
    match raw.trim() {
        "" | "content" => Semantics::Content,
        "decorative" => Semantics::Decorative,
        other => {
            result.add_error(ValidationError {
                error_type: ValidationErrorType::SchemaViolation,
                field_path: "content.semantics".to_string(),
                message: format!("Unknown semantics '{other}'"),
                suggestion: Some("Use 'content' or 'decorative'".to_string()),
            });
            Semantics::Content
        }
    }
}

fn parse_source(raw: &str, result: &mut ValidationResult) -> Option<ContentSource> {
    match raw.trim() {
        "" => None,
        "node" => Some(ContentSource::Node),
        "views" => Some(ContentSource::Views),
        other => {
            result.add_error(ValidationError {
                error_type: ValidationErrorType::SchemaViolation,
                field_path: "content.source".to_string(),
                message: format!("Unknown content source '{other}'"),
                suggestion: Some("Use 'node' or 'views'".to_string()),
            });
            None
        }
    }
}

fn normalize_group(group: &OptionGroup) -> OptionGroup {
    let mut normalized = OptionGroup::new();
    for (key, raw) in group {
        if let Some(value) = coerce(raw) {
            normalized.insert(key.clone(), value);
        }
    }
    normalized
}

fn keep_formatted(block: &Option<FormattedText>) -> Option<FormattedText> {
    block.as_ref().filter(|text| !text.is_blank()).cloned()
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
