//! Cross-field validation of carousel configurations.
//!
//! All rules are evaluated in one pass and collected, so a single
//! submission reports every problem at once. Hard rules produce blocking
//! errors; the two advisory rules (speed versus interval, autoplay without
//! a pause affordance) produce warnings that never block a save.
//!
//! Rules fire on explicitly set values only: an absent option key falls
//! back to the client widget's own default, which satisfies every rule.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

use crate::config::CarouselConfig;
use crate::content::{ContentSource, Semantics};
use crate::options::OptionsSpec;
use crate::validation::{
    ValidationError, ValidationErrorType, ValidationResult, ValidationWarning,
};

static MACHINE_NAME: OnceLock<Regex> = OnceLock::new();

fn machine_name_pattern() -> &'static Regex {
    MACHINE_NAME.get_or_init(|| {
        Regex::new("^[a-z0-9_]+$").expect("machine name pattern is a valid regex")
    })
}

/// Validate a carousel configuration.
///
/// Returns every error and warning found; callers block persistence when
/// `is_valid()` is false and surface warnings without blocking.
pub fn validate_config(config: &CarouselConfig) -> ValidationResult {
    let mut result = ValidationResult::new();

    validate_identity(config, &mut result);
    validate_content(config, &mut result);
    validate_accessibility(config, &mut result);
    validate_navigation(config.widget_options(), &mut result);
    validate_numeric_rules(config.widget_options(), &mut result);
    validate_type_rules(config.widget_options(), &mut result);
    validate_autoplay(config.widget_options(), &mut result);
    validate_breakpoint_keys(config.widget_options(), &mut result);

    result
}

fn validate_identity(config: &CarouselConfig, result: &mut ValidationResult) {
    if config.id.is_empty() || !machine_name_pattern().is_match(&config.id) {
        result.add_error(ValidationError {
            error_type: ValidationErrorType::InvalidValue,
            field_path: "id".to_string(),
            message: format!("'{}' is not a valid machine name", config.id),
            suggestion: Some("Use lowercase letters, digits, and underscores".to_string()),
        });
    }
    if config.label.trim().is_empty() {
        result.add_error(ValidationError {
            error_type: ValidationErrorType::RequiredFieldMissing,
            field_path: "label".to_string(),
            message: "A label is required".to_string(),
            suggestion: None,
        });
    }
}

fn validate_content(config: &CarouselConfig, result: &mut ValidationResult) {
    let content = config.content();
    match content.source {
        Some(ContentSource::Node) => {
            if content.node.allowed_bundles.is_empty() {
                result.add_error(ValidationError {
                    error_type: ValidationErrorType::RequiredFieldMissing,
                    field_path: "content.node.allowed_bundles".to_string(),
                    message: "Select at least one content type".to_string(),
                    suggestion: None,
                });
            }
            if content.node.items.is_empty() {
                result.add_error(ValidationError {
                    error_type: ValidationErrorType::RequiredFieldMissing,
                    field_path: "content.node.items".to_string(),
                    message: "Select at least one content item".to_string(),
                    suggestion: None,
                });
            }
        }
        Some(ContentSource::Views) => {
            if content.views.query_id.trim().is_empty() {
                result.add_error(ValidationError {
                    error_type: ValidationErrorType::RequiredFieldMissing,
                    field_path: "content.views.query_id".to_string(),
                    message: "A view machine name is required".to_string(),
                    suggestion: None,
                });
            }
            if content.views.display_id.trim().is_empty() {
                result.add_error(ValidationError {
                    error_type: ValidationErrorType::RequiredFieldMissing,
                    field_path: "content.views.display_id".to_string(),
                    message: "A view display name is required".to_string(),
                    suggestion: None,
                });
            }
        }
        None => {}
    }
}

fn validate_accessibility(config: &CarouselConfig, result: &mut ValidationResult) {
    let options = config.widget_options();

    // The persisted role must match the semantics derivation.
    let role = options.lookup("role");
    match config.content().semantics {
        Semantics::Decorative => {
            if role != Some(Value::String("group".to_string())) {
                result.add_error(ValidationError {
                    error_type: ValidationErrorType::ConstraintViolation,
                    field_path: "options.accessibility.role".to_string(),
                    message: "Decorative carousels must carry role 'group'".to_string(),
                    suggestion: None,
                });
            }
        }
        Semantics::Content => {
            if role.is_some() {
                result.add_error(ValidationError {
                    error_type: ValidationErrorType::ConstraintViolation,
                    field_path: "options.accessibility.role".to_string(),
                    message: "Content carousels must not carry an explicit role".to_string(),
                    suggestion: None,
                });
            }
        }
    }

    // Coercion never keeps blank values, so presence means non-blank.
    let has_label = options.lookup("label").is_some();
    let has_labelledby = options.lookup("labelledby").is_some();
    if !has_label && !has_labelledby {
        result.add_error(ValidationError {
            error_type: ValidationErrorType::RequiredFieldMissing,
            field_path: "options.accessibility.label".to_string(),
            message: "Provide an accessible label or a labelledby reference".to_string(),
            suggestion: Some("Fill in either 'label' or 'labelledby'".to_string()),
        });
    }
}

/// At least one way to move the carousel must remain active.
///
/// Arrows, pagination, and drag default to on; wheel and keyboard default
/// to off. A method counts as active unless it is explicitly disabled.
fn validate_navigation(options: &OptionsSpec, result: &mut ValidationResult) {
    let arrows = options.lookup_bool("arrows").unwrap_or(true);
    let pagination = options.lookup_bool("pagination").unwrap_or(true);
    let drag = match options.lookup("drag") {
        None => true,
        Some(Value::Bool(flag)) => flag,
        // "free" and other non-false modes keep dragging available.
        Some(_) => true,
    };
    let wheel = match options.lookup("wheel") {
        Some(Value::Bool(flag)) => flag,
        Some(_) => true,
        None => false,
    };
    let keyboard = match options.lookup("keyboard") {
        Some(Value::Bool(flag)) => flag,
        Some(_) => true,
        None => false,
    };

    if !(arrows || pagination || drag || wheel || keyboard) {
        result.add_error(ValidationError {
            error_type: ValidationErrorType::ConstraintViolation,
            field_path: "options.navigation".to_string(),
            message: "At least one navigation method must stay active".to_string(),
            suggestion: Some(
                "Enable arrows, pagination, drag, wheel, or keyboard navigation".to_string(),
            ),
        });
    }
}

fn validate_numeric_rules(options: &OptionsSpec, result: &mut ValidationResult) {
    require_min(options, "perPage", 1.0, "options.general.perPage", result);
    require_min(options, "perMove", 1.0, "options.general.perMove", result);
    require_min(options, "start", 0.0, "options.general.start", result);

    // Gap accepts CSS sizes; only numeric gaps are range-checked.
    if let Some(Value::Number(gap)) = options.lookup("gap") {
        if gap.as_f64().unwrap_or(0.0) < 0.0 {
            result.add_error(ValidationError {
                error_type: ValidationErrorType::InvalidValue,
                field_path: "options.general.gap".to_string(),
                message: "A numeric gap must not be negative".to_string(),
                suggestion: None,
            });
        }
    }
}

fn require_min(
    options: &OptionsSpec,
    key: &str,
    minimum: f64,
    field_path: &str,
    result: &mut ValidationResult,
) {
    if let Some(Value::Number(number)) = options.lookup(key) {
        if number.as_f64().unwrap_or(minimum) < minimum {
            result.add_error(ValidationError {
                error_type: ValidationErrorType::InvalidValue,
                field_path: field_path.to_string(),
                message: format!("{key} must be at least {minimum}"),
                suggestion: None,
            });
        }
    }
}

fn validate_type_rules(options: &OptionsSpec, result: &mut ValidationResult) {
    let carousel_type = match options.lookup("type") {
        Some(Value::String(kind)) => kind,
        _ => return,
    };

    if carousel_type == "fade" {
        if let Some(per_page) = options.lookup_i64("perPage") {
            if per_page != 1 {
                result.add_error(ValidationError {
                    error_type: ValidationErrorType::ConstraintViolation,
                    field_path: "options.general.perPage".to_string(),
                    message: "Fade carousels must show exactly one slide per page".to_string(),
                    suggestion: Some("Set perPage to 1 or change the carousel type".to_string()),
                });
            }
        }
    }

    if carousel_type == "loop" && options.lookup_bool("rewind") == Some(true) {
        result.add_error(ValidationError {
            error_type: ValidationErrorType::ConstraintViolation,
            field_path: "options.general.rewind".to_string(),
            message: "Loop carousels must not enable rewind".to_string(),
            suggestion: Some("Disable rewind or use the slide type".to_string()),
        });
    }
}

fn validate_autoplay(options: &OptionsSpec, result: &mut ValidationResult) {
    if options.lookup_bool("autoplay") != Some(true) {
        return;
    }

    let interval = options.lookup("interval").and_then(|value| value.as_f64());
    if let Some(interval) = interval {
        if interval <= 0.0 {
            result.add_error(ValidationError {
                error_type: ValidationErrorType::InvalidValue,
                field_path: "options.autoplay.interval".to_string(),
                message: "Autoplay requires an interval greater than zero".to_string(),
                suggestion: None,
            });
        }
    }

    // Advisory only: a transition as slow as the interval leaves no pause
    // between slides.
    let speed = options
        .lookup("speed")
        .and_then(|value| value.as_f64())
        .unwrap_or(400.0);
    let effective_interval = interval.unwrap_or(5000.0);
    if effective_interval > 0.0 && speed >= effective_interval {
        result.add_warning(ValidationWarning {
            field_path: "options.general.speed".to_string(),
            message: "Transition speed is not shorter than the autoplay interval".to_string(),
            recommendation: Some("Use a speed well below the interval".to_string()),
        });
    }

    // Advisory only: autoplaying content that never pauses is an
    // accessibility concern.
    let pause_on_hover = options.lookup_bool("pauseOnHover").unwrap_or(true);
    let pause_on_focus = options.lookup_bool("pauseOnFocus").unwrap_or(true);
    if !pause_on_hover && !pause_on_focus {
        result.add_warning(ValidationWarning {
            field_path: "options.autoplay.pauseOnHover".to_string(),
            message: "Autoplay without pause on hover or focus is hard to use".to_string(),
            recommendation: Some("Keep at least one pause behavior enabled".to_string()),
        });
    }
}

fn validate_breakpoint_keys(options: &OptionsSpec, result: &mut ValidationResult) {
    for key in options.breakpoints.keys() {
        let valid = !key.is_empty()
            && key.bytes().all(|byte| byte.is_ascii_digit())
            && key.parse::<u32>().is_ok();
        if !valid {
            result.add_error(ValidationError {
                error_type: ValidationErrorType::InvalidValue,
                field_path: format!("options.breakpoints.{key}"),
                message: format!("Breakpoint key '{key}' is not a non-negative pixel width"),
                suggestion: Some("Use a whole number of pixels, e.g. 768".to_string()),
            });
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
