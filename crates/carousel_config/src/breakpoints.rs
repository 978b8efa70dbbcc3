//! Breakpoint table sub-builder.
//!
//! Breakpoints can be entered in one of two exclusive form modes: a simple
//! tabular mode with fixed columns, or a raw JSON object. Only the mode
//! that was active at save time is compiled; switching modes discards the
//! other mode's input. This is a deliberate, tested contract rather than an
//! accident - there is no automatic reconciliation between the two.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::coerce::coerce;
use crate::options::OptionGroup;
use crate::validation::{ValidationError, ValidationErrorType, ValidationResult};

/// Breakpoint input as submitted by the form, tagged by the active mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum BreakpointInput {
    /// Tabular mode with one row per breakpoint.
    Simple { rows: Vec<BreakpointRow> },
    /// Raw JSON object of breakpoint width to partial options.
    Json { text: String },
}

/// One row of the simple breakpoint table.
///
/// Columns mirror the admin form; empty strings mean "not set" and are
/// dropped by coercion.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BreakpointRow {
    /// Viewport width in pixels.
    #[serde(default)]
    pub breakpoint: String,
    #[serde(default)]
    pub per_page: String,
    #[serde(default)]
    pub per_move: String,
    #[serde(default)]
    pub gap: String,
    #[serde(default)]
    pub arrows: Option<bool>,
    #[serde(default)]
    pub pagination: Option<bool>,
}

impl BreakpointRow {
    fn is_blank(&self) -> bool {
        self.breakpoint.trim().is_empty()
            && self.per_page.trim().is_empty()
            && self.per_move.trim().is_empty()
            && self.gap.trim().is_empty()
            && self.arrows.is_none()
            && self.pagination.is_none()
    }
}

/// Compile the active breakpoint input mode into the stored breakpoint map.
///
/// Malformed JSON and invalid breakpoint keys are reported as field errors
/// on `result`; the returned map contains whatever compiled cleanly.
pub fn build_breakpoints(
    input: &BreakpointInput,
    result: &mut ValidationResult,
) -> BTreeMap<String, OptionGroup> {
    match input {
        BreakpointInput::Simple { rows } => build_simple_rows(rows, result),
        BreakpointInput::Json { text } => build_json_text(text, result),
    }
}

fn build_simple_rows(
    rows: &[BreakpointRow],
    result: &mut ValidationResult,
) -> BTreeMap<String, OptionGroup> {
    let mut breakpoints = BTreeMap::new();
    for (index, row) in rows.iter().enumerate() {
        if row.is_blank() {
            continue;
        }
        let Some(width) = parse_breakpoint_key(row.breakpoint.trim()) else {
            result.add_error(ValidationError {
                error_type: ValidationErrorType::InvalidValue,
                field_path: format!("options.breakpoints.items.{index}.breakpoint"),
                message: format!(
                    "Breakpoint '{}' is not a non-negative pixel width",
                    row.breakpoint
                ),
                suggestion: Some("Use a whole number of pixels, e.g. 768".to_string()),
            });
            continue;
        };

        let mut group = OptionGroup::new();
        insert_coerced(&mut group, "perPage", &row.per_page);
        insert_coerced(&mut group, "perMove", &row.per_move);
        insert_coerced(&mut group, "gap", &row.gap);
        if let Some(arrows) = row.arrows {
            group.insert("arrows".to_string(), Value::Bool(arrows));
        }
        if let Some(pagination) = row.pagination {
            group.insert("pagination".to_string(), Value::Bool(pagination));
        }

        // Rows with no surviving keys are dropped entirely.
        if !group.is_empty() {
            breakpoints.insert(width.to_string(), group);
        }
    }
    breakpoints
}

fn build_json_text(text: &str, result: &mut ValidationResult) -> BTreeMap<String, OptionGroup> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return BTreeMap::new();
    }

    let parsed: serde_json::Map<String, Value> = match serde_json::from_str(trimmed) {
        Ok(parsed) => parsed,
        Err(error) => {
            result.add_error(ValidationError {
                error_type: ValidationErrorType::SchemaViolation,
                field_path: "options.breakpoints.items".to_string(),
                message: format!("Breakpoints JSON is not a valid object: {error}"),
                suggestion: Some(
                    "Provide a JSON object of breakpoint width to options, e.g. {\"768\": {\"perPage\": 2}}".to_string(),
                ),
            });
            return BTreeMap::new();
        }
    };

    let mut breakpoints = BTreeMap::new();
    for (key, value) in parsed {
        let Some(width) = parse_breakpoint_key(key.trim()) else {
            result.add_error(ValidationError {
                error_type: ValidationErrorType::InvalidValue,
                field_path: format!("options.breakpoints.items.{key}"),
                message: format!("Breakpoint key '{key}' is not a non-negative pixel width"),
                suggestion: Some("Use a whole number of pixels, e.g. 768".to_string()),
            });
            continue;
        };
        let Value::Object(entries) = value else {
            result.add_error(ValidationError {
                error_type: ValidationErrorType::SchemaViolation,
                field_path: format!("options.breakpoints.items.{key}"),
                message: format!("Breakpoint '{key}' must map to an object of options"),
                suggestion: None,
            });
            continue;
        };
        let group = normalize_breakpoint_group(&entries);
        if !group.is_empty() {
            breakpoints.insert(width.to_string(), group);
        }
    }
    breakpoints
}

/// Normalize a stored breakpoint map for compilation.
///
/// Each entry's options run through coercion; entries left with no keys
/// are dropped. Used both when compiling and when re-normalizing records
/// that were stored by hand.
pub fn normalize_breakpoint_map(
    breakpoints: &BTreeMap<String, OptionGroup>,
) -> BTreeMap<String, OptionGroup> {
    breakpoints
        .iter()
        .filter_map(|(width, entries)| {
            let group = normalize_breakpoint_group(entries);
            if group.is_empty() {
                None
            } else {
                Some((width.clone(), group))
            }
        })
        .collect()
}

fn normalize_breakpoint_group(entries: &serde_json::Map<String, Value>) -> OptionGroup {
    let mut group = OptionGroup::new();
    for (key, raw) in entries {
        // Nested structures (e.g. a padding object) are kept as-is.
        if raw.is_object() {
            group.insert(key.clone(), raw.clone());
            continue;
        }
        if let Some(value) = coerce(raw) {
            group.insert(key.clone(), value);
        }
    }
    group
}

fn parse_breakpoint_key(key: &str) -> Option<u32> {
    if key.is_empty() || !key.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok()
}

fn insert_coerced(group: &mut OptionGroup, key: &str, raw: &str) {
    if let Some(value) = coerce(&Value::String(raw.to_string())) {
        group.insert(key.to_string(), value);
    }
}

#[cfg(test)]
#[path = "breakpoints_tests.rs"]
mod tests;
