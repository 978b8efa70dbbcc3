//! Tests for the options compiler.

use super::*;
use crate::options::OptionsSpec;
use serde_json::json;

fn group(entries: &[(&str, Value)]) -> crate::options::OptionGroup {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

/// Verify scalar groups flatten into the top level with coercion applied.
#[test]
fn test_scalar_groups_flatten() {
    let options = OptionsSpec {
        general: group(&[("type", json!("loop")), ("perPage", json!("3"))]),
        navigation: group(&[("arrows", json!("false"))]),
        ..OptionsSpec::default()
    };

    let compiled = compile_options(&options);
    assert_eq!(compiled.get("type"), Some(&json!("loop")));
    assert_eq!(compiled.get("perPage"), Some(&json!(3)));
    assert_eq!(compiled.get("arrows"), Some(&json!(false)));
}

/// Verify empty values never reach the output.
#[test]
fn test_output_is_sparse() {
    let options = OptionsSpec {
        general: group(&[("gap", json!("")), ("padding", json!(null))]),
        ..OptionsSpec::default()
    };

    let compiled = compile_options(&options);
    assert!(compiled.is_empty());
}

/// Verify later groups win for colliding keys.
#[test]
fn test_later_group_overrides_earlier() {
    let options = OptionsSpec {
        navigation: group(&[("focusableNodes", json!("button"))]),
        accessibility: group(&[("focusableNodes", json!("a, button"))]),
        ..OptionsSpec::default()
    };

    let compiled = compile_options(&options);
    assert_eq!(compiled.get("focusableNodes"), Some(&json!("a, button")));
}

/// Verify reducedMotion stays nested instead of flattening.
#[test]
fn test_reduced_motion_stays_nested() {
    let options = OptionsSpec {
        reduced_motion: group(&[("speed", json!("0")), ("autoplay", json!("false"))]),
        ..OptionsSpec::default()
    };

    let compiled = compile_options(&options);
    assert_eq!(
        compiled.get("reducedMotion"),
        Some(&json!({"speed": 0, "autoplay": false}))
    );
    assert!(compiled.get("speed").is_none());
}

/// Verify class and i18n tables land under their own nested keys.
#[test]
fn test_tables_stay_nested() {
    let mut classes = std::collections::BTreeMap::new();
    classes.insert("arrow".to_string(), "btn".to_string());
    let mut i18n = std::collections::BTreeMap::new();
    i18n.insert("play".to_string(), "Go".to_string());

    let options = OptionsSpec {
        classes,
        i18n,
        ..OptionsSpec::default()
    };

    let compiled = compile_options(&options);
    assert_eq!(compiled.get("classes"), Some(&json!({"arrow": "btn"})));
    assert_eq!(compiled.get("i18n"), Some(&json!({"play": "Go"})));
}

/// Verify breakpoints compile to the nested map shape.
#[test]
fn test_breakpoints_compile_nested() {
    let mut breakpoints = std::collections::BTreeMap::new();
    breakpoints.insert(
        "768".to_string(),
        group(&[("perPage", json!("2")), ("arrows", json!(true))]),
    );

    let options = OptionsSpec {
        breakpoints,
        ..OptionsSpec::default()
    };

    let compiled = compile_options(&options);
    assert_eq!(
        compiled.get("breakpoints"),
        Some(&json!({"768": {"perPage": 2, "arrows": true}}))
    );
}

/// Verify compilation is deterministic across repeated invocations.
#[test]
fn test_compile_is_deterministic() {
    let options = OptionsSpec {
        general: group(&[("type", json!("fade")), ("speed", json!("400"))]),
        autoplay: group(&[("autoplay", json!("true"))]),
        reduced_motion: group(&[("autoplay", json!(false))]),
        ..OptionsSpec::default()
    };

    let first = serde_json::to_string(&compile_options(&options)).expect("serialize");
    let second = serde_json::to_string(&compile_options(&options)).expect("serialize");
    assert_eq!(first, second);
}

/// Verify an empty spec compiles to an empty object.
#[test]
fn test_empty_spec_compiles_empty() {
    assert!(compile_options(&OptionsSpec::default()).is_empty());
}
