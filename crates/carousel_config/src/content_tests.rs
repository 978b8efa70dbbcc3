//! Tests for the content schema types.

use super::*;

/// Verify semantics and source serialize to their lowercase names.
#[test]
fn test_enum_serialization() {
    assert_eq!(
        serde_json::to_string(&Semantics::Decorative).expect("serialize"),
        "\"decorative\""
    );
    assert_eq!(
        serde_json::to_string(&ContentSource::Node).expect("serialize"),
        "\"node\""
    );
}

/// Verify semantics defaults to content.
#[test]
fn test_semantics_default() {
    assert_eq!(Semantics::default(), Semantics::Content);
}

/// Verify blank detection on formatted text.
#[test]
fn test_formatted_text_blankness() {
    assert!(FormattedText::default().is_blank());
    assert!(FormattedText {
        value: "  \n ".to_string(),
        format: Some("full_html".to_string()),
    }
    .is_blank());
    assert!(!FormattedText {
        value: "<p>Intro</p>".to_string(),
        format: None,
    }
    .is_blank());
}

/// Verify a content spec round-trips through serde unchanged.
#[test]
fn test_content_spec_round_trip() {
    let mut spec = ContentSpec {
        semantics: Semantics::Decorative,
        source: Some(ContentSource::Node),
        ..ContentSpec::default()
    };
    spec.node.allowed_bundles.insert("article".to_string());
    spec.node.items.push(ItemRef {
        id: "41".to_string(),
        weight: -3,
    });
    spec.node
        .view_modes
        .insert("article".to_string(), "card".to_string());

    let serialized = serde_json::to_value(&spec).expect("serialize");
    let back: ContentSpec = serde_json::from_value(serialized).expect("deserialize");
    assert_eq!(back, spec);
}
