//! Tests for the markup skeleton.

use super::*;

fn renderer() -> SkeletonRenderer {
    SkeletonRenderer::new().expect("template must register")
}

fn base_context() -> SkeletonContext {
    SkeletonContext {
        wrapper_classes: "splide splide--hero".to_string(),
        slides: vec!["<article>One</article>".to_string()],
        ..SkeletonContext::default()
    }
}

/// Verify the slider/track/list nesting and slide wrapping.
#[test]
fn test_basic_structure() {
    let markup = renderer().render(&base_context()).expect("render");

    assert!(markup.starts_with("<section class=\"splide splide--hero\">"));
    assert!(markup.contains("<div class=\"splide__slider\">"));
    assert!(markup.contains("<div class=\"splide__track\">"));
    assert!(markup.contains("<ul class=\"splide__list\">"));
    assert!(markup.contains("<li class=\"splide__slide\"><article>One</article></li>"));
    assert!(markup.trim_end().ends_with("</section>"));
}

/// Verify an id-selector carousel puts the id on the wrapper.
#[test]
fn test_wrapper_id() {
    let mut context = base_context();
    context.wrapper_id = Some("main-carousel".to_string());
    context.wrapper_classes = "splide".to_string();

    let markup = renderer().render(&context).expect("render");
    assert!(markup.starts_with("<section id=\"main-carousel\" class=\"splide\">"));
}

/// Verify role and label land as escaped wrapper attributes.
#[test]
fn test_role_and_label_attributes() {
    let mut context = base_context();
    context.role = Some("group".to_string());
    context.aria_label = Some("News & events".to_string());

    let markup = renderer().render(&context).expect("render");
    assert!(markup.contains("role=\"group\""));
    assert!(markup.contains("aria-label=\"News &amp; events\""));
}

/// Verify slide fragments are emitted unescaped.
#[test]
fn test_slides_are_raw_html() {
    let mut context = base_context();
    context.slides = vec!["<a href=\"/news\">News</a>".to_string()];

    let markup = renderer().render(&context).expect("render");
    assert!(markup.contains("<li class=\"splide__slide\"><a href=\"/news\">News</a></li>"));
}

/// Verify the toggle button renders only when requested.
#[test]
fn test_toggle_button() {
    let markup = renderer().render(&base_context()).expect("render");
    assert!(!markup.contains("splide__toggle"));

    let mut context = base_context();
    context.toggle = Some(ToggleContext {
        play: "Play".to_string(),
        pause: "Pause".to_string(),
    });
    let markup = renderer().render(&context).expect("render");
    assert!(markup.contains("<button class=\"splide__toggle\" type=\"button\">"));
    assert!(markup.contains("<span class=\"splide__toggle__play\">Play</span>"));
    assert!(markup.contains("<span class=\"splide__toggle__pause\">Pause</span>"));
}

/// Verify prefix and suffix blocks wrap the widget.
#[test]
fn test_prefix_and_suffix() {
    let mut context = base_context();
    context.prefix = Some("<h2>Latest</h2>".to_string());
    context.suffix = Some("<p>More soon.</p>".to_string());

    let markup = renderer().render(&context).expect("render");
    let prefix_at = markup
        .find("<div class=\"splide-carousel__prefix\"><h2>Latest</h2></div>")
        .expect("prefix present");
    let track_at = markup.find("splide__track").expect("track present");
    let suffix_at = markup
        .find("<div class=\"splide-carousel__suffix\"><p>More soon.</p></div>")
        .expect("suffix present");
    assert!(prefix_at < track_at && track_at < suffix_at);
}

/// Verify an empty slide list still produces the shell.
#[test]
fn test_empty_slide_list() {
    let mut context = base_context();
    context.slides.clear();

    let markup = renderer().render(&context).expect("render");
    assert!(markup.contains("<ul class=\"splide__list\">"));
    assert!(!markup.contains("splide__slide\""));
}
