//! Integration tests for the element tree model.

use stencil_tree::{
    AlignItems, CodeKind, Element, ElementKind, FlexDirection, FlexWrap, JustifyContent,
    Orientation, Position,
};

fn parse(json: &str) -> Element {
    serde_json::from_str(json).expect("template JSON should deserialize")
}

#[test]
fn test_deserialize_nested_container() {
    let root = parse(
        r#"{
            "type": "container",
            "direction": "column",
            "wrap": "wrap",
            "justify": "space-between",
            "style": { "width": "300", "padding": "10 20" },
            "children": [
                { "type": "text", "content": "Hello", "style": { "grow": 1 } },
                { "type": "divider", "orientation": "vertical" },
                { "type": "code", "kind": "barcode", "data": "12345" }
            ]
        }"#,
    );

    let container = root.as_container().expect("root should be a container");
    assert_eq!(container.direction, FlexDirection::Column);
    assert_eq!(container.wrap, FlexWrap::Wrap);
    assert_eq!(container.justify, JustifyContent::SpaceBetween);
    assert_eq!(root.style.width, "300");
    assert_eq!(root.style.padding, "10 20");
    assert_eq!(root.children().len(), 3);

    assert_eq!(root.children()[0].kind_label(), "text");
    assert!((root.children()[0].style.grow - 1.0).abs() < f32::EPSILON);
    match &root.children()[1].kind {
        ElementKind::Divider(divider) => assert_eq!(divider.orientation, Orientation::Vertical),
        other => panic!("expected divider, got {other:?}"),
    }
    match &root.children()[2].kind {
        ElementKind::Code(code) => {
            assert_eq!(code.kind, CodeKind::Barcode);
            assert_eq!(code.natural_size(), (200.0, 80.0));
        }
        other => panic!("expected code, got {other:?}"),
    }
}

#[test]
fn test_unknown_keyword_in_json_degrades_to_default() {
    let root = parse(r#"{ "type": "container", "alignItems": "sideways", "justify": "CENTER" }"#);
    let container = root.as_container().expect("root should be a container");
    assert_eq!(container.align_items, AlignItems::Stretch);
    assert_eq!(container.justify, JustifyContent::Center);
}

#[test]
fn test_style_defaults() {
    let text = parse(r#"{ "type": "text", "content": "x" }"#);
    assert!((text.style.shrink - 1.0).abs() < f32::EPSILON);
    assert!((text.style.opacity - 1.0).abs() < f32::EPSILON);
    assert_eq!(text.style.position, Position::Static);
    assert!(text.style.border.is_empty());
    assert!(text.is_in_flow());
}

#[test]
fn test_builders() {
    let root = Element::row(vec![
        Element::text("a").width("40").grow(2.0),
        Element::image("logo.png", Some(64.0), Some(32.0)).position(Position::Absolute),
    ])
    .with_container(|container| container.column_gap = Some("8".to_string()));

    assert_eq!(root.children()[0].style.width, "40");
    assert!(root.children()[1].is_absolute());
    assert!(!root.children()[1].is_in_flow());
    assert_eq!(
        root.as_container().and_then(|c| c.column_gap.as_deref()),
        Some("8")
    );
}
