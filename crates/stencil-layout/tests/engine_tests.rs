//! Integration tests for the engine facade: limits, units, snapping and output.

use stencil_layout::{
    ApproximateTextMeasure, LayoutEngine, LayoutError, LayoutTree, Rect, ResourceLimits, Size,
};
use std::time::{Duration, Instant};

use stencil_tree::{AlignItems, Element, FlexWrap};

fn engine() -> LayoutEngine {
    LayoutEngine::default().with_pixel_snapping(false)
}

fn layout(root: &Element) -> LayoutTree<'_> {
    engine()
        .compute_layout(root, Size::new(300.0, 200.0))
        .expect("layout should succeed")
}

fn block(width: &str, height: &str) -> Element {
    Element::column(Vec::new()).size(width, height)
}

fn nested(depth: usize) -> Element {
    (0..depth).fold(block("10", "10"), |inner, _| Element::column(vec![inner]))
}

fn first_child<'t>(tree: &'t LayoutTree<'_>) -> Rect {
    tree.children(tree.root_id())
        .next()
        .expect("root should have a child")
        .rect
}

#[test]
fn test_root_fills_canvas_width() {
    let root = Element::column(vec![block("10", "40")]);
    let tree = layout(&root);
    assert_eq!(tree.root().rect, Rect::new(0.0, 0.0, 300.0, 40.0));
}

#[test]
fn test_root_margins_offset_the_root() {
    let root = Element::column(vec![block("10", "40")])
        .with_style(|style| style.margin = "5 10".to_string());
    let tree = layout(&root);
    assert_eq!(tree.root().rect, Rect::new(10.0, 5.0, 280.0, 40.0));
}

#[test]
fn test_nesting_limit_is_enforced() {
    let limits = ResourceLimits {
        max_nesting_depth: 3,
        ..ResourceLimits::default()
    };
    let engine = LayoutEngine::new(limits, ApproximateTextMeasure::default());
    let shallow = nested(3);
    assert!(engine.compute_layout(&shallow, Size::new(100.0, 100.0)).is_ok());

    let deep = nested(4);
    assert_eq!(
        engine.compute_layout(&deep, Size::new(100.0, 100.0)),
        Err(LayoutError::NestingTooDeep { depth: 4, limit: 3 })
    );
}

#[test]
fn test_line_limit_is_enforced() {
    let limits = ResourceLimits {
        max_flex_lines: 2,
        ..ResourceLimits::default()
    };
    let engine = LayoutEngine::new(limits, ApproximateTextMeasure::default());
    let root = Element::row(vec![block("100", "10"), block("100", "10"), block("100", "10")])
        .width("100")
        .with_container(|container| container.wrap = FlexWrap::Wrap);
    assert_eq!(
        engine.compute_layout(&root, Size::new(300.0, 300.0)),
        Err(LayoutError::TooManyFlexLines { lines: 3, limit: 2 })
    );
}

#[test]
fn test_layout_is_idempotent() {
    let root = Element::row(vec![
        Element::text("grow me").grow(1.0),
        Element::column(vec![Element::text("nested text that wraps")]).width("40%"),
    ])
    .with_container(|container| container.wrap = FlexWrap::Wrap);
    let engine = LayoutEngine::default();
    let first = engine.compute_layout(&root, Size::new(320.0, 240.0));
    let second = engine.compute_layout(&root, Size::new(320.0, 240.0));
    assert_eq!(first, second);
}

#[test]
fn test_pixel_snapping_keeps_shared_edges() {
    let root = Element::row(vec![
        Element::column(Vec::new()).height("10").grow(1.0),
        Element::column(Vec::new()).height("10").grow(1.0),
        Element::column(Vec::new()).height("10").grow(1.0),
    ]);
    let tree = LayoutEngine::default()
        .compute_layout(&root, Size::new(100.0, 100.0))
        .expect("layout should succeed");
    let spans: Vec<(f32, f32)> = tree
        .children(tree.root_id())
        .map(|node| (node.rect.x, node.rect.width))
        .collect();
    assert_eq!(spans, vec![(0.0, 33.0), (33.0, 34.0), (67.0, 33.0)]);
}

#[test]
fn test_percent_and_em_units() {
    let percent = Element::row(vec![block("50%", "10")]);
    assert_eq!(first_child(&layout(&percent)).width, 150.0);

    let em = Element::row(vec![block("2em", "10").with_style(|style| style.font_size = Some(20.0))]);
    assert_eq!(first_child(&layout(&em)).width, 40.0);

    let inherited = Element::row(vec![block("2em", "10")])
        .with_style(|style| style.font_size = Some(12.0));
    assert_eq!(first_child(&layout(&inherited)).width, 24.0);
}

fn rects(tree: &LayoutTree<'_>) -> Vec<Rect> {
    tree.iter().map(|(_, node)| node.rect).collect()
}

#[test]
fn test_percent_height_of_content_sized_parent_is_auto() {
    let root = Element::column(vec![Element::column(vec![
        block("10", "100"),
        block("10", "50%"),
    ])]);
    let tree = layout(&root);
    let rects = rects(&tree);
    assert_eq!(rects[1].height, 100.0);
    assert_eq!(rects[2], Rect::new(0.0, 0.0, 10.0, 100.0));
    assert_eq!(rects[3], Rect::new(0.0, 100.0, 10.0, 0.0));
}

#[test]
fn test_percent_height_resolves_against_definite_parents() {
    let explicit = Element::column(vec![block("10", "50%")]).height("100");
    assert_eq!(first_child(&layout(&explicit)).height, 50.0);

    // The stretched column's height is the row's explicit height.
    let stretched =
        Element::row(vec![Element::column(vec![block("10", "50%")])]).height("80");
    let tree = layout(&stretched);
    assert_eq!(rects(&tree)[2].height, 40.0);
}

#[test]
fn test_deep_baseline_nesting_lays_out_quickly() {
    let depth = 40;
    let root = (0..depth).fold(Element::text("base"), |inner, level| {
        let children = vec![inner, Element::text("side")];
        let container = if level % 2 == 0 {
            Element::row(children)
        } else {
            Element::column(children)
        };
        container.with_container(|container| container.align_items = AlignItems::Baseline)
    });
    let started = Instant::now();
    let tree = layout(&root);
    assert!(
        started.elapsed() < Duration::from_secs(5),
        "took {:?}",
        started.elapsed()
    );
    assert_eq!(tree.len(), 1 + 2 * depth);
}

#[test]
fn test_malformed_dimension_degrades_to_auto() {
    let root = Element::row(vec![block("banana", "10").grow(1.0)]);
    assert_eq!(first_child(&layout(&root)).width, 300.0);
}

#[test]
fn test_padding_and_border_offset_children() {
    let root = Element::column(vec![Element::column(Vec::new()).height("20")])
        .width("300")
        .with_style(|style| {
            style.padding = "10".to_string();
            style.border.shorthand = Some("2px solid #333".to_string());
        });
    let tree = layout(&root);
    let child = tree.root().children[0];
    assert_eq!(tree.get(child).map(|node| node.rect), Some(Rect::new(0.0, 0.0, 276.0, 20.0)));
    assert_eq!(tree.absolute_rect(child), Some(Rect::new(12.0, 12.0, 276.0, 20.0)));
    assert_eq!(tree.root().rect.height, 44.0);
}

#[test]
fn test_aspect_ratio_fills_the_missing_axis() {
    let root = Element::column(vec![Element::image("logo.png", Some(200.0), Some(100.0)).width("100")]);
    let image = first_child(&layout(&root));
    assert_eq!((image.width, image.height), (100.0, 50.0));

    let explicit = Element::row(vec![
        block("120", "").with_style(|style| style.aspect_ratio = Some(2.0)),
    ])
    .with_container(|container| container.align_items = AlignItems::Start);
    let boxed = first_child(&layout(&explicit));
    assert_eq!((boxed.width, boxed.height), (120.0, 60.0));
}

#[test]
fn test_min_height_wins_over_max_height() {
    let root = Element::column(vec![Element::column(Vec::new()).with_style(|style| {
        style.min_height = "50".to_string();
        style.max_height = "20".to_string();
    })]);
    assert_eq!(first_child(&layout(&root)).height, 50.0);
}

#[test]
fn test_text_nodes_carry_their_lines() {
    let root = Element::column(vec![Element::text("one\ntwo")]);
    let tree = layout(&root);
    let text = tree
        .children(tree.root_id())
        .next()
        .and_then(|node| node.text.as_ref())
        .expect("text layout");
    assert_eq!(text.lines, vec!["one".to_string(), "two".to_string()]);
    assert!((text.line_height - 19.2).abs() < 0.01);
}

#[test]
fn test_json_dump_names_kinds() {
    let root = Element::row(vec![Element::text("hi")]);
    let tree = layout(&root);
    let json = tree.to_json().expect("tree should serialize");
    assert!(json.contains("\"kind\": \"container\""), "{json}");
    assert!(json.contains("\"kind\": \"text\""), "{json}");
    assert!(json.contains("\"hi\""), "{json}");
}

#[test]
fn test_parent_links_and_depths() {
    let root = Element::column(vec![Element::row(vec![block("10", "10")])]);
    let tree = layout(&root);
    for (id, node) in tree.iter() {
        assert_eq!(node.depth, id.index());
        if let Some(parent) = node.parent {
            assert!(tree.get(parent).is_some_and(|parent| parent.children.contains(&id)));
        }
    }
    assert_eq!(tree.len(), 3);
}
