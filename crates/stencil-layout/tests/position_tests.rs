//! Integration tests for relative and absolute positioning and hidden nodes.

use stencil_layout::{LayoutEngine, LayoutTree, Rect, Size};
use stencil_tree::{AlignItems, DisplayMode, Element, JustifyContent, Position};

fn layout(root: &Element) -> LayoutTree<'_> {
    LayoutEngine::default()
        .with_pixel_snapping(false)
        .compute_layout(root, Size::new(300.0, 200.0))
        .expect("layout should succeed")
}

fn block(width: &str, height: &str) -> Element {
    Element::column(Vec::new()).size(width, height)
}

fn absolute(width: &str, height: &str) -> Element {
    block(width, height).position(Position::Absolute)
}

fn child_rects(tree: &LayoutTree<'_>) -> Vec<Rect> {
    tree.children(tree.root_id()).map(|node| node.rect).collect()
}

#[test]
fn test_absolute_left_top() {
    let root = Element::row(vec![absolute("50", "20").with_style(|style| {
        style.left = "10".to_string();
        style.top = "5".to_string();
    })])
    .size("300", "200");
    let tree = layout(&root);
    assert_eq!(child_rects(&tree), vec![Rect::new(10.0, 5.0, 50.0, 20.0)]);
}

#[test]
fn test_absolute_right_bottom_anchor_far_edges() {
    let root = Element::row(vec![absolute("50", "20").with_style(|style| {
        style.right = "10".to_string();
        style.bottom = "20".to_string();
    })])
    .size("300", "200");
    let tree = layout(&root);
    assert_eq!(child_rects(&tree), vec![Rect::new(240.0, 160.0, 50.0, 20.0)]);
}

#[test]
fn test_absolute_percent_insets_use_the_content_box() {
    let root = Element::row(vec![absolute("50", "20").with_style(|style| {
        style.left = "50%".to_string();
        style.top = "10%".to_string();
    })])
    .size("300", "200")
    .with_style(|style| style.padding = "10".to_string());
    let tree = layout(&root);
    // Content box is 280 × 180.
    assert_eq!(child_rects(&tree), vec![Rect::new(140.0, 18.0, 50.0, 20.0)]);
}

#[test]
fn test_absolute_without_insets_follows_container_alignment() {
    let root = Element::row(vec![absolute("50", "20")])
        .size("300", "200")
        .with_container(|container| {
            container.justify = JustifyContent::Center;
            container.align_items = AlignItems::Center;
        });
    let tree = layout(&root);
    assert_eq!(child_rects(&tree), vec![Rect::new(125.0, 90.0, 50.0, 20.0)]);
}

#[test]
fn test_opposing_insets_size_the_box() {
    let root = Element::row(vec![Element::column(Vec::new())
        .position(Position::Absolute)
        .with_style(|style| {
            style.left = "10".to_string();
            style.right = "20".to_string();
            style.top = "0".to_string();
            style.height = "30".to_string();
        })])
    .size("300", "200");
    let tree = layout(&root);
    assert_eq!(child_rects(&tree), vec![Rect::new(10.0, 0.0, 270.0, 30.0)]);
}

#[test]
fn test_relative_offset_shifts_without_moving_siblings() {
    let root = Element::row(vec![
        block("50", "20").position(Position::Relative).with_style(|style| {
            style.left = "5".to_string();
            style.top = "7".to_string();
        }),
        block("50", "20"),
    ]);
    let tree = layout(&root);
    let rects = child_rects(&tree);
    assert_eq!(rects[0], Rect::new(5.0, 7.0, 50.0, 20.0));
    assert_eq!(rects[1], Rect::new(50.0, 0.0, 50.0, 20.0));
}

#[test]
fn test_absolute_and_hidden_siblings_do_not_disturb_flow() {
    let with_extras = Element::row(vec![
        block("100", "50"),
        absolute("80", "80").with_style(|style| style.left = "0".to_string()),
        block("70", "40").with_style(|style| style.display = DisplayMode::None),
        block("100", "50"),
    ])
    .with_container(|container| {
        container.justify = JustifyContent::SpaceBetween;
        container.gap = "10".to_string();
    });
    let without = Element::row(vec![block("100", "50"), block("100", "50")]).with_container(
        |container| {
            container.justify = JustifyContent::SpaceBetween;
            container.gap = "10".to_string();
        },
    );

    let tree_with = layout(&with_extras);
    let tree_without = layout(&without);
    let with_rects = child_rects(&tree_with);
    let without_rects = child_rects(&tree_without);
    assert_eq!(with_rects[0], without_rects[0]);
    assert_eq!(with_rects[3], without_rects[1]);
    assert_eq!(tree_with.root().rect, tree_without.root().rect);
}

#[test]
fn test_hidden_subtree_is_emitted_empty_and_invisible() {
    let root = Element::row(vec![
        Element::column(vec![block("10", "10")])
            .with_style(|style| style.display = DisplayMode::None),
    ]);
    let tree = layout(&root);
    let hidden: Vec<_> = tree.iter().skip(1).map(|(_, node)| node).collect();
    assert_eq!(hidden.len(), 2);
    for node in hidden {
        assert!(!node.visible);
        assert_eq!(node.rect, Rect::default());
    }
}
