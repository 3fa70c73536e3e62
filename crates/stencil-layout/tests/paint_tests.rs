//! Integration tests for the painter and the debug overlay.

use stencil_layout::{
    DisplayCommand, LayoutEngine, LayoutError, LayoutTree, Painter, Rect, ResourceLimits, Size,
    debug_overlay,
};
use stencil_tree::{CodeKind, DisplayMode, Element, Orientation};

fn layout(root: &Element) -> LayoutTree<'_> {
    LayoutEngine::default()
        .with_pixel_snapping(false)
        .compute_layout(root, Size::new(200.0, 100.0))
        .expect("layout should succeed")
}

fn background(element: Element, color: &str) -> Element {
    element.with_style(|style| style.background = Some(color.to_string()))
}

fn paint(tree: &LayoutTree<'_>) -> Vec<DisplayCommand> {
    let limits = ResourceLimits::default();
    Painter::new(&limits)
        .paint(tree)
        .expect("paint should succeed")
        .commands()
        .to_vec()
}

#[test]
fn test_paint_order_and_absolute_coordinates() {
    let root = background(
        Element::column(vec![Element::text("hi")]).with_style(|style| {
            style.padding = "10".to_string();
            style.border.shorthand = Some("1px solid #333".to_string());
        }),
        "#ffffff",
    )
    .height("100");
    let tree = layout(&root);
    let commands = paint(&tree);
    assert_eq!(commands.len(), 3);

    match &commands[0] {
        DisplayCommand::FillRect { rect, color, .. } => {
            assert_eq!(*rect, Rect::new(0.0, 0.0, 200.0, 100.0));
            assert_eq!(color, "#ffffff");
        }
        other => panic!("expected background first, got {other:?}"),
    }
    match &commands[1] {
        DisplayCommand::StrokeBorder { borders, .. } => {
            assert_eq!(borders, &tree.root().borders);
            assert_eq!(borders.widths(), tree.root().border);
        }
        other => panic!("expected border second, got {other:?}"),
    }
    match &commands[2] {
        DisplayCommand::DrawText { rect, lines, .. } => {
            assert_eq!((rect.x, rect.y), (11.0, 11.0));
            assert_eq!(lines, &vec!["hi".to_string()]);
        }
        other => panic!("expected text last, got {other:?}"),
    }
}

#[test]
fn test_leaf_kinds_emit_their_commands() {
    let root = Element::column(vec![
        Element::image("logo.png", Some(20.0), Some(10.0)).size("20", "10"),
        Element::code(CodeKind::Barcode, "12345").size("100", "40"),
        Element::divider(Orientation::Horizontal),
    ]);
    let tree = layout(&root);
    let commands = paint(&tree);
    assert!(matches!(&commands[0], DisplayCommand::DrawImage { src, .. } if src == "logo.png"));
    assert!(matches!(&commands[1], DisplayCommand::DrawCode { kind: CodeKind::Barcode, data, .. } if data == "12345"));
    assert!(matches!(
        &commands[2],
        DisplayCommand::DrawDivider { orientation: Orientation::Horizontal, .. }
    ));
}

#[test]
fn test_opacity_multiplies_down_the_tree() {
    let root = background(
        Element::column(vec![background(
            Element::column(Vec::new()).height("10"),
            "#00ff00",
        )
        .with_style(|style| style.opacity = 0.5)]),
        "#ff0000",
    )
    .with_style(|style| style.opacity = 0.5);
    let tree = layout(&root);
    let opacities: Vec<f32> = paint(&tree)
        .iter()
        .filter_map(|command| match command {
            DisplayCommand::FillRect { opacity, .. } => Some(*opacity),
            _ => None,
        })
        .collect();
    assert_eq!(opacities, vec![0.5, 0.25]);
}

#[test]
fn test_hidden_nodes_paint_nothing() {
    let root = Element::column(vec![background(
        Element::column(vec![Element::text("secret")]),
        "#000000",
    )
    .with_style(|style| style.display = DisplayMode::None)]);
    let tree = layout(&root);
    assert!(paint(&tree).is_empty());
}

#[test]
fn test_render_depth_limit() {
    let root = Element::column(vec![Element::column(vec![Element::text("deep")])]);
    let tree = layout(&root);
    let limits = ResourceLimits {
        max_render_depth: 1,
        ..ResourceLimits::default()
    };
    assert_eq!(
        Painter::new(&limits).paint(&tree),
        Err(LayoutError::RenderTooDeep { depth: 2, limit: 1 })
    );
}

#[test]
fn test_display_list_serializes_with_op_tags() {
    let root = background(Element::column(Vec::new()).height("10"), "#123456");
    let engine = LayoutEngine::default();
    let tree = engine
        .compute_layout(&root, Size::new(200.0, 100.0))
        .expect("layout should succeed");
    let list = Painter::new(engine.limits())
        .paint(&tree)
        .expect("paint should succeed");
    let json = serde_json::to_value(&list).expect("display list should serialize");
    assert_eq!(json[0]["op"], "fillRect");
    assert_eq!(json[0]["color"], "#123456");
}

#[test]
fn test_debug_overlay_paths_and_bounds() {
    let root = Element::row(vec![
        Element::column(Vec::new()).size("50", "20"),
        Element::column(vec![Element::text("x")]).size("50", "20"),
        Element::column(Vec::new()).with_style(|style| style.display = DisplayMode::None),
    ])
    .with_style(|style| style.padding = "5".to_string());
    let tree = layout(&root);
    let outlines = debug_overlay(&tree);
    let paths: Vec<Vec<usize>> = outlines.iter().map(|outline| outline.path.clone()).collect();
    assert_eq!(paths, vec![vec![], vec![0], vec![1], vec![1, 0]]);
    assert_eq!(outlines[2].bounds, Rect::new(55.0, 5.0, 50.0, 20.0));
    assert_eq!(outlines[3].label, "text");
    assert_eq!(outlines[3].depth, 2);
}
