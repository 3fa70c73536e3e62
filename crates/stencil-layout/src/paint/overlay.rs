//! Debug overlay: the bounds and hierarchy of every visible box.

use serde::Serialize;

use crate::box_model::Rect;
use crate::tree::{LayoutTree, NodeId};

/// Outline of one visible node in canvas coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugOutline {
    /// The node outlined.
    pub id: NodeId,
    /// Border box in canvas coordinates.
    pub bounds: Rect,
    /// Nesting depth; the root is 0.
    pub depth: usize,
    /// Element kind, e.g. `"container"`.
    pub label: &'static str,
    /// Child indices from the root down to this node.
    pub path: Vec<usize>,
}

/// Outline every visible node, parents before children.
#[must_use]
pub fn debug_overlay(tree: &LayoutTree<'_>) -> Vec<DebugOutline> {
    let mut outlines = Vec::with_capacity(tree.len());
    let mut path = Vec::new();
    collect(tree, tree.root_id(), (0.0, 0.0), &mut path, &mut outlines);
    outlines
}

fn collect(
    tree: &LayoutTree<'_>,
    id: NodeId,
    origin: (f32, f32),
    path: &mut Vec<usize>,
    outlines: &mut Vec<DebugOutline>,
) {
    let Some(node) = tree.get(id) else { return };
    if !node.visible {
        return;
    }
    let bounds = node.rect.translate(origin.0, origin.1);
    outlines.push(DebugOutline {
        id,
        bounds,
        depth: node.depth,
        label: node.element.kind_label(),
        path: path.clone(),
    });

    let content = bounds.inset(node.padding + node.border);
    for (index, &child) in node.children.iter().enumerate() {
        path.push(index);
        collect(tree, child, (content.x, content.y), path, outlines);
        let _ = path.pop();
    }
}
