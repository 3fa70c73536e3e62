//! The positioned output tree.
//!
//! A fresh arena is built by every layout call. Nodes are stored in
//! pre-order, so a parent always precedes its children, and each node
//! keeps a one-way reference back to the element it was laid out from.

use serde::{Serialize, Serializer};
use stencil_tree::Element;

use crate::border::Borders;
use crate::box_model::{EdgeSizes, Rect};

/// Index of a node in a [`LayoutTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in [`LayoutTree::iter`] order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Wrapped text lines of a text node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLayout {
    /// The lines, in order.
    pub lines: Vec<String>,
    /// Height of one line.
    pub line_height: f32,
    /// Font size the lines were shaped at.
    pub font_size: f32,
}

/// One positioned element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutNode<'a> {
    /// The source element.
    #[serde(rename = "kind", serialize_with = "serialize_kind")]
    pub element: &'a Element,
    /// The parent node; `None` for the root.
    pub parent: Option<NodeId>,
    /// Children, in `order`-sorted sequence.
    pub children: Vec<NodeId>,
    /// Border box relative to the parent's content origin (the canvas for
    /// the root).
    pub rect: Rect,
    /// Resolved padding.
    pub padding: EdgeSizes,
    /// Resolved border widths.
    pub border: EdgeSizes,
    /// The resolved border cascade, as painted.
    pub borders: Borders,
    /// Resolved margins; `auto` margins report 0.
    pub margin: EdgeSizes,
    /// Nesting depth; the root is 0.
    pub depth: usize,
    /// Resolved font size, inherited when the element sets none.
    pub font_size: f32,
    /// False for `display: none` subtrees, which have an empty rect.
    pub visible: bool,
    /// Wrapped lines, for text nodes.
    pub text: Option<TextLayout>,
}

impl LayoutNode<'_> {
    /// The content box, relative to the same origin as [`LayoutNode::rect`].
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        self.rect.inset(self.padding + self.border)
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_kind<S: Serializer>(element: &&Element, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(element.kind_label())
}

/// The result of a layout call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutTree<'a> {
    nodes: Vec<LayoutNode<'a>>,
    root: NodeId,
}

impl<'a> LayoutTree<'a> {
    pub(crate) fn new(nodes: Vec<LayoutNode<'a>>) -> Self {
        Self {
            nodes,
            root: NodeId(0),
        }
    }

    pub(crate) const fn next_id(nodes: &[LayoutNode<'a>]) -> NodeId {
        NodeId(nodes.len())
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &LayoutNode<'a> {
        &self.nodes[self.root.0]
    }

    /// The root node's id.
    #[must_use]
    pub const fn root_id(&self) -> NodeId {
        self.root
    }

    /// Look up a node.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&LayoutNode<'a>> {
        self.nodes.get(id.0)
    }

    /// The children of `id`, in order; empty for an unknown id.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &LayoutNode<'a>> + '_ {
        self.get(id)
            .into_iter()
            .flat_map(|node| node.children.iter())
            .filter_map(|&child| self.get(child))
    }

    /// Every node with its id, in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &LayoutNode<'a>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes. Trees built by the engine never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The border box of `id` in canvas coordinates.
    #[must_use]
    pub fn absolute_rect(&self, id: NodeId) -> Option<Rect> {
        let node = self.get(id)?;
        let mut rect = node.rect;
        let mut parent = node.parent;
        while let Some(parent_id) = parent {
            let ancestor = self.get(parent_id)?;
            let origin = ancestor.content_rect();
            rect = rect.translate(origin.x, origin.y);
            parent = ancestor.parent;
        }
        Some(rect)
    }

    /// Pretty JSON dump of the whole tree, for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
