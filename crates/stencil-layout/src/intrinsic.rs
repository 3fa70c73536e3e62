//! Intrinsic measurer: the bottom-up first pass.
//!
//! Walks the whole element tree depth-first, parsing each element's
//! properties once and computing its max-content border-box size. The
//! result is a post-order arena that the layout pass reads but never
//! changes.
//!
//! - Leaves take their natural size (images, generated codes), their rule
//!   thickness (dividers) or the size the [`TextMeasure`] reports for one
//!   unbounded line per hard break (text).
//! - Containers sum their in-flow children's margin boxes along the main
//!   axis, plus gaps, and take the largest along the cross axis.
//! - Explicit px/em sizes override content on their axis, the aspect ratio
//!   fills in a missing axis, and the result is clamped to min/max.
//!
//! Absolutely positioned children are measured (their own placement needs
//! the size) but never contribute to the parent. `display: none` subtrees
//! are visited for bookkeeping only and measure as zero.

use log::trace;
use stencil_tree::{Element, ElementKind, Orientation};

use crate::box_model::{MaybeSize, Size};
use crate::error::LayoutError;
use crate::limits::ResourceLimits;
use crate::style::ParsedStyle;
use crate::text::{ShapeRequest, TextMeasure};
use crate::units::Dimension;

/// One measured element.
#[derive(Debug)]
pub(crate) struct MeasuredNode<'a> {
    pub(crate) element: &'a Element,
    pub(crate) style: ParsedStyle,
    /// All children, stably sorted by `order`.
    pub(crate) children: Vec<usize>,
    pub(crate) depth: usize,
    /// False inside a `display: none` subtree.
    pub(crate) visible: bool,
    /// Max-content border-box size.
    pub(crate) intrinsic: Size,
}

impl MeasuredNode<'_> {
    /// Whether the node takes part in its parent's flex lines.
    pub(crate) fn is_in_flow(&self) -> bool {
        self.visible && !self.element.is_absolute()
    }

    /// Whether the node is visible and taken out of flow.
    pub(crate) fn is_out_of_flow(&self) -> bool {
        self.visible && self.element.is_absolute()
    }
}

/// The post-order arena produced by the first pass.
#[derive(Debug)]
pub(crate) struct MeasuredTree<'a> {
    pub(crate) nodes: Vec<MeasuredNode<'a>>,
    pub(crate) root: usize,
}

impl<'a> MeasuredTree<'a> {
    pub(crate) fn node(&self, index: usize) -> &MeasuredNode<'a> {
        &self.nodes[index]
    }
}

/// Runs the intrinsic pass.
pub(crate) struct Measurer<'m> {
    text: &'m dyn TextMeasure,
    limits: &'m ResourceLimits,
}

impl<'m> Measurer<'m> {
    pub(crate) fn new(text: &'m dyn TextMeasure, limits: &'m ResourceLimits) -> Self {
        Self { text, limits }
    }

    /// Measure the whole tree rooted at `root`.
    pub(crate) fn measure<'a>(
        &self,
        root: &'a Element,
        font_size: f32,
    ) -> Result<MeasuredTree<'a>, LayoutError> {
        let mut nodes = Vec::new();
        let root = self.visit(root, font_size, 0, true, &mut nodes)?;
        Ok(MeasuredTree { nodes, root })
    }

    fn visit<'a>(
        &self,
        element: &'a Element,
        inherited_font_size: f32,
        depth: usize,
        parent_visible: bool,
        nodes: &mut Vec<MeasuredNode<'a>>,
    ) -> Result<usize, LayoutError> {
        self.limits.check_nesting(depth)?;

        let visible = parent_visible && !element.is_hidden();
        let style = ParsedStyle::parse(element, inherited_font_size);

        let mut ordered: Vec<&Element> = element.children().iter().collect();
        ordered.sort_by_key(|child| child.style.order);
        let mut children = Vec::with_capacity(ordered.len());
        for child in ordered {
            children.push(self.visit(child, style.font_size, depth + 1, visible, nodes)?);
        }

        let intrinsic = if visible {
            self.intrinsic_size(element, &style, &children, nodes)
        } else {
            Size::default()
        };
        trace!(
            "[MEASURE] {} depth={depth} intrinsic={:.1}x{:.1}",
            element.kind_label(),
            intrinsic.width,
            intrinsic.height
        );

        nodes.push(MeasuredNode {
            element,
            style,
            children,
            depth,
            visible,
            intrinsic,
        });
        Ok(nodes.len() - 1)
    }

    fn intrinsic_size(
        &self,
        element: &Element,
        style: &ParsedStyle,
        children: &[usize],
        nodes: &[MeasuredNode<'_>],
    ) -> Size {
        let content = match &element.kind {
            ElementKind::Text(text) => {
                let shaped = self.text.shape(&ShapeRequest {
                    font: &text.font,
                    font_size: style.font_size,
                    max_width: None,
                    content: &text.content,
                    wrap: text.wrap,
                    max_lines: text.max_lines,
                    overflow: text.overflow,
                });
                Size::new(shaped.width, shaped.height)
            }
            ElementKind::Image(image) => Size::new(
                image.natural_width.unwrap_or(0.0).max(0.0),
                image.natural_height.unwrap_or(0.0).max(0.0),
            ),
            ElementKind::Code(code) => {
                let (width, height) = code.natural_size();
                Size::new(width.max(0.0), height.max(0.0))
            }
            ElementKind::Divider(divider) => {
                let thickness = divider_thickness(&divider.thickness, style.font_size);
                match divider.orientation {
                    Orientation::Horizontal => Size::new(0.0, thickness),
                    Orientation::Vertical => Size::new(thickness, 0.0),
                }
            }
            ElementKind::Container(container) => {
                let is_row = container.direction.is_row();
                let (row_gap, column_gap) = style.gaps(MaybeSize::NONE);
                let main_gap = if is_row { column_gap } else { row_gap };

                let mut main = 0.0_f32;
                let mut cross = 0.0_f32;
                let mut count = 0_usize;
                for child in children.iter().map(|&i| &nodes[i]).filter(|n| n.is_in_flow()) {
                    let outer = child.intrinsic.expand(child.style.margin(None).or_zero());
                    let (child_main, child_cross) = if is_row {
                        (outer.width, outer.height)
                    } else {
                        (outer.height, outer.width)
                    };
                    main += child_main.max(0.0);
                    cross = cross.max(child_cross);
                    count += 1;
                }
                if count > 1 {
                    main += main_gap * (count - 1) as f32;
                }
                if is_row {
                    Size::new(main, cross)
                } else {
                    Size::new(cross, main)
                }
            }
        };

        let border_box = content.expand(style.frame(None));
        let sized = style.definite_size(MaybeSize::NONE);
        Size::new(
            style.clamp_width(sized.width.unwrap_or(border_box.width), MaybeSize::NONE),
            style.clamp_height(sized.height.unwrap_or(border_box.height), MaybeSize::NONE),
        )
    }
}

/// Rule thickness in pixels; malformed or auto thickness is 1px.
pub(crate) fn divider_thickness(text: &str, font_size: f32) -> f32 {
    Dimension::parse_lenient(text)
        .resolve(None, font_size)
        .to_px_or(1.0)
        .max(0.0)
}

#[cfg(test)]
mod tests {
    use stencil_tree::{CodeKind, DisplayMode, Position};

    use super::*;
    use crate::text::ApproximateTextMeasure;

    fn measure(root: &Element) -> Result<Size, LayoutError> {
        let text = ApproximateTextMeasure::default();
        let limits = ResourceLimits::default();
        let tree = Measurer::new(&text, &limits).measure(root, 10.0)?;
        Ok(tree.node(tree.root).intrinsic)
    }

    #[test]
    fn row_sums_main_and_maxes_cross() {
        let root = Element::row(vec![
            Element::code(CodeKind::Qr, "a"),
            Element::code(CodeKind::Barcode, "b"),
        ])
        .with_container(|c| c.gap = "10".into());
        assert_eq!(measure(&root).unwrap(), Size::new(310.0, 100.0));
    }

    #[test]
    fn column_adds_padding_and_margins() {
        let root = Element::column(vec![
            Element::text("abcde").with_style(|s| s.margin = "2".into()),
        ])
        .with_style(|s| s.padding = "5".into());
        // text: 5 chars × 6px = 30 wide, 12 tall; margin 2 each side; padding 5
        assert_eq!(measure(&root).unwrap(), Size::new(44.0, 26.0));
    }

    #[test]
    fn absolute_and_hidden_children_do_not_contribute() {
        let with = Element::row(vec![
            Element::code(CodeKind::Qr, "a"),
            Element::code(CodeKind::Barcode, "b").position(Position::Absolute),
            Element::code(CodeKind::Barcode, "c")
                .with_style(|s| s.display = DisplayMode::None),
        ]);
        let without = Element::row(vec![Element::code(CodeKind::Qr, "a")]);
        assert_eq!(measure(&with).unwrap(), measure(&without).unwrap());
    }

    #[test]
    fn explicit_size_overrides_content() {
        let root = Element::text("a long line of text").width("40");
        assert_eq!(measure(&root).unwrap().width, 40.0);
    }

    #[test]
    fn dividers_take_their_thickness() {
        let rule = Element::divider(Orientation::Horizontal);
        assert_eq!(measure(&rule).unwrap(), Size::new(0.0, 1.0));
        let rule = Element::divider(Orientation::Vertical);
        assert_eq!(measure(&rule).unwrap(), Size::new(1.0, 0.0));
    }

    #[test]
    fn depth_past_the_limit_fails() {
        let mut root = Element::text("leaf");
        for _ in 0..3 {
            root = Element::column(vec![root]);
        }
        let text = ApproximateTextMeasure::default();
        let limits = ResourceLimits {
            max_nesting_depth: 2,
            ..ResourceLimits::default()
        };
        let result = Measurer::new(&text, &limits).measure(&root, 16.0);
        assert_eq!(
            result.err(),
            Some(LayoutError::NestingTooDeep { depth: 3, limit: 2 })
        );
    }

    #[test]
    fn children_are_sorted_by_order() {
        let root = Element::row(vec![
            Element::text("a").order(2),
            Element::text("b"),
            Element::text("c").order(1),
        ]);
        let text = ApproximateTextMeasure::default();
        let limits = ResourceLimits::default();
        let tree = Measurer::new(&text, &limits).measure(&root, 16.0).unwrap();
        let labels: Vec<&str> = tree
            .node(tree.root)
            .children
            .iter()
            .map(|&i| match &tree.node(i).element.kind {
                ElementKind::Text(text) => text.content.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(labels, vec!["b", "c", "a"]);
    }
}
