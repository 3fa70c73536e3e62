//! Layout engine facade.
//!
//! [`LayoutEngine::compute_layout`] runs the two passes:
//!
//! 1. the intrinsic measurer walks the whole tree bottom-up, parsing every
//!    element once and recording its max-content size;
//! 2. the layout pass walks top-down from the canvas, asking the axis
//!    strategies and the positioner where each child of each container
//!    goes, and emits the positioned tree in pre-order.
//!
//! Size and baseline queries made while planning ("how tall is this
//! subtree at that width?") are memoized for the duration of one call,
//! keyed by node and by the sizes involved. Nothing survives between calls.
//!
//! Percentages of a child resolve only against the extents of its parent
//! that are definite: explicit, stretched, or flexed inside a definite
//! container. An extent taken from content is never a reference, in
//! either pass.

use std::collections::HashMap;

use log::{debug, trace};
use stencil_tree::{AlignItems, DEFAULT_FONT_SIZE_PX, Element, ElementKind, Position, TextDirection};

use crate::border::Borders;
use crate::box_model::{EdgeSizes, MaybeSize, Rect, Size, clamp};
use crate::error::LayoutError;
use crate::flex::distribute::resolve_flexible_lengths;
use crate::flex::{Axes, FlexItem};
use crate::intrinsic::{MeasuredTree, Measurer};
use crate::limits::ResourceLimits;
use crate::style::ParsedStyle;
use crate::position::{Positioner, relative_offset};
use crate::strategy;
use crate::text::{ApproximateTextMeasure, ShapeRequest, ShapedText, TextMeasure};
use crate::tree::{LayoutNode, LayoutTree, NodeId, TextLayout};
use crate::values::AutoOr;

/// Computes positioned layout trees.
///
/// The engine holds only configuration, so one instance can serve any
/// number of calls, from any number of threads when the text measurer is
/// `Sync`.
///
/// # Example
/// ```
/// use stencil_layout::{LayoutEngine, Size};
/// use stencil_tree::Element;
///
/// let template = Element::row(vec![
///     Element::text("left").grow(1.0),
///     Element::text("right").grow(2.0),
/// ]);
/// let engine = LayoutEngine::default();
/// let tree = engine.compute_layout(&template, Size::new(300.0, 200.0)).unwrap();
/// assert_eq!(tree.root().rect.width, 300.0);
/// ```
#[derive(Debug, Clone)]
pub struct LayoutEngine<M = ApproximateTextMeasure> {
    limits: ResourceLimits,
    text: M,
    pixel_snapping: bool,
}

impl Default for LayoutEngine<ApproximateTextMeasure> {
    fn default() -> Self {
        Self::new(ResourceLimits::default(), ApproximateTextMeasure::default())
    }
}

impl<M: TextMeasure> LayoutEngine<M> {
    /// Create an engine; pixel snapping is on.
    #[must_use]
    pub const fn new(limits: ResourceLimits, text: M) -> Self {
        Self {
            limits,
            text,
            pixel_snapping: true,
        }
    }

    /// Turn rounding of emitted rectangles to whole pixels on or off.
    #[must_use]
    pub fn with_pixel_snapping(mut self, enabled: bool) -> Self {
        self.pixel_snapping = enabled;
        self
    }

    /// The configured limits.
    #[must_use]
    pub const fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    /// Lay out `root` on a canvas of the given size.
    ///
    /// Percentages on the root resolve against the canvas. A root with an
    /// auto width takes the canvas width (less its margins); an auto
    /// height takes the content height.
    ///
    /// # Errors
    ///
    /// [`LayoutError::NestingTooDeep`] or [`LayoutError::TooManyFlexLines`]
    /// when a resource limit is exceeded. No partial tree is returned.
    pub fn compute_layout<'a>(
        &self,
        root: &'a Element,
        canvas: Size,
    ) -> Result<LayoutTree<'a>, LayoutError> {
        let measured = Measurer::new(&self.text, &self.limits).measure(root, DEFAULT_FONT_SIZE_PX)?;
        let mut pass = LayoutPass {
            text: &self.text,
            limits: &self.limits,
            tree: &measured,
            snap: self.pixel_snapping,
            cache: HashMap::new(),
            baselines: HashMap::new(),
            out: Vec::with_capacity(measured.nodes.len()),
        };
        pass.layout_root(canvas)?;
        debug!(
            "[FLEX] laid out {} nodes ({} memoized sizes)",
            pass.out.len(),
            pass.cache.len()
        );
        Ok(LayoutTree::new(pass.out))
    }
}

/// Which extents of a box its children's percentages may resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Definite {
    width: bool,
    height: bool,
}

impl Definite {
    const BOTH: Self = Self {
        width: true,
        height: true,
    };

    const fn along(axes: Axes, main: bool, cross: bool) -> Self {
        if axes.is_row {
            Self {
                width: main,
                height: cross,
            }
        } else {
            Self {
                width: cross,
                height: main,
            }
        }
    }

    /// Add the element's own explicit extents. With an aspect ratio, one
    /// definite extent makes the other definite too.
    fn settle(self, style: &ParsedStyle, reference: MaybeSize) -> Self {
        let explicit = style.definite_size(reference);
        let width = self.width || explicit.width.is_some();
        let height = self.height || explicit.height.is_some();
        if style.aspect_ratio.is_some() {
            let either = width || height;
            return Self {
                width: either,
                height: either,
            };
        }
        Self { width, height }
    }

    /// `size` with the indefinite extents dropped.
    fn restrict(self, size: MaybeSize) -> MaybeSize {
        MaybeSize::new(
            size.width.filter(|_| self.width),
            size.height.filter(|_| self.height),
        )
    }
}

/// Memo key: node plus the bit patterns of the sizes involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SizeKey {
    node: usize,
    given: [Option<u32>; 2],
    definite: Definite,
    reference: [Option<u32>; 2],
}

impl SizeKey {
    fn new(node: usize, given: MaybeSize, definite: Definite, reference: MaybeSize) -> Self {
        let bits = |value: Option<f32>| value.map(f32::to_bits);
        Self {
            node,
            given: [bits(given.width), bits(given.height)],
            definite,
            reference: [bits(reference.width), bits(reference.height)],
        }
    }
}

/// Where a container puts one child.
#[derive(Debug, Clone, Copy)]
struct Placement {
    /// Border box relative to the container's content origin.
    rect: Rect,
    margin: EdgeSizes,
    definite: Definite,
}

/// A container's children placed for one content-box size.
#[derive(Debug)]
struct ContainerPlan {
    /// Parallel to the node's children; `None` for hidden children.
    placements: Vec<Option<Placement>>,
    /// Used content-box size.
    content: Size,
}

/// State of one `compute_layout` call.
struct LayoutPass<'p, 'a> {
    text: &'p dyn TextMeasure,
    limits: &'p ResourceLimits,
    tree: &'p MeasuredTree<'a>,
    snap: bool,
    cache: HashMap<SizeKey, Size>,
    baselines: HashMap<SizeKey, f32>,
    out: Vec<LayoutNode<'a>>,
}

impl<'a> LayoutPass<'_, 'a> {
    fn layout_root(&mut self, canvas: Size) -> Result<(), LayoutError> {
        let tree = self.tree;
        let root = tree.root;
        let node = tree.node(root);
        if !node.visible {
            let _ = self.emit_hidden(root, None);
            return Ok(());
        }

        let reference = MaybeSize::definite(canvas);
        let style = &node.style;
        let margin = style.margin(Some(canvas.width)).or_zero();
        let definite = style.definite_size(reference);
        let width = definite.width.unwrap_or_else(|| {
            style.clamp_width((canvas.width - margin.horizontal()).max(0.0), reference)
        });
        let height = match definite.height {
            Some(height) => height,
            None => {
                self.content_size(
                    root,
                    MaybeSize::new(Some(width), None),
                    Definite::BOTH,
                    reference,
                )?
                .height
            }
        };
        let rect = Rect::new(margin.left, margin.top, width, height);
        let definite = Definite {
            width: true,
            height: definite.height.is_some(),
        };
        let _ = self.emit(root, None, rect, margin, definite, reference)?;
        Ok(())
    }

    /// Border-box size of `index` with the `given` extents fixed and the
    /// others taken from content, clamped to min/max. `definite` says which
    /// of the given extents count as definite.
    fn content_size(
        &mut self,
        index: usize,
        given: MaybeSize,
        definite: Definite,
        reference: MaybeSize,
    ) -> Result<Size, LayoutError> {
        let tree = self.tree;
        let node = tree.node(index);
        if !node.visible {
            return Ok(Size::default());
        }
        let style = &node.style;
        let explicit = style.definite_size(reference);
        let given = style.apply_ratio(
            MaybeSize::new(
                given.width.or(explicit.width),
                given.height.or(explicit.height),
            ),
            reference,
        );
        let definite = definite.settle(style, reference);
        match (given.width, given.height) {
            (Some(width), Some(height)) => return Ok(Size::new(width, height)),
            (None, None) => return Ok(node.intrinsic),
            _ => {}
        }

        let key = SizeKey::new(index, given, definite, reference);
        if let Some(size) = self.cache.get(&key) {
            return Ok(*size);
        }

        let frame = style.frame(reference.width);
        let inner = given.shrink(frame);
        let content = match &node.element.kind {
            ElementKind::Text(_) => {
                let shaped = self.shape(index, inner.width);
                Size::new(shaped.width, shaped.height)
            }
            ElementKind::Container(_) => {
                self.plan_container(index, inner, definite.restrict(inner))?
                    .content
            }
            ElementKind::Image(_) | ElementKind::Code(_) | ElementKind::Divider(_) => {
                node.intrinsic.shrink(style.frame(None))
            }
        };
        let size = Size::new(
            given.width.unwrap_or_else(|| {
                style.clamp_width(content.width + frame.horizontal(), reference)
            }),
            given.height.unwrap_or_else(|| {
                style.clamp_height(content.height + frame.vertical(), reference)
            }),
        );
        trace!(
            "[FLEX] size #{index} given=({:?}, {:?}) -> {:.1}x{:.1}",
            given.width,
            given.height,
            size.width,
            size.height
        );
        let _ = self.cache.insert(key, size);
        Ok(size)
    }

    fn shape(&self, index: usize, max_width: Option<f32>) -> ShapedText {
        let node = self.tree.node(index);
        let ElementKind::Text(text) = &node.element.kind else {
            return ShapedText::default();
        };
        self.text.shape(&ShapeRequest {
            font: &text.font,
            font_size: node.style.font_size,
            max_width,
            content: &text.content,
            wrap: text.wrap,
            max_lines: text.max_lines,
            overflow: text.overflow,
        })
    }

    /// Collect one in-flow child's flex inputs.
    ///
    /// Basis priority: an explicit basis, then the item's own main size,
    /// then its content size (for columns, the height at the provisional
    /// cross size so text wraps where it will finally sit).
    fn flex_item(
        &mut self,
        child: usize,
        axes: Axes,
        inner: MaybeSize,
        reference: MaybeSize,
        align_items: AlignItems,
    ) -> Result<FlexItem, LayoutError> {
        let tree = self.tree;
        let node = tree.node(child);
        let style = &node.style;
        let [main_start, main_end, cross_start, cross_end] =
            axes.split_margins(style.margin(reference.width));
        let definite = style.definite_size(reference);
        let min = style.min_size(reference);
        let max = style.max_size(reference);
        let align = node.element.style.align_self.resolve(align_items);
        let main_definite = axes.maybe_main(definite);
        let cross_definite = axes.maybe_cross(definite);
        let (min_cross, max_cross) = (axes.cross(min), axes.cross(max));

        let basis = match (style.basis(axes.maybe_main(reference)), main_definite) {
            (AutoOr::Length(basis), _) | (AutoOr::Auto, Some(basis)) => basis,
            (AutoOr::Auto, None) if axes.is_row => {
                let given = axes.maybe_size(None, cross_definite);
                self.content_size(child, given, Definite::BOTH, reference)?
                    .width
            }
            (AutoOr::Auto, None) => {
                let stretches = align == AlignItems::Stretch
                    && !cross_start.is_auto()
                    && !cross_end.is_auto();
                let provisional = cross_definite.or_else(|| {
                    let cross = axes.maybe_cross(inner).filter(|_| stretches)?;
                    let margins = cross_start.to_px_or(0.0) + cross_end.to_px_or(0.0);
                    Some(clamp(cross - margins, min_cross, max_cross))
                });
                let given = axes.maybe_size(None, provisional);
                self.content_size(child, given, Definite::BOTH, reference)?
                    .height
            }
        }
        .max(0.0);
        let hypothetical = clamp(basis, axes.main(min), axes.main(max));
        trace!("[FLEX] item #{child} basis={basis:.1} hypothetical={hypothetical:.1}");

        Ok(FlexItem {
            node: child,
            basis,
            hypothetical,
            grow: flex_factor(node.element.style.grow),
            shrink: flex_factor(node.element.style.shrink),
            min_main: axes.main(min),
            max_main: axes.main(max),
            margin_main: [main_start, main_end],
            margin_cross: [cross_start, cross_end],
            target: hypothetical,
            frozen: false,
            definite_cross: cross_definite,
            min_cross,
            max_cross,
            cross: 0.0,
            ascent: 0.0,
            align,
        })
    }

    /// Place every child of a container whose content box is `inner`;
    /// `reference` is the part of it that children's percentages see.
    fn plan_container(
        &mut self,
        index: usize,
        inner: MaybeSize,
        reference: MaybeSize,
    ) -> Result<ContainerPlan, LayoutError> {
        let tree = self.tree;
        let node = tree.node(index);
        let mut placements = vec![None; node.children.len()];
        let Some(container) = node.element.as_container() else {
            return Ok(ContainerPlan {
                placements,
                content: Size::default(),
            });
        };

        let strategy = strategy::select(container.direction, container.wrap);
        let axes = strategy.axes();
        let (row_gap, column_gap) = node.style.gaps(reference);
        let (main_gap, cross_gap) = if axes.is_row {
            (column_gap, row_gap)
        } else {
            (row_gap, column_gap)
        };
        let main_size = axes.maybe_main(inner);
        let cross_size = axes.maybe_cross(inner);
        let main_definite = axes.maybe_main(reference).is_some();

        // Collect items (absolute and hidden children excluded).
        let mut slots = Vec::new();
        let mut items = Vec::new();
        for (slot, &child) in node.children.iter().enumerate() {
            if tree.node(child).is_in_flow() {
                items.push(self.flex_item(
                    child,
                    axes,
                    inner,
                    reference,
                    container.align_items,
                )?);
                slots.push(slot);
            }
        }

        // Build lines and resolve main sizes.
        let lines = strategy.lines(&items, main_size, main_gap, self.limits)?;
        let mut used_main = main_size.unwrap_or(0.0);
        for line in &lines {
            let line_items = &mut items[line.clone()];
            let natural = line_items
                .iter()
                .map(FlexItem::outer_hypothetical)
                .sum::<f32>()
                + main_gap * line_items.len().saturating_sub(1) as f32;
            resolve_flexible_lengths(line_items, main_size.unwrap_or(natural), main_gap);
            if main_size.is_none() {
                used_main = used_main.max(natural);
            }
        }

        // Hypothetical cross sizes at the resolved main sizes.
        for item in &mut items {
            item.cross = match item.definite_cross {
                Some(cross) => cross,
                None => {
                    let given = axes.maybe_size(Some(item.target), None);
                    let definite = Definite::along(axes, main_definite, false);
                    let size = self.content_size(item.node, given, definite, reference)?;
                    clamp(axes.cross(size), item.min_cross, item.max_cross)
                }
            };
            if item.align == AlignItems::Baseline && axes.is_row {
                let size = axes.size(item.target, item.cross);
                let definite = Definite::along(axes, main_definite, item.definite_cross.is_some());
                item.ascent = item.margin_cross[0].to_px_or(0.0)
                    + self.baseline(item.node, size, definite, reference)?;
            }
        }

        // Line cross sizes, then line placement.
        let mut line_sizes = Vec::with_capacity(lines.len());
        let mut line_ascents = Vec::with_capacity(lines.len());
        for line in &lines {
            let mut outer = 0.0_f32;
            let mut ascent = 0.0_f32;
            let mut descent = 0.0_f32;
            for item in &items[line.clone()] {
                if item.align == AlignItems::Baseline
                    && axes.is_row
                    && !item.has_auto_cross_margin()
                {
                    ascent = ascent.max(item.ascent);
                    descent = descent.max(item.outer_cross() - item.ascent);
                } else {
                    outer = outer.max(item.outer_cross());
                }
            }
            line_sizes.push(outer.max(ascent + descent));
            line_ascents.push(ascent);
        }
        let line_offsets =
            strategy.place_lines(&mut line_sizes, cross_size, cross_gap, container.align_content);
        let used_cross = cross_size.unwrap_or_else(|| {
            line_sizes.iter().sum::<f32>() + cross_gap * lines.len().saturating_sub(1) as f32
        });
        let used = axes.size(used_main, used_cross);
        debug!(
            "[FLEX] container #{index}: {} items in {} lines, content {:.1}x{:.1}",
            items.len(),
            lines.len(),
            used.width,
            used.height
        );

        // Main and cross positions.
        for (line_index, line) in lines.iter().enumerate() {
            let positions =
                strategy.place_items(&items[line.clone()], used_main, main_gap, container.justify);
            for (position, item_index) in positions.into_iter().zip(line.clone()) {
                let item = &mut items[item_index];
                let stretched =
                    item.align == AlignItems::Stretch && !item.has_auto_cross_margin();
                let definite = Definite::along(
                    axes,
                    main_definite,
                    stretched || item.definite_cross.is_some(),
                );
                let cross_offset =
                    strategy.align_item(item, line_sizes[line_index], line_ascents[line_index]);
                let cross_position = line_offsets[line_index] + cross_offset;
                let size = axes.size(item.target, item.cross);
                let (x, y) = if axes.is_row {
                    (position, cross_position)
                } else {
                    (cross_position, position)
                };
                let mut rect = Rect::new(x, y, size.width, size.height);
                if container.text_direction == TextDirection::Rtl {
                    rect.x = used.width - rect.x - rect.width;
                }
                let child = tree.node(item.node);
                if child.element.style.position == Position::Relative {
                    let (dx, dy) = relative_offset(&child.style, used);
                    rect = rect.translate(dx, dy);
                }
                placements[slots[item_index]] = Some(Placement {
                    rect,
                    margin: child.style.margin(reference.width).or_zero(),
                    definite,
                });
            }
        }

        // Absolutely positioned children, against the used content box.
        let positioner = Positioner::new(used, axes, container.justify, container.align_items);
        let used_reference = MaybeSize::definite(used);
        for (slot, &child) in node.children.iter().enumerate() {
            let child_node = tree.node(child);
            if !child_node.is_out_of_flow() {
                continue;
            }
            let request = positioner.request(&child_node.style, child_node.element.style.align_self);
            let mut definite = Definite {
                width: request.given.width.is_some(),
                height: request.given.height.is_some(),
            };
            let mut size =
                self.content_size(child, request.given, Definite::BOTH, used_reference)?;
            if request.given.width.is_none() && size.width > request.available.width {
                let width = child_node
                    .style
                    .clamp_width(request.available.width, used_reference);
                size = self.content_size(
                    child,
                    MaybeSize::new(Some(width), request.given.height),
                    Definite::BOTH,
                    used_reference,
                )?;
                definite.width = true;
            }
            placements[slot] = Some(Placement {
                rect: positioner.place(&request, size),
                margin: request.margin,
                definite,
            });
        }

        Ok(ContainerPlan {
            placements,
            content: used,
        })
    }

    /// Distance from the top of the border box to the first baseline.
    ///
    /// Text: top inset plus the first line's height. Containers: the
    /// baseline of the first in-flow child, shifted by its position. Other
    /// leaves: the bottom of the border box.
    fn baseline(
        &mut self,
        index: usize,
        size: Size,
        definite: Definite,
        reference: MaybeSize,
    ) -> Result<f32, LayoutError> {
        let key = SizeKey::new(index, MaybeSize::definite(size), definite, reference);
        if let Some(baseline) = self.baselines.get(&key) {
            return Ok(*baseline);
        }
        let baseline = self.first_baseline(index, size, definite, reference)?;
        let _ = self.baselines.insert(key, baseline);
        Ok(baseline)
    }

    fn first_baseline(
        &mut self,
        index: usize,
        size: Size,
        definite: Definite,
        reference: MaybeSize,
    ) -> Result<f32, LayoutError> {
        let tree = self.tree;
        let node = tree.node(index);
        let frame = node.style.frame(reference.width);
        let inner = size.shrink(frame);
        match &node.element.kind {
            ElementKind::Text(_) => {
                let shaped = self.shape(index, Some(inner.width));
                Ok(if shaped.lines.is_empty() {
                    frame.top
                } else {
                    frame.top + shaped.line_height
                })
            }
            ElementKind::Container(_) => {
                let inner = MaybeSize::definite(inner);
                let child_reference = definite.settle(&node.style, reference).restrict(inner);
                let plan = self.plan_container(index, inner, child_reference)?;
                let first = node
                    .children
                    .iter()
                    .zip(&plan.placements)
                    .find_map(|(&child, placement)| {
                        placement
                            .filter(|_| tree.node(child).is_in_flow())
                            .map(|placement| (child, placement))
                    });
                match first {
                    Some((child, placement)) => Ok(frame.top
                        + placement.rect.y
                        + self.baseline(
                            child,
                            placement.rect.size(),
                            placement.definite,
                            child_reference,
                        )?),
                    None => Ok(size.height),
                }
            }
            ElementKind::Image(_) | ElementKind::Code(_) | ElementKind::Divider(_) => {
                Ok(size.height)
            }
        }
    }

    /// Emit `index` and its subtree; `rect` is the unsnapped border box
    /// relative to the parent's content origin.
    fn emit(
        &mut self,
        index: usize,
        parent: Option<NodeId>,
        rect: Rect,
        margin: EdgeSizes,
        definite: Definite,
        reference: MaybeSize,
    ) -> Result<NodeId, LayoutError> {
        let tree = self.tree;
        let node = tree.node(index);
        let style = &node.style;
        let padding = style.padding(reference.width);
        let border = style.borders.widths();
        let inner = rect.size().shrink(padding + border);

        let text = match &node.element.kind {
            ElementKind::Text(_) => {
                let shaped = self.shape(index, Some(inner.width));
                Some(TextLayout {
                    lines: shaped.lines,
                    line_height: shaped.line_height,
                    font_size: style.font_size,
                })
            }
            _ => None,
        };

        let id = LayoutTree::next_id(&self.out);
        self.out.push(LayoutNode {
            element: node.element,
            parent,
            children: Vec::with_capacity(node.children.len()),
            rect: if self.snap { rect.snapped() } else { rect },
            padding,
            border,
            borders: style.borders.clone(),
            margin,
            depth: node.depth,
            font_size: style.font_size,
            visible: true,
            text,
        });

        if node.children.is_empty() {
            return Ok(id);
        }
        let inner = MaybeSize::definite(inner);
        let child_reference = definite.settle(style, reference).restrict(inner);
        let plan = self.plan_container(index, inner, child_reference)?;
        for (&child, placement) in node.children.iter().zip(plan.placements) {
            let child_id = match placement {
                Some(placement) => self.emit(
                    child,
                    Some(id),
                    placement.rect,
                    placement.margin,
                    placement.definite,
                    child_reference,
                )?,
                None => self.emit_hidden(child, Some(id)),
            };
            self.out[id.index()].children.push(child_id);
        }
        Ok(id)
    }

    /// Emit a `display: none` subtree with empty rects.
    fn emit_hidden(&mut self, index: usize, parent: Option<NodeId>) -> NodeId {
        let tree = self.tree;
        let node = tree.node(index);
        let id = LayoutTree::next_id(&self.out);
        self.out.push(LayoutNode {
            element: node.element,
            parent,
            children: Vec::with_capacity(node.children.len()),
            rect: Rect::default(),
            padding: EdgeSizes::default(),
            border: EdgeSizes::default(),
            borders: Borders::default(),
            margin: EdgeSizes::default(),
            depth: node.depth,
            font_size: node.style.font_size,
            visible: false,
            text: None,
        });
        for &child in &node.children {
            let child_id = self.emit_hidden(child, Some(id));
            self.out[id.index()].children.push(child_id);
        }
        id
    }
}

/// Grow and shrink factors are non-negative and finite.
fn flex_factor(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use stencil_tree::CodeKind;

    use super::*;

    fn layout(root: &Element, canvas: Size) -> LayoutTree<'_> {
        LayoutEngine::default()
            .with_pixel_snapping(false)
            .compute_layout(root, canvas)
            .unwrap()
    }

    #[test]
    fn root_takes_canvas_width_and_content_height() {
        let root = Element::column(vec![
            Element::code(CodeKind::Qr, "a").size("100", "100"),
            Element::code(CodeKind::Qr, "b").size("100", "100"),
        ]);
        let tree = layout(&root, Size::new(400.0, 900.0));
        assert_eq!(tree.root().rect, Rect::new(0.0, 0.0, 400.0, 200.0));
    }

    #[test]
    fn text_rewraps_at_the_resolved_width() {
        // 16px font: 9.6px per character
        let root = Element::column(vec![Element::text("aaaa bbbb cccc")]).width("60");
        let tree = layout(&root, Size::new(400.0, 400.0));
        let text = tree.children(tree.root_id()).next().unwrap();
        assert_eq!(text.text.as_ref().unwrap().lines.len(), 3);
        assert!((text.rect.height - 3.0 * 19.2).abs() < 0.01);
    }

    #[test]
    fn memo_is_per_call() {
        let root = Element::row(vec![Element::text("abc").grow(1.0)]);
        let engine = LayoutEngine::default();
        let first = engine.compute_layout(&root, Size::new(100.0, 50.0)).unwrap();
        let second = engine.compute_layout(&root, Size::new(200.0, 50.0)).unwrap();
        assert_eq!(first.root().rect.width, 100.0);
        assert_eq!(second.root().rect.width, 200.0);
    }

    #[test]
    fn flex_factors_are_sanitized() {
        assert_eq!(flex_factor(-1.0), 0.0);
        assert_eq!(flex_factor(f32::NAN), 0.0);
        assert_eq!(flex_factor(2.5), 2.5);
    }
}
