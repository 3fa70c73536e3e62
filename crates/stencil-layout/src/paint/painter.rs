//! Painter: generates a display list from a layout tree.
//!
//! Each visible node paints, in order: its background, its border, its
//! own content (text, image, code or rule), then its children in their
//! `order`-sorted sequence.

use log::debug;
use stencil_tree::ElementKind;

use super::{DisplayCommand, DisplayList};
use crate::error::LayoutError;
use crate::limits::ResourceLimits;
use crate::tree::{LayoutTree, NodeId};

/// Walks a layout tree and emits drawing commands.
#[derive(Debug, Clone, Copy)]
pub struct Painter<'l> {
    limits: &'l ResourceLimits,
}

impl<'l> Painter<'l> {
    /// Create a painter enforcing `limits.max_render_depth`.
    #[must_use]
    pub const fn new(limits: &'l ResourceLimits) -> Self {
        Self { limits }
    }

    /// Paint a layout tree and return the display list.
    ///
    /// # Errors
    ///
    /// [`LayoutError::RenderTooDeep`] when a visible node sits deeper than
    /// the configured render depth.
    pub fn paint(&self, tree: &LayoutTree<'_>) -> Result<DisplayList, LayoutError> {
        let mut display_list = DisplayList::new();
        self.paint_node(tree, tree.root_id(), (0.0, 0.0), 1.0, &mut display_list)?;
        debug!("[PAINT] {} commands for {} nodes", display_list.len(), tree.len());
        Ok(display_list)
    }

    /// Paint one node; `origin` is its parent's content origin in canvas
    /// coordinates.
    fn paint_node(
        &self,
        tree: &LayoutTree<'_>,
        id: NodeId,
        origin: (f32, f32),
        inherited_opacity: f32,
        display_list: &mut DisplayList,
    ) -> Result<(), LayoutError> {
        let Some(node) = tree.get(id) else {
            return Ok(());
        };
        if !node.visible {
            return Ok(());
        }
        if node.depth > self.limits.max_render_depth {
            return Err(LayoutError::RenderTooDeep {
                depth: node.depth,
                limit: self.limits.max_render_depth,
            });
        }

        let element = node.element;
        let opacity = inherited_opacity * unit_interval(element.style.opacity);
        let rect = node.rect.translate(origin.0, origin.1);
        let content = rect.inset(node.padding + node.border);
        let borders = &node.borders;

        if let Some(color) = &element.style.background {
            display_list.push(DisplayCommand::FillRect {
                rect,
                color: color.clone(),
                radius: borders.radius,
                opacity,
            });
        }
        if borders.is_visible() {
            display_list.push(DisplayCommand::StrokeBorder {
                rect,
                borders: borders.clone(),
                opacity,
            });
        }

        match &element.kind {
            ElementKind::Text(text) => {
                if let Some(layout) = node.text.as_ref().filter(|layout| !layout.lines.is_empty()) {
                    display_list.push(DisplayCommand::DrawText {
                        rect: content,
                        lines: layout.lines.clone(),
                        font: text.font.clone(),
                        font_size: layout.font_size,
                        line_height: layout.line_height,
                        color: text.color.clone(),
                        opacity,
                    });
                }
            }
            ElementKind::Image(image) => display_list.push(DisplayCommand::DrawImage {
                rect: content,
                src: image.src.clone(),
                opacity,
            }),
            ElementKind::Code(code) => display_list.push(DisplayCommand::DrawCode {
                rect: content,
                kind: code.kind,
                data: code.data.clone(),
                opacity,
            }),
            ElementKind::Divider(divider) => display_list.push(DisplayCommand::DrawDivider {
                rect: content,
                orientation: divider.orientation,
                color: divider.color.clone(),
                opacity,
            }),
            ElementKind::Container(_) => {}
        }

        for &child in &node.children {
            self.paint_node(tree, child, (content.x, content.y), opacity, display_list)?;
        }
        Ok(())
    }
}

/// Clamp to `[0, 1]`; NaN counts as fully opaque.
fn unit_interval(value: f32) -> f32 {
    if value.is_nan() { 1.0 } else { value.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_is_clamped() {
        assert!((unit_interval(1.5) - 1.0).abs() < f32::EPSILON);
        assert!(unit_interval(-0.5).abs() < f32::EPSILON);
        assert!((unit_interval(f32::NAN) - 1.0).abs() < f32::EPSILON);
    }
}
