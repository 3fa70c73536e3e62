//! Positioner: static, relative and absolute placement.
//!
//! - **static**: the flex position is final.
//! - **relative**: the flex position is computed first (siblings never
//!   see the shift), then moved by the insets. `left` wins over `right`
//!   and `top` wins over `bottom`.
//! - **absolute**: taken out of flow and placed against the parent's
//!   content box. Opposing insets with no explicit size stretch the box
//!   between them. An axis with no insets falls back to the parent's
//!   justify-content (main axis) or align-items/align-self (cross axis),
//!   as if the box were the only flow child.

use log::debug;
use stencil_tree::{AlignItems, AlignSelf, JustifyContent};

use crate::box_model::{EdgeSizes, MaybeSize, Rect, Size};
use crate::flex::Axes;
use crate::style::ParsedStyle;
use crate::values::AutoEdgeSizes;

/// Offset of a relatively positioned box from its static position.
pub(crate) fn relative_offset(style: &ParsedStyle, inner: Size) -> (f32, f32) {
    let insets = style.insets(MaybeSize::definite(inner));
    let dx = insets
        .left
        .length()
        .or_else(|| insets.right.length().map(|right| -right))
        .unwrap_or(0.0);
    let dy = insets
        .top
        .length()
        .or_else(|| insets.bottom.length().map(|bottom| -bottom))
        .unwrap_or(0.0);
    (dx, dy)
}

/// Where a box with no insets on an axis lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fallback {
    Start,
    Center,
    End,
}

impl From<JustifyContent> for Fallback {
    fn from(justify: JustifyContent) -> Self {
        match justify {
            JustifyContent::Start | JustifyContent::SpaceBetween => Self::Start,
            JustifyContent::Center | JustifyContent::SpaceAround | JustifyContent::SpaceEvenly => {
                Self::Center
            }
            JustifyContent::End => Self::End,
        }
    }
}

impl From<AlignItems> for Fallback {
    fn from(align: AlignItems) -> Self {
        match align {
            AlignItems::Start | AlignItems::Stretch | AlignItems::Baseline => Self::Start,
            AlignItems::Center => Self::Center,
            AlignItems::End => Self::End,
        }
    }
}

/// Sizing inputs of one absolutely positioned box.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AbsoluteRequest {
    /// Border-box extents fixed by explicit sizes, opposing insets or
    /// stretch; the rest come from content.
    pub(crate) given: MaybeSize,
    /// Room left between the insets, for shrink-to-fit.
    pub(crate) available: Size,
    /// Resolved margins; `auto` is 0.
    pub(crate) margin: EdgeSizes,
    insets: AutoEdgeSizes,
    align: AlignItems,
}

/// Places absolutely positioned children of one container.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Positioner {
    inner: Size,
    axes: Axes,
    justify: JustifyContent,
    align_items: AlignItems,
}

impl Positioner {
    /// `inner` is the container's used content-box size.
    pub(crate) const fn new(
        inner: Size,
        axes: Axes,
        justify: JustifyContent,
        align_items: AlignItems,
    ) -> Self {
        Self {
            inner,
            axes,
            justify,
            align_items,
        }
    }

    /// Resolve insets, margins and the sizes they fix.
    pub(crate) fn request(&self, style: &ParsedStyle, align_self: AlignSelf) -> AbsoluteRequest {
        let reference = MaybeSize::definite(self.inner);
        let insets = style.insets(reference);
        let margin = style.margin(Some(self.inner.width)).or_zero();
        let definite = style.definite_size(reference);
        let align = align_self.resolve(self.align_items);

        let mut width = definite.width.or_else(|| {
            let left = insets.left.length()?;
            let right = insets.right.length()?;
            Some(style.clamp_width(
                (self.inner.width - left - right - margin.horizontal()).max(0.0),
                reference,
            ))
        });
        let mut height = definite.height.or_else(|| {
            let top = insets.top.length()?;
            let bottom = insets.bottom.length()?;
            Some(style.clamp_height(
                (self.inner.height - top - bottom - margin.vertical()).max(0.0),
                reference,
            ))
        });

        if align == AlignItems::Stretch {
            if self.axes.is_row {
                if height.is_none() && insets.top.is_auto() && insets.bottom.is_auto() {
                    height = Some(style.clamp_height(
                        (self.inner.height - margin.vertical()).max(0.0),
                        reference,
                    ));
                }
            } else if width.is_none() && insets.left.is_auto() && insets.right.is_auto() {
                width = Some(style.clamp_width(
                    (self.inner.width - margin.horizontal()).max(0.0),
                    reference,
                ));
            }
        }

        AbsoluteRequest {
            given: style.apply_ratio(MaybeSize::new(width, height), reference),
            available: Size::new(
                (self.inner.width
                    - insets.left.to_px_or(0.0)
                    - insets.right.to_px_or(0.0)
                    - margin.horizontal())
                .max(0.0),
                (self.inner.height
                    - insets.top.to_px_or(0.0)
                    - insets.bottom.to_px_or(0.0)
                    - margin.vertical())
                .max(0.0),
            ),
            insets,
            margin,
            align,
        }
    }

    /// The border box of a child of final `size`, relative to the
    /// container's content origin.
    pub(crate) fn place(&self, request: &AbsoluteRequest, size: Size) -> Rect {
        let horizontal_fallback = if self.axes.is_row {
            Fallback::from(self.justify)
        } else {
            Fallback::from(request.align)
        };
        let vertical_fallback = if self.axes.is_row {
            Fallback::from(request.align)
        } else {
            Fallback::from(self.justify)
        };

        let x = match (request.insets.left.length(), request.insets.right.length()) {
            (Some(left), _) => left + request.margin.left,
            (None, Some(right)) => self.inner.width - right - request.margin.right - size.width,
            (None, None) => fallback_offset(
                horizontal_fallback,
                self.inner.width,
                size.width,
                request.margin.left,
                request.margin.right,
            ),
        };
        let y = match (request.insets.top.length(), request.insets.bottom.length()) {
            (Some(top), _) => top + request.margin.top,
            (None, Some(bottom)) => {
                self.inner.height - bottom - request.margin.bottom - size.height
            }
            (None, None) => fallback_offset(
                vertical_fallback,
                self.inner.height,
                size.height,
                request.margin.top,
                request.margin.bottom,
            ),
        };
        debug!(
            "[POSITION] absolute at ({x:.1}, {y:.1}) size {:.1}x{:.1}",
            size.width, size.height
        );
        Rect::new(x, y, size.width, size.height)
    }
}

fn fallback_offset(
    fallback: Fallback,
    container: f32,
    size: f32,
    margin_start: f32,
    margin_end: f32,
) -> f32 {
    match fallback {
        Fallback::Start => margin_start,
        Fallback::End => container - size - margin_end,
        Fallback::Center => margin_start + (container - size - margin_start - margin_end) / 2.0,
    }
}
