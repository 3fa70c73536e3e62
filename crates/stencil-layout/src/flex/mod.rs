//! Flex distributor.
//!
//! Given the in-flow siblings of one container (already stably sorted by
//! `order`), this module:
//! - breaks them into flex lines ([`lines`]),
//! - resolves each line's flexible lengths with the iterative freeze loop
//!   ([`distribute`]),
//! - computes the leading offset and extra spacing of a justify or
//!   align-content mode ([`justify`]).
//!
//! Everything here works on abstract main/cross axes; [`Axes`] maps them to
//! concrete X/Y.

pub(crate) mod distribute;
pub(crate) mod justify;
pub(crate) mod lines;

use stencil_tree::AlignItems;

use crate::box_model::{MaybeSize, Size};
use crate::values::{AutoEdgeSizes, AutoOr};

/// Orientation of a container's main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Axes {
    /// Main axis is horizontal.
    pub(crate) is_row: bool,
    /// Items are placed from the main end.
    pub(crate) reverse: bool,
}

impl Axes {
    pub(crate) const fn main(self, size: Size) -> f32 {
        if self.is_row { size.width } else { size.height }
    }

    pub(crate) const fn cross(self, size: Size) -> f32 {
        if self.is_row { size.height } else { size.width }
    }

    pub(crate) const fn maybe_main(self, size: MaybeSize) -> Option<f32> {
        if self.is_row { size.width } else { size.height }
    }

    pub(crate) const fn maybe_cross(self, size: MaybeSize) -> Option<f32> {
        if self.is_row { size.height } else { size.width }
    }

    /// Build a concrete size from main and cross extents.
    pub(crate) const fn size(self, main: f32, cross: f32) -> Size {
        if self.is_row {
            Size::new(main, cross)
        } else {
            Size::new(cross, main)
        }
    }

    /// Build a concrete size from optional main and cross extents.
    pub(crate) const fn maybe_size(self, main: Option<f32>, cross: Option<f32>) -> MaybeSize {
        if self.is_row {
            MaybeSize::new(main, cross)
        } else {
            MaybeSize::new(cross, main)
        }
    }

    /// `(main_start, main_end, cross_start, cross_end)` margins.
    pub(crate) const fn split_margins(self, margin: AutoEdgeSizes) -> [AutoOr; 4] {
        if self.is_row {
            [margin.left, margin.right, margin.top, margin.bottom]
        } else {
            [margin.top, margin.bottom, margin.left, margin.right]
        }
    }
}

/// Per-item data collected for flex layout.
#[derive(Debug, Clone)]
pub(crate) struct FlexItem {
    /// Index into the measured arena.
    pub(crate) node: usize,
    /// Flex base size of the border box.
    pub(crate) basis: f32,
    /// `basis` clamped to the main-axis bounds.
    pub(crate) hypothetical: f32,
    pub(crate) grow: f32,
    pub(crate) shrink: f32,
    pub(crate) min_main: f32,
    pub(crate) max_main: f32,
    pub(crate) margin_main: [AutoOr; 2],
    pub(crate) margin_cross: [AutoOr; 2],
    /// Resolved main size after distribution.
    pub(crate) target: f32,
    /// Whether the item is frozen in the distribution loop.
    pub(crate) frozen: bool,
    /// Explicit cross size, if any; stretch only applies without one.
    pub(crate) definite_cross: Option<f32>,
    pub(crate) min_cross: f32,
    pub(crate) max_cross: f32,
    /// Resolved cross size.
    pub(crate) cross: f32,
    /// Distance from the cross-start margin edge to the first baseline.
    pub(crate) ascent: f32,
    pub(crate) align: AlignItems,
}

impl FlexItem {
    /// Sum of the non-auto main-axis margins.
    pub(crate) fn main_margins(&self) -> f32 {
        self.margin_main[0].to_px_or(0.0) + self.margin_main[1].to_px_or(0.0)
    }

    /// Sum of the non-auto cross-axis margins.
    pub(crate) fn cross_margins(&self) -> f32 {
        self.margin_cross[0].to_px_or(0.0) + self.margin_cross[1].to_px_or(0.0)
    }

    pub(crate) fn outer_hypothetical(&self) -> f32 {
        self.hypothetical + self.main_margins()
    }

    pub(crate) fn outer_target(&self) -> f32 {
        self.target + self.main_margins()
    }

    pub(crate) fn outer_cross(&self) -> f32 {
        self.cross + self.cross_margins()
    }

    pub(crate) fn has_auto_cross_margin(&self) -> bool {
        self.margin_cross[0].is_auto() || self.margin_cross[1].is_auto()
    }
}
