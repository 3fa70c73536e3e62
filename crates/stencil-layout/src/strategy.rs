//! Axis strategies: how a container maps flex lines onto X/Y.
//!
//! | strategy            | selected for                   | lines        |
//! |---------------------|--------------------------------|--------------|
//! | [`RowStrategy`]     | `row`/`row-reverse`, nowrap    | one          |
//! | [`ColumnStrategy`]  | `column`/`column-reverse`, nowrap | one       |
//! | [`WrappedStrategy`] | any direction, `wrap`/`wrap-reverse` | greedy |
//!
//! All three share justify-content, align-items/align-self and gap
//! handling through the provided methods of [`AxisStrategy`]; they differ
//! in their axes and in how lines are built and stacked.

use std::ops::Range;

use log::debug;
use stencil_tree::{AlignContent, AlignItems, FlexDirection, FlexWrap, JustifyContent};

use crate::box_model::clamp;
use crate::error::LayoutError;
use crate::flex::justify::{Spacing, distribute};
use crate::flex::lines::{break_into_lines, single_line};
use crate::flex::{Axes, FlexItem};
use crate::limits::ResourceLimits;

/// Direction-specific placement of flex items.
pub(crate) trait AxisStrategy {
    /// The main/cross orientation.
    fn axes(&self) -> Axes;

    /// Break the items into lines.
    fn lines(
        &self,
        items: &[FlexItem],
        main_size: Option<f32>,
        gap: f32,
        limits: &ResourceLimits,
    ) -> Result<Vec<Range<usize>>, LayoutError>;

    /// Whether lines stack from the cross end.
    fn reverse_lines(&self) -> bool {
        false
    }

    /// Main-axis start of each item's border box within the line.
    ///
    /// Auto margins take the free space first and switch justify-content
    /// off for the line; with no free space they resolve to 0. Reverse
    /// directions walk the items backwards.
    fn place_items(
        &self,
        items: &[FlexItem],
        available: f32,
        gap: f32,
        justify: JustifyContent,
    ) -> Vec<f32> {
        let count = items.len();
        let mut positions = vec![0.0; count];
        if count == 0 {
            return positions;
        }
        let used: f32 =
            items.iter().map(FlexItem::outer_target).sum::<f32>() + gap * (count - 1) as f32;
        let free = available - used;
        let auto_margins = items
            .iter()
            .flat_map(|item| item.margin_main)
            .filter(|margin| margin.is_auto())
            .count();

        let (auto_each, leading, between) = if auto_margins > 0 && free > 0.0 {
            (free / auto_margins as f32, 0.0, 0.0)
        } else {
            let (leading, between) = distribute(Spacing::from(justify), free, count);
            (0.0, leading, between)
        };

        let order: Box<dyn Iterator<Item = usize>> = if self.axes().reverse {
            Box::new((0..count).rev())
        } else {
            Box::new(0..count)
        };
        let mut cursor = leading;
        for index in order {
            let item = &items[index];
            cursor += item.margin_main[0].to_px_or(auto_each);
            positions[index] = cursor;
            cursor += item.target + item.margin_main[1].to_px_or(auto_each) + gap + between;
        }
        positions
    }

    /// Cross-axis offset of each line, resizing lines for `stretch`.
    ///
    /// A lone line fills a definite cross size. Several lines are
    /// distributed by align-content over whatever cross space remains.
    fn place_lines(
        &self,
        sizes: &mut [f32],
        container_cross: Option<f32>,
        gap: f32,
        align: AlignContent,
    ) -> Vec<f32> {
        let count = sizes.len();
        let mut offsets = vec![0.0; count];
        if count == 0 {
            return offsets;
        }
        if count == 1 {
            if let Some(cross) = container_cross {
                sizes[0] = cross;
            }
            return offsets;
        }

        let total: f32 = sizes.iter().sum::<f32>() + gap * (count - 1) as f32;
        let free = container_cross.map_or(0.0, |cross| cross - total);
        let (leading, between) = if align == AlignContent::Stretch && free > 0.0 {
            let add_each = free / count as f32;
            debug!("[ALIGN-CONTENT] stretch: remaining={free:.3} add_each={add_each:.3}");
            for size in sizes.iter_mut() {
                *size += add_each;
            }
            (0.0, 0.0)
        } else {
            distribute(Spacing::from(align), free, count)
        };
        debug!(
            "[ALIGN-CONTENT] lines={count} free={free:.3} leading={leading:.3} between={between:.3}"
        );

        let order: Box<dyn Iterator<Item = usize>> = if self.reverse_lines() {
            Box::new((0..count).rev())
        } else {
            Box::new(0..count)
        };
        let mut cursor = leading;
        for index in order {
            offsets[index] = cursor;
            cursor += sizes[index] + gap + between;
        }
        offsets
    }

    /// Cross-axis offset of an item's border box within its line.
    ///
    /// Stretches the item when it has no cross size of its own and no auto
    /// cross margin. Baseline alignment applies to horizontal lines only and
    /// behaves as `start` in columns.
    fn align_item(&self, item: &mut FlexItem, line_cross: f32, line_ascent: f32) -> f32 {
        let [start, end] = item.margin_cross;
        if start.is_auto() || end.is_auto() {
            let free = (line_cross - item.outer_cross()).max(0.0);
            return match (start.is_auto(), end.is_auto()) {
                (true, true) => free / 2.0,
                (true, false) => free,
                _ => start.to_px_or(0.0),
            };
        }

        let margin_start = start.to_px_or(0.0);
        let margin_end = end.to_px_or(0.0);
        match item.align {
            AlignItems::Stretch => {
                if item.definite_cross.is_none() {
                    item.cross = clamp(
                        line_cross - margin_start - margin_end,
                        item.min_cross,
                        item.max_cross,
                    );
                }
                margin_start
            }
            AlignItems::Start => margin_start,
            AlignItems::End => line_cross - item.cross - margin_end,
            AlignItems::Center => {
                margin_start + (line_cross - item.cross - margin_start - margin_end) / 2.0
            }
            AlignItems::Baseline if self.axes().is_row => {
                line_ascent - item.ascent + margin_start
            }
            AlignItems::Baseline => margin_start,
        }
    }
}

/// Single horizontal line.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RowStrategy {
    reverse: bool,
}

/// Single vertical line.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColumnStrategy {
    reverse: bool,
}

/// Greedy multi-line layout along either axis.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WrappedStrategy {
    axes: Axes,
    reverse_lines: bool,
}

impl AxisStrategy for RowStrategy {
    fn axes(&self) -> Axes {
        Axes {
            is_row: true,
            reverse: self.reverse,
        }
    }

    fn lines(
        &self,
        items: &[FlexItem],
        _main_size: Option<f32>,
        _gap: f32,
        _limits: &ResourceLimits,
    ) -> Result<Vec<Range<usize>>, LayoutError> {
        Ok(single_line(items))
    }
}

impl AxisStrategy for ColumnStrategy {
    fn axes(&self) -> Axes {
        Axes {
            is_row: false,
            reverse: self.reverse,
        }
    }

    fn lines(
        &self,
        items: &[FlexItem],
        _main_size: Option<f32>,
        _gap: f32,
        _limits: &ResourceLimits,
    ) -> Result<Vec<Range<usize>>, LayoutError> {
        Ok(single_line(items))
    }
}

impl AxisStrategy for WrappedStrategy {
    fn axes(&self) -> Axes {
        self.axes
    }

    fn lines(
        &self,
        items: &[FlexItem],
        main_size: Option<f32>,
        gap: f32,
        limits: &ResourceLimits,
    ) -> Result<Vec<Range<usize>>, LayoutError> {
        break_into_lines(items, main_size, gap, limits.max_flex_lines)
    }

    fn reverse_lines(&self) -> bool {
        self.reverse_lines
    }
}

/// Pick the strategy for a container's direction and wrap mode.
pub(crate) fn select(direction: FlexDirection, wrap: FlexWrap) -> Box<dyn AxisStrategy> {
    let reverse = direction.is_reverse();
    match wrap {
        FlexWrap::NoWrap if direction.is_row() => Box::new(RowStrategy { reverse }),
        FlexWrap::NoWrap => Box::new(ColumnStrategy { reverse }),
        FlexWrap::Wrap | FlexWrap::WrapReverse => Box::new(WrappedStrategy {
            axes: Axes {
                is_row: direction.is_row(),
                reverse,
            },
            reverse_lines: wrap == FlexWrap::WrapReverse,
        }),
    }
}
