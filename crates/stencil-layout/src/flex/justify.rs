//! Distribution of free space along an axis.
//!
//! Shared by justify-content (items within a line) and align-content
//! (lines within a container).

use stencil_tree::{AlignContent, JustifyContent};

/// A distribution mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Spacing {
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl From<JustifyContent> for Spacing {
    fn from(justify: JustifyContent) -> Self {
        match justify {
            JustifyContent::Start => Self::Start,
            JustifyContent::Center => Self::Center,
            JustifyContent::End => Self::End,
            JustifyContent::SpaceBetween => Self::SpaceBetween,
            JustifyContent::SpaceAround => Self::SpaceAround,
            JustifyContent::SpaceEvenly => Self::SpaceEvenly,
        }
    }
}

impl From<AlignContent> for Spacing {
    /// `stretch` grows the lines instead; the leftover is packed at the start.
    fn from(align: AlignContent) -> Self {
        match align {
            AlignContent::Start | AlignContent::Stretch => Self::Start,
            AlignContent::Center => Self::Center,
            AlignContent::End => Self::End,
            AlignContent::SpaceBetween => Self::SpaceBetween,
            AlignContent::SpaceAround => Self::SpaceAround,
            AlignContent::SpaceEvenly => Self::SpaceEvenly,
        }
    }
}

/// Returns `(leading_offset, extra_space_between)` for `count` boxes.
///
/// Negative free space falls back to `Start` for every mode, so an
/// overflowing line always starts flush with the main-start edge.
pub(crate) fn distribute(spacing: Spacing, free_space: f32, count: usize) -> (f32, f32) {
    if count == 0 || free_space <= 0.0 {
        return (0.0, 0.0);
    }
    let n = count as f32;
    match spacing {
        Spacing::Start => (0.0, 0.0),
        Spacing::End => (free_space, 0.0),
        Spacing::Center => (free_space / 2.0, 0.0),
        // A single box is packed at the start.
        Spacing::SpaceBetween if count == 1 => (0.0, 0.0),
        Spacing::SpaceBetween => (0.0, free_space / (n - 1.0)),
        Spacing::SpaceAround => {
            let each = free_space / n;
            (each / 2.0, each)
        }
        Spacing::SpaceEvenly => {
            let each = free_space / (n + 1.0);
            (each, each)
        }
    }
}
