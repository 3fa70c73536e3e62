//! Resolved values that may still be `auto`.

use crate::box_model::EdgeSizes;

/// A value that is either `auto` or a length in pixels.
///
/// `auto` asks the layout algorithm to pick the value itself: from content
/// for sizes, from free space for margins.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AutoOr {
    /// The value is `auto` and must be resolved during layout.
    #[default]
    Auto,
    /// The value is a specific length in pixels.
    Length(f32),
}

impl AutoOr {
    /// Check if the value is `auto`.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Get the length value, or a default if `auto`.
    #[must_use]
    pub const fn to_px_or(&self, default: f32) -> f32 {
        match self {
            Self::Length(v) => *v,
            Self::Auto => default,
        }
    }

    /// The length, or `None` for `auto`.
    #[must_use]
    pub const fn length(&self) -> Option<f32> {
        match self {
            Self::Length(v) => Some(*v),
            Self::Auto => None,
        }
    }
}

/// Edge values where each side can be `auto` or a specific length.
/// Used for margins, where `auto` absorbs free space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AutoEdgeSizes {
    /// Top edge value.
    pub top: AutoOr,
    /// Right edge value.
    pub right: AutoOr,
    /// Bottom edge value.
    pub bottom: AutoOr,
    /// Left edge value.
    pub left: AutoOr,
}

impl AutoEdgeSizes {
    /// Replace every `auto` side with 0.
    #[must_use]
    pub const fn or_zero(&self) -> EdgeSizes {
        EdgeSizes {
            top: self.top.to_px_or(0.0),
            right: self.right.to_px_or(0.0),
            bottom: self.bottom.to_px_or(0.0),
            left: self.left.to_px_or(0.0),
        }
    }
}
