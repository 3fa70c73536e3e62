//! Geometry primitives shared by both layout passes.
//!
//! Every element is a border box surrounded by a margin and enclosing a
//! padding and content area:
//!
//! ```text
//! ┌──────────────────────────────────┐
//! │             margin               │
//! │   ┌──────────────────────────┐   │
//! │   │         border           │   │
//! │   │   ┌──────────────────┐   │   │
//! │   │   │     padding      │   │   │
//! │   │   │   ┌──────────┐   │   │   │
//! │   │   │   │ CONTENT  │   │   │   │
//! │   │   │   └──────────┘   │   │   │
//! │   │   └──────────────────┘   │   │
//! │   └──────────────────────────┘   │
//! └──────────────────────────────────┘
//! ```
//!
//! Explicit `width`/`height` describe the border box.

use serde::Serialize;

/// A rectangle positioned in 2D space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// A rectangle from its origin and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The size of the rectangle.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// The same rectangle moved by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Shrink the rectangle by `edges` on every side. Sizes never go
    /// negative.
    #[must_use]
    pub fn inset(&self, edges: EdgeSizes) -> Self {
        Self::new(
            self.x + edges.left,
            self.y + edges.top,
            (self.width - edges.horizontal()).max(0.0),
            (self.height - edges.vertical()).max(0.0),
        )
    }

    /// Round the edges to whole pixels.
    ///
    /// Edges are rounded rather than the size, so two rectangles that share
    /// an edge before snapping still share it afterwards:
    /// `x' = round(x)`, `w' = round(x + w) - round(x)`.
    #[must_use]
    pub fn snapped(&self) -> Self {
        let x = self.x.round();
        let y = self.y.round();
        Self::new(
            x,
            y,
            self.right().round() - x,
            self.bottom().round() - y,
        )
    }
}

/// A width and a height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// A size from its two extents.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Grow both extents by the sums of opposing `edges`.
    #[must_use]
    pub fn expand(&self, edges: EdgeSizes) -> Self {
        Self::new(self.width + edges.horizontal(), self.height + edges.vertical())
    }

    /// Shrink both extents by the sums of opposing `edges`, never below 0.
    #[must_use]
    pub fn shrink(&self, edges: EdgeSizes) -> Self {
        Self::new(
            (self.width - edges.horizontal()).max(0.0),
            (self.height - edges.vertical()).max(0.0),
        )
    }
}

/// A size whose extents may still be unknown (indefinite).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MaybeSize {
    /// Definite width, if known.
    pub width: Option<f32>,
    /// Definite height, if known.
    pub height: Option<f32>,
}

impl MaybeSize {
    /// Both extents unknown.
    pub const NONE: Self = Self {
        width: None,
        height: None,
    };

    /// A size from two optional extents.
    #[must_use]
    pub const fn new(width: Option<f32>, height: Option<f32>) -> Self {
        Self { width, height }
    }

    /// Both extents known.
    #[must_use]
    pub const fn definite(size: Size) -> Self {
        Self::new(Some(size.width), Some(size.height))
    }

    /// Shrink the known extents by the sums of opposing `edges`.
    #[must_use]
    pub fn shrink(&self, edges: EdgeSizes) -> Self {
        Self::new(
            self.width.map(|w| (w - edges.horizontal()).max(0.0)),
            self.height.map(|h| (h - edges.vertical()).max(0.0)),
        )
    }
}

/// Edge sizes for padding, border, or margin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EdgeSizes {
    /// Top edge size.
    pub top: f32,
    /// Right edge size.
    pub right: f32,
    /// Bottom edge size.
    pub bottom: f32,
    /// Left edge size.
    pub left: f32,
}

impl EdgeSizes {
    /// The same size on all four sides.
    #[must_use]
    pub const fn uniform(size: f32) -> Self {
        Self {
            top: size,
            right: size,
            bottom: size,
            left: size,
        }
    }

    /// `left + right`.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// `top + bottom`.
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl std::ops::Add for EdgeSizes {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            top: self.top + other.top,
            right: self.right + other.right,
            bottom: self.bottom + other.bottom,
            left: self.left + other.left,
        }
    }
}

/// Clamp `size` into `[min, max]`.
///
/// When the bounds conflict (`min > max`) the minimum wins, so the result
/// is always `min` in that case.
#[must_use]
pub fn clamp(size: f32, min: f32, max: f32) -> f32 {
    if min > max {
        return min;
    }
    size.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapping_keeps_shared_edges() {
        let first = Rect::new(0.0, 0.0, 33.333, 10.0).snapped();
        let second = Rect::new(33.333, 0.0, 33.333, 10.0).snapped();
        let third = Rect::new(66.666, 0.0, 33.334, 10.0).snapped();
        assert_eq!(first.right(), second.x);
        assert_eq!(second.right(), third.x);
        assert_eq!(third.right(), 100.0);
        assert_eq!(
            [first.width, second.width, third.width],
            [33.0, 34.0, 33.0]
        );
    }

    #[test]
    fn clamp_prefers_min_on_conflict() {
        assert_eq!(clamp(50.0, 80.0, 20.0), 80.0);
        assert_eq!(clamp(50.0, 0.0, 20.0), 20.0);
        assert_eq!(clamp(5.0, 10.0, f32::INFINITY), 10.0);
    }

    #[test]
    fn inset_never_goes_negative() {
        let rect = Rect::new(0.0, 0.0, 10.0, 4.0).inset(EdgeSizes::uniform(3.0));
        assert_eq!(rect, Rect::new(3.0, 3.0, 4.0, 0.0));
    }
}
