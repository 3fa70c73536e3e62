//! Two-pass flexbox layout engine for Stencil templates.
//!
//! # Scope
//!
//! This crate turns an [`Element`](stencil_tree::Element) tree into a tree
//! of positioned boxes:
//! - **Unit resolution** - `px`, `%`, `em` and `auto` dimension text to
//!   pixels ([`units`])
//! - **Intrinsic measurement** - a bottom-up pass computing every node's
//!   max-content size
//! - **Flex layout** - line breaking, the grow/shrink freeze loop,
//!   justify-content, align-items/align-self and align-content, selected per
//!   container by direction and wrap mode
//! - **Positioning** - `relative` offsets and `absolute` placement against
//!   the parent's content box
//! - **Painting** - a flat display list in canvas coordinates, plus a debug
//!   overlay ([`paint`])
//!
//! Text is measured through the injected [`TextMeasure`] capability; the
//! engine does no I/O and holds no state between calls.
//!
//! # Not Yet Implemented
//!
//! - `rem`, `vw`/`vh` and `calc()` units
//! - Grid and inline formatting contexts
//! - Incremental relayout

/// Border cascade and resolved sides.
pub mod border;
/// Rectangles, sizes and edge sizes.
pub mod box_model;
/// The layout engine facade.
pub mod engine;
/// Layout errors.
pub mod error;
mod flex;
mod intrinsic;
/// Resource limits applied to every call.
pub mod limits;
/// Display list and painting.
pub mod paint;
mod position;
mod strategy;
mod style;
/// Text measurement capability.
pub mod text;
/// The positioned output tree.
pub mod tree;
/// Dimension parsing and resolution.
pub mod units;
/// Values that may be `auto`.
pub mod values;

pub use border::{BorderSide, Borders, LineStyle};
pub use box_model::{EdgeSizes, MaybeSize, Rect, Size, clamp};
pub use engine::LayoutEngine;
pub use error::LayoutError;
pub use limits::ResourceLimits;
pub use paint::{DebugOutline, DisplayCommand, DisplayList, Painter, debug_overlay};
pub use text::{ApproximateTextMeasure, ShapeRequest, ShapedText, TextMeasure};
pub use tree::{LayoutNode, LayoutTree, NodeId, TextLayout};
pub use units::{Dimension, EdgeDimensions};
pub use values::{AutoEdgeSizes, AutoOr};
