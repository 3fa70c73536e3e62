//! Painting and diagnostics.
//!
//! Painting is separate from layout: the painter walks a finished
//! [`LayoutTree`](crate::LayoutTree) and flattens it into a list of drawing
//! commands in absolute canvas coordinates, which any drawing backend can
//! execute front to back.
//!
//! ```text
//! Element tree → Layout → Paint → Draw
//!                           ↓
//!                      DisplayList
//! ```
//!
//! [`debug_overlay`] produces the bounds/hierarchy view used by template
//! authors to see where every box ended up.

mod display_list;
mod overlay;
mod painter;

pub use display_list::{DisplayCommand, DisplayList};
pub use overlay::{DebugOutline, debug_overlay};
pub use painter::Painter;
