//! Fatal layout errors.
//!
//! Only resource-limit violations are errors. Malformed property values
//! never fail a layout; they degrade to their documented defaults and are
//! reported through [`stencil_common::warning::warn_once`].

use thiserror::Error;

/// A resource limit was exceeded. The call produced no output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The element tree is nested deeper than `max_nesting_depth`.
    #[error("element nesting depth {depth} exceeds the limit of {limit}")]
    NestingTooDeep {
        /// Depth of the first element past the limit.
        depth: usize,
        /// Configured maximum.
        limit: usize,
    },
    /// A container broke its items into more than `max_flex_lines` lines.
    #[error("container produced {lines} flex lines, more than the limit of {limit}")]
    TooManyFlexLines {
        /// Number of lines reached when the limit tripped.
        lines: usize,
        /// Configured maximum.
        limit: usize,
    },
    /// The painter walked deeper than `max_render_depth`.
    #[error("render depth {depth} exceeds the limit of {limit}")]
    RenderTooDeep {
        /// Depth of the first node past the limit.
        depth: usize,
        /// Configured maximum.
        limit: usize,
    },
}
