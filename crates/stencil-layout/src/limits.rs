//! Resource limits supplied by the caller.

use serde::Deserialize;

use crate::error::LayoutError;

/// Circuit breakers that keep pathological templates from exhausting the
/// stack or memory.
///
/// Limits are read-only configuration: they are passed to the engine and
/// painter at construction and never change during a call.
///
/// # Example
/// ```
/// use stencil_layout::ResourceLimits;
///
/// let limits = ResourceLimits::from_json(r#"{ "maxNestingDepth": 8 }"#).unwrap();
/// assert_eq!(limits.max_nesting_depth, 8);
/// assert_eq!(limits.max_flex_lines, 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceLimits {
    /// Deepest element allowed; the root is at depth 0.
    pub max_nesting_depth: usize,
    /// Most flex lines a single container may produce.
    pub max_flex_lines: usize,
    /// Deepest node the painter will walk into.
    pub max_render_depth: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_nesting_depth: 64,
            max_flex_lines: 1024,
            max_render_depth: 128,
        }
    }
}

impl ResourceLimits {
    /// Read limits from a JSON object; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `json` is not a valid object of
    /// the expected shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Fail with [`LayoutError::NestingTooDeep`]
    /// when `depth` is past the nesting limit.
    pub(crate) const fn check_nesting(&self, depth: usize) -> Result<(), LayoutError> {
        if depth > self.max_nesting_depth {
            return Err(LayoutError::NestingTooDeep {
                depth,
                limit: self.max_nesting_depth,
            });
        }
        Ok(())
    }
}
