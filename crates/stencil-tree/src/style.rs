//! Box properties shared by every element kind.
//!
//! Dimension-valued properties are kept as the text the template author
//! wrote (`"120"`, `"50%"`, `"1.5em"`, `"auto"`, or a 1–4 value shorthand).
//! They are resolved to pixels during layout, once a reference size and a
//! font size are known. An empty string means `auto`.

use serde::Deserialize;

use crate::keywords::{AlignSelf, DisplayMode, Position};

/// Default `font-size` of the root element, in pixels.
pub const DEFAULT_FONT_SIZE_PX: f32 = 16.0;

/// Sizing, spacing, decoration and flex-item properties of an element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoxStyle {
    /// Border-box width.
    pub width: String,
    /// Border-box height.
    pub height: String,
    /// Lower bound on the width.
    pub min_width: String,
    /// Upper bound on the width.
    pub max_width: String,
    /// Lower bound on the height.
    pub min_height: String,
    /// Upper bound on the height.
    pub max_height: String,
    /// Padding shorthand (1–4 values).
    pub padding: String,
    /// Margin shorthand (1–4 values, `auto` allowed).
    pub margin: String,
    /// Border declarations.
    pub border: BorderSpec,
    /// Background color, passed through to the drawing backend.
    pub background: Option<String>,
    /// Opacity multiplier in `[0, 1]`.
    pub opacity: f32,
    /// Positioning scheme.
    pub position: Position,
    /// Top inset.
    pub top: String,
    /// Right inset.
    pub right: String,
    /// Bottom inset.
    pub bottom: String,
    /// Left inset.
    pub left: String,
    /// Flex grow factor.
    pub grow: f32,
    /// Flex shrink factor.
    pub shrink: f32,
    /// Flex basis (`auto` uses the main-axis size, then the content size).
    pub basis: String,
    /// Cross-axis alignment override.
    pub align_self: AlignSelf,
    /// Placement order among siblings; ties keep document order.
    pub order: i32,
    /// Whether the element is laid out at all.
    pub display: DisplayMode,
    /// Width divided by height, applied when only one dimension is known.
    pub aspect_ratio: Option<f32>,
    /// Font size in pixels, inherited by descendants when unset.
    pub font_size: Option<f32>,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            width: String::new(),
            height: String::new(),
            min_width: String::new(),
            max_width: String::new(),
            min_height: String::new(),
            max_height: String::new(),
            padding: String::new(),
            margin: String::new(),
            border: BorderSpec::default(),
            background: None,
            opacity: 1.0,
            position: Position::Static,
            top: String::new(),
            right: String::new(),
            bottom: String::new(),
            left: String::new(),
            grow: 0.0,
            shrink: 1.0,
            basis: String::new(),
            align_self: AlignSelf::Auto,
            order: 0,
            display: DisplayMode::Flex,
            aspect_ratio: None,
            font_size: None,
        }
    }
}

/// Border declarations, from least to most specific.
///
/// The cascade is `shorthand` → per-property (`width`, `style`, `color`)
/// → per-side (`top`, `right`, `bottom`, `left`); the most specific
/// declaration present wins for each side and component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BorderSpec {
    /// All four sides at once, e.g. `"2px solid #333"`.
    pub shorthand: Option<String>,
    /// Width shorthand (1–4 values).
    pub width: Option<String>,
    /// Style shorthand (1–4 keywords).
    pub style: Option<String>,
    /// Color shorthand (1–4 colors).
    pub color: Option<String>,
    /// Top side, same syntax as `shorthand`.
    pub top: Option<String>,
    /// Right side, same syntax as `shorthand`.
    pub right: Option<String>,
    /// Bottom side, same syntax as `shorthand`.
    pub bottom: Option<String>,
    /// Left side, same syntax as `shorthand`.
    pub left: Option<String>,
    /// Corner radius.
    pub radius: String,
}

impl BorderSpec {
    /// Whether no border property is declared at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shorthand.is_none()
            && self.width.is_none()
            && self.style.is_none()
            && self.color.is_none()
            && self.top.is_none()
            && self.right.is_none()
            && self.bottom.is_none()
            && self.left.is_none()
    }
}
