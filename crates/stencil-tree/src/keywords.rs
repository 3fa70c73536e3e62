//! Keyword-valued template properties.
//!
//! Every keyword parses ASCII-case-insensitively. Unknown keywords never
//! fail: they degrade to the enum's default (its base value) and the
//! degradation is reported once through
//! [`stencil_common::warning::warn_once`].

use serde::{Deserialize, Serialize};
use stencil_common::warning::warn_once;
use strum_macros::{Display, EnumString};

macro_rules! lenient_keyword {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $name {
                /// Parse a keyword, degrading unknown input to the default value.
                #[must_use]
                pub fn parse_lenient(text: &str) -> Self {
                    let trimmed = text.trim();
                    if trimmed.is_empty() {
                        return Self::default();
                    }
                    trimmed.parse().unwrap_or_else(|_| {
                        warn_once(
                            "keywords",
                            &format!(
                                "unknown {} keyword {trimmed:?}, using {}",
                                stringify!($name),
                                Self::default()
                            ),
                        );
                        Self::default()
                    })
                }
            }

            impl From<String> for $name {
                fn from(text: String) -> Self {
                    Self::parse_lenient(&text)
                }
            }
        )+
    };
}

/// How an element participates in its parent's layout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(from = "String", rename_all = "kebab-case")]
pub enum Position {
    /// Laid out by the parent's flex algorithm.
    #[default]
    Static,
    /// Laid out statically, then shifted by its insets.
    Relative,
    /// Removed from flow and placed against the parent's content box.
    Absolute,
}

/// Whether an element generates a box at all.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(from = "String", rename_all = "kebab-case")]
pub enum DisplayMode {
    /// The element is laid out normally.
    #[default]
    #[strum(to_string = "flex", serialize = "block")]
    Flex,
    /// The element and its subtree take no space and are not painted.
    None,
}

/// The main axis of a container and the order items are placed along it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(from = "String", rename_all = "kebab-case")]
pub enum FlexDirection {
    /// Horizontal main axis.
    #[default]
    Row,
    /// Horizontal main axis, items placed in reverse order.
    RowReverse,
    /// Vertical main axis.
    Column,
    /// Vertical main axis, items placed in reverse order.
    ColumnReverse,
}

impl FlexDirection {
    /// Whether the main axis is horizontal.
    #[must_use]
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    /// Whether items are placed in reverse order.
    #[must_use]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}

/// Whether a container breaks its items into several flex lines.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(from = "String", rename_all = "kebab-case")]
pub enum FlexWrap {
    /// A single line; overflow is ignored.
    #[default]
    #[strum(to_string = "nowrap", serialize = "no-wrap")]
    #[serde(rename = "nowrap")]
    NoWrap,
    /// Start a new line whenever the next item does not fit.
    Wrap,
    /// Like `Wrap`, with lines stacked in reverse order.
    WrapReverse,
}

/// Main-axis distribution of a line's free space.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(from = "String", rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Pack items against the main start.
    #[default]
    #[strum(to_string = "start", serialize = "flex-start")]
    Start,
    /// Center items in the line.
    Center,
    /// Pack items against the main end.
    #[strum(to_string = "end", serialize = "flex-end")]
    End,
    /// First and last item flush with the edges, equal space between.
    SpaceBetween,
    /// Equal space around every item (half-size at the edges).
    SpaceAround,
    /// Equal space between items and at both edges.
    SpaceEvenly,
}

/// Default cross-axis alignment for a container's items.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(from = "String", rename_all = "kebab-case")]
pub enum AlignItems {
    /// Fill the line's cross size when the item's cross dimension is unset.
    #[default]
    Stretch,
    /// Align to the cross start.
    #[strum(to_string = "start", serialize = "flex-start")]
    Start,
    /// Center on the cross axis.
    Center,
    /// Align to the cross end.
    #[strum(to_string = "end", serialize = "flex-end")]
    End,
    /// Align the items' first text baselines.
    Baseline,
}

/// Per-item override of the container's [`AlignItems`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(from = "String", rename_all = "kebab-case")]
pub enum AlignSelf {
    /// Use the container's `align_items`.
    #[default]
    Auto,
    /// Align to the cross start.
    #[strum(to_string = "start", serialize = "flex-start")]
    Start,
    /// Center on the cross axis.
    Center,
    /// Align to the cross end.
    #[strum(to_string = "end", serialize = "flex-end")]
    End,
    /// Fill the line's cross size.
    Stretch,
    /// Align the first text baseline.
    Baseline,
}

impl AlignSelf {
    /// Resolve `auto` against the container's alignment.
    #[must_use]
    pub const fn resolve(self, parent: AlignItems) -> AlignItems {
        match self {
            Self::Auto => parent,
            Self::Start => AlignItems::Start,
            Self::Center => AlignItems::Center,
            Self::End => AlignItems::End,
            Self::Stretch => AlignItems::Stretch,
            Self::Baseline => AlignItems::Baseline,
        }
    }
}

/// Cross-axis distribution of the lines of a wrapped container.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(from = "String", rename_all = "kebab-case")]
pub enum AlignContent {
    /// Pack lines against the cross start.
    #[default]
    #[strum(to_string = "start", serialize = "flex-start")]
    Start,
    /// Center the lines.
    Center,
    /// Pack lines against the cross end.
    #[strum(to_string = "end", serialize = "flex-end")]
    End,
    /// First and last line flush with the edges.
    SpaceBetween,
    /// Equal space around every line.
    SpaceAround,
    /// Equal space between lines and at both edges.
    SpaceEvenly,
    /// Share the extra cross space equally among the lines.
    Stretch,
}

/// Inline direction of a container; `rtl` mirrors flow children horizontally.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(from = "String", rename_all = "kebab-case")]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// What happens to text beyond `max_lines`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(from = "String", rename_all = "kebab-case")]
pub enum TextOverflow {
    /// Extra lines are dropped.
    #[default]
    Clip,
    /// Extra lines are dropped and the last kept line ends in an ellipsis.
    Ellipsis,
}

/// The symbology of a generated code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(from = "String", rename_all = "kebab-case")]
pub enum CodeKind {
    /// A square two-dimensional code.
    #[default]
    #[strum(to_string = "qr", serialize = "qrcode")]
    Qr,
    /// A linear barcode.
    Barcode,
}

impl CodeKind {
    /// Natural `(width, height)` used when the element gives none.
    #[must_use]
    pub const fn natural_size(self) -> (f32, f32) {
        match self {
            Self::Qr => (100.0, 100.0),
            Self::Barcode => (200.0, 80.0),
        }
    }
}

/// The direction a divider runs in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(from = "String", rename_all = "kebab-case")]
pub enum Orientation {
    /// A horizontal rule.
    #[default]
    Horizontal,
    /// A vertical rule.
    Vertical,
}

lenient_keyword!(
    Position,
    DisplayMode,
    FlexDirection,
    FlexWrap,
    JustifyContent,
    AlignItems,
    AlignSelf,
    AlignContent,
    TextDirection,
    TextOverflow,
    CodeKind,
    Orientation,
);
