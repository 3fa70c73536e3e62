//! Kind-specific element payloads.

use serde::Deserialize;

use crate::element::Element;
use crate::keywords::{
    AlignContent, AlignItems, CodeKind, FlexDirection, FlexWrap, JustifyContent, Orientation,
    TextDirection, TextOverflow,
};

/// A flex container and its exclusively owned children.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Container {
    /// Main axis and placement order.
    pub direction: FlexDirection,
    /// Single-line or multi-line.
    pub wrap: FlexWrap,
    /// Gap shorthand: `"row column"`, or one value for both.
    pub gap: String,
    /// Space between lines of a row container (between items of a column).
    pub row_gap: Option<String>,
    /// Space between items of a row container (between lines of a column).
    pub column_gap: Option<String>,
    /// Main-axis distribution.
    pub justify: JustifyContent,
    /// Default cross-axis alignment of the children.
    pub align_items: AlignItems,
    /// Cross-axis distribution of lines when wrapping.
    pub align_content: AlignContent,
    /// Horizontal mirroring of flow children.
    pub text_direction: TextDirection,
    /// Children in document order.
    pub children: Vec<Element>,
}

/// A run of text shaped by the injected measurement capability.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Text {
    /// The text to draw; `\n` forces a line break.
    pub content: String,
    /// Font reference understood by the drawing backend.
    pub font: String,
    /// Text color.
    pub color: String,
    /// Whether lines wrap at the resolved width.
    pub wrap: bool,
    /// Maximum number of lines kept.
    pub max_lines: Option<u32>,
    /// Treatment of lines beyond `max_lines`.
    pub overflow: TextOverflow,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            content: String::new(),
            font: String::from("default"),
            color: String::from("#000000"),
            wrap: true,
            max_lines: None,
            overflow: TextOverflow::Clip,
        }
    }
}

/// A raster or vector image decoded by the drawing backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Image {
    /// Source reference, used as a lookup key by the backend.
    pub src: String,
    /// Natural width, when known.
    pub natural_width: Option<f32>,
    /// Natural height, when known.
    pub natural_height: Option<f32>,
}

/// A QR code or barcode generated from `data`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratedCode {
    /// Symbology.
    pub kind: CodeKind,
    /// Payload encoded into the symbol.
    pub data: String,
    /// Natural width override.
    pub natural_width: Option<f32>,
    /// Natural height override.
    pub natural_height: Option<f32>,
}

impl GeneratedCode {
    /// Natural `(width, height)`, honoring the overrides.
    #[must_use]
    pub fn natural_size(&self) -> (f32, f32) {
        let (width, height) = self.kind.natural_size();
        (
            self.natural_width.unwrap_or(width),
            self.natural_height.unwrap_or(height),
        )
    }
}

/// A straight rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Divider {
    /// Direction of the rule.
    pub orientation: Orientation,
    /// Rule thickness (dimension text).
    pub thickness: String,
    /// Rule color.
    pub color: String,
}

impl Default for Divider {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            thickness: String::from("1"),
            color: String::from("#000000"),
        }
    }
}
