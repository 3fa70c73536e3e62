//! Border resolution.
//!
//! Borders cascade from least to most specific declaration:
//!
//! 1. `shorthand` (`"2px solid #333"`) sets every side;
//! 2. `width`, `style` and `color` (each a 1–4 value shorthand) override
//!    one component on each side;
//! 3. `top`, `right`, `bottom` and `left` override the components they
//!    mention on one side.
//!
//! Borders consume layout space exactly like padding.

use serde::Serialize;
use stencil_common::warning::warn_once;
use stencil_tree::BorderSpec;
use strum_macros::{Display, EnumString};

use crate::box_model::EdgeSizes;
use crate::units::{Dimension, expand_sides, split_tokens};

/// Width used when a style is declared without a width (CSS `medium`).
pub const MEDIUM_WIDTH_PX: f32 = 3.0;

/// Color used when none is declared.
pub const DEFAULT_COLOR: &str = "#000000";

/// How a border side is drawn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum LineStyle {
    /// No border; forces the width to 0.
    None,
    /// Like `none`.
    Hidden,
    /// A single solid line.
    #[default]
    Solid,
    /// A series of dashes.
    Dashed,
    /// A series of dots.
    Dotted,
    /// Two parallel lines.
    Double,
    /// Carved into the surface.
    Groove,
    /// Raised from the surface.
    Ridge,
    /// The box looks embedded.
    Inset,
    /// The box looks raised.
    Outset,
}

impl LineStyle {
    /// Whether the side takes space and is drawn.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::None | Self::Hidden)
    }
}

/// One fully resolved border side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BorderSide {
    /// Width in pixels.
    pub width: f32,
    /// Line style.
    pub style: LineStyle,
    /// Color, passed through to the drawing backend.
    pub color: String,
}

impl Default for BorderSide {
    fn default() -> Self {
        Self {
            width: 0.0,
            style: LineStyle::None,
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

/// All four resolved sides plus the corner radius.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Borders {
    /// Top side.
    pub top: BorderSide,
    /// Right side.
    pub right: BorderSide,
    /// Bottom side.
    pub bottom: BorderSide,
    /// Left side.
    pub left: BorderSide,
    /// Corner radius in pixels.
    pub radius: f32,
}

impl Borders {
    /// Run the border cascade for one element.
    #[must_use]
    pub fn resolve(spec: &BorderSpec, font_size: f32) -> Self {
        let radius = Dimension::parse_lenient(&spec.radius)
            .resolve(None, font_size)
            .to_px_or(0.0)
            .max(0.0);
        if spec.is_empty() {
            return Self {
                radius,
                ..Self::default()
            };
        }

        let mut sides: [PartialSide; 4] = Default::default();

        if let Some(shorthand) = &spec.shorthand {
            let all = PartialSide::parse(shorthand);
            for side in &mut sides {
                side.overlay(&all);
            }
        }

        if let Some(widths) = spec.width.as_deref().and_then(|text| {
            let values: Vec<Dimension> = split_tokens(text)
                .into_iter()
                .take(4)
                .map(|token| {
                    parse_width(token).unwrap_or_else(|| {
                        warn_once("border", &format!("unparsable border width {token:?}, using 0"));
                        Dimension::Px(0.0)
                    })
                })
                .collect();
            expand_sides(&values)
        }) {
            for (side, width) in sides.iter_mut().zip(widths) {
                side.width = Some(width);
            }
        }

        if let Some(styles) = spec.style.as_deref().and_then(|text| {
            let values: Vec<LineStyle> = split_tokens(text)
                .into_iter()
                .take(4)
                .map(|token| {
                    token.parse().unwrap_or_else(|_| {
                        warn_once(
                            "border",
                            &format!("unknown border style {token:?}, using solid"),
                        );
                        LineStyle::Solid
                    })
                })
                .collect();
            expand_sides(&values)
        }) {
            for (side, style) in sides.iter_mut().zip(styles) {
                side.style = Some(style);
            }
        }

        if let Some(colors) = spec.color.as_deref().and_then(|text| {
            let values: Vec<&str> = split_tokens(text).into_iter().take(4).collect();
            expand_sides(&values)
        }) {
            for (side, color) in sides.iter_mut().zip(colors) {
                side.color = Some(color.to_string());
            }
        }

        let per_side = [&spec.top, &spec.right, &spec.bottom, &spec.left];
        for (side, text) in sides.iter_mut().zip(per_side) {
            if let Some(text) = text {
                side.overlay(&PartialSide::parse(text));
            }
        }

        let [top, right, bottom, left] = sides.map(|side| side.finish(font_size));
        Self {
            top,
            right,
            bottom,
            left,
            radius,
        }
    }

    /// The space each side takes.
    #[must_use]
    pub fn widths(&self) -> EdgeSizes {
        EdgeSizes {
            top: self.top.width,
            right: self.right.width,
            bottom: self.bottom.width,
            left: self.left.width,
        }
    }

    /// Whether any side would be drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        [&self.top, &self.right, &self.bottom, &self.left]
            .iter()
            .any(|side| side.width > 0.0 && side.style.is_visible())
    }
}

/// The components one declaration mentions.
#[derive(Debug, Clone, Default)]
struct PartialSide {
    width: Option<Dimension>,
    style: Option<LineStyle>,
    color: Option<String>,
}

impl PartialSide {
    /// Classify each token as a width, a style keyword or a color.
    fn parse(text: &str) -> Self {
        let mut side = Self::default();
        for token in split_tokens(text) {
            if let Some(width) = parse_width(token) {
                side.width = Some(width);
            } else if let Ok(style) = token.parse::<LineStyle>() {
                side.style = Some(style);
            } else {
                side.color = Some(token.to_string());
            }
        }
        side
    }

    fn overlay(&mut self, other: &Self) {
        if other.width.is_some() {
            self.width = other.width;
        }
        if other.style.is_some() {
            self.style = other.style;
        }
        if let Some(color) = &other.color {
            self.color = Some(color.clone());
        }
    }

    fn finish(self, font_size: f32) -> BorderSide {
        let style = self.style.unwrap_or_default();
        let width = if style.is_visible() {
            match self.width {
                Some(width) => width.resolve(None, font_size).to_px_or(0.0).max(0.0),
                None if self.style.is_some() => MEDIUM_WIDTH_PX,
                None => 0.0,
            }
        } else {
            0.0
        };
        BorderSide {
            width,
            style,
            color: self.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        }
    }
}

/// A border width token: a non-auto dimension or `thin`/`medium`/`thick`.
fn parse_width(token: &str) -> Option<Dimension> {
    match token.to_ascii_lowercase().as_str() {
        "thin" => Some(Dimension::Px(1.0)),
        "medium" => Some(Dimension::Px(MEDIUM_WIDTH_PX)),
        "thick" => Some(Dimension::Px(5.0)),
        _ => Dimension::parse(token).filter(|dimension| *dimension != Dimension::Auto),
    }
}
