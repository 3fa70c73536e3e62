//! Per-element property parsing.
//!
//! Each element's dimension text is parsed exactly once, when the intrinsic
//! pass first visits it. Resolution against a reference size happens later
//! and may happen many times, once the parent's content box is known.

use stencil_common::warning::warn_once;
use stencil_tree::{Element, ElementKind};

use crate::border::Borders;
use crate::box_model::{EdgeSizes, MaybeSize, Size, clamp};
use crate::units::{Dimension, EdgeDimensions, split_tokens};
use crate::values::{AutoEdgeSizes, AutoOr};

/// Parsed box properties of one element.
#[derive(Debug, Clone)]
pub(crate) struct ParsedStyle {
    pub(crate) width: Dimension,
    pub(crate) height: Dimension,
    pub(crate) min_width: Dimension,
    pub(crate) max_width: Dimension,
    pub(crate) min_height: Dimension,
    pub(crate) max_height: Dimension,
    pub(crate) basis: Dimension,
    pub(crate) padding: EdgeDimensions,
    pub(crate) margin: EdgeDimensions,
    pub(crate) insets: EdgeDimensions,
    pub(crate) borders: Borders,
    pub(crate) row_gap: Dimension,
    pub(crate) column_gap: Dimension,
    /// Width over height, from the style or the natural size of an image.
    pub(crate) aspect_ratio: Option<f32>,
    pub(crate) font_size: f32,
}

impl ParsedStyle {
    /// Parse an element's properties; `font_size` is the inherited size.
    pub(crate) fn parse(element: &Element, inherited_font_size: f32) -> Self {
        let style = &element.style;
        let font_size = style
            .font_size
            .filter(|size| size.is_finite() && *size > 0.0)
            .unwrap_or(inherited_font_size);

        let (row_gap, column_gap) = match &element.kind {
            ElementKind::Container(container) => {
                let tokens: Vec<Dimension> = split_tokens(&container.gap)
                    .into_iter()
                    .take(2)
                    .map(Dimension::parse_lenient)
                    .collect();
                let (row, column) = match tokens.as_slice() {
                    [both] => (*both, *both),
                    [row, column] => (*row, *column),
                    _ => (Dimension::Auto, Dimension::Auto),
                };
                (
                    container
                        .row_gap
                        .as_deref()
                        .map_or(row, Dimension::parse_lenient),
                    container
                        .column_gap
                        .as_deref()
                        .map_or(column, Dimension::parse_lenient),
                )
            }
            _ => (Dimension::Auto, Dimension::Auto),
        };

        let natural_ratio = match &element.kind {
            ElementKind::Image(image) => match (image.natural_width, image.natural_height) {
                (Some(w), Some(h)) if h > 0.0 => Some(w / h),
                _ => None,
            },
            ElementKind::Code(code) => {
                let (w, h) = code.natural_size();
                (h > 0.0).then(|| w / h)
            }
            _ => None,
        };
        let aspect_ratio = match style.aspect_ratio {
            Some(ratio) if ratio.is_finite() && ratio > 0.0 => Some(ratio),
            Some(ratio) => {
                warn_once(
                    "style",
                    &format!("aspect ratio {ratio} is not positive, ignoring it"),
                );
                natural_ratio
            }
            None => natural_ratio,
        }
        .filter(|ratio| ratio.is_finite() && *ratio > 0.0);

        Self {
            width: Dimension::parse_lenient(&style.width),
            height: Dimension::parse_lenient(&style.height),
            min_width: Dimension::parse_lenient(&style.min_width),
            max_width: Dimension::parse_lenient(&style.max_width),
            min_height: Dimension::parse_lenient(&style.min_height),
            max_height: Dimension::parse_lenient(&style.max_height),
            basis: Dimension::parse_lenient(&style.basis),
            padding: EdgeDimensions::parse_shorthand(&style.padding),
            margin: EdgeDimensions::parse_shorthand(&style.margin),
            insets: EdgeDimensions {
                top: Dimension::parse_lenient(&style.top),
                right: Dimension::parse_lenient(&style.right),
                bottom: Dimension::parse_lenient(&style.bottom),
                left: Dimension::parse_lenient(&style.left),
            },
            borders: Borders::resolve(&style.border, font_size),
            row_gap,
            column_gap,
            aspect_ratio,
            font_size,
        }
    }

    /// Padding; percentages refer to the containing width. Never negative.
    pub(crate) fn padding(&self, reference_width: Option<f32>) -> EdgeSizes {
        let padding = self.padding.resolve(reference_width, self.font_size).or_zero();
        EdgeSizes {
            top: padding.top.max(0.0),
            right: padding.right.max(0.0),
            bottom: padding.bottom.max(0.0),
            left: padding.left.max(0.0),
        }
    }

    /// Padding plus border: the space between border box and content box.
    pub(crate) fn frame(&self, reference_width: Option<f32>) -> EdgeSizes {
        self.padding(reference_width) + self.borders.widths()
    }

    /// Margins, keeping `auto`; percentages refer to the containing width.
    pub(crate) fn margin(&self, reference_width: Option<f32>) -> AutoEdgeSizes {
        self.margin.resolve(reference_width, self.font_size)
    }

    /// Insets; left/right refer to the containing width, top/bottom to its
    /// height.
    pub(crate) fn insets(&self, reference: MaybeSize) -> AutoEdgeSizes {
        AutoEdgeSizes {
            top: self.insets.top.resolve(reference.height, self.font_size),
            right: self.insets.right.resolve(reference.width, self.font_size),
            bottom: self.insets.bottom.resolve(reference.height, self.font_size),
            left: self.insets.left.resolve(reference.width, self.font_size),
        }
    }

    /// Gaps as `(row_gap, column_gap)`: row gaps separate rows stacked
    /// vertically, column gaps separate columns side by side.
    pub(crate) fn gaps(&self, inner: MaybeSize) -> (f32, f32) {
        (
            self.row_gap
                .resolve(inner.height, self.font_size)
                .to_px_or(0.0)
                .max(0.0),
            self.column_gap
                .resolve(inner.width, self.font_size)
                .to_px_or(0.0)
                .max(0.0),
        )
    }

    /// Lower size bounds; never below the frame.
    pub(crate) fn min_size(&self, reference: MaybeSize) -> Size {
        let frame = self.frame(reference.width);
        Size::new(
            self.min_width
                .resolve(reference.width, self.font_size)
                .to_px_or(0.0)
                .max(frame.horizontal()),
            self.min_height
                .resolve(reference.height, self.font_size)
                .to_px_or(0.0)
                .max(frame.vertical()),
        )
    }

    /// Upper size bounds; `auto` is unbounded.
    pub(crate) fn max_size(&self, reference: MaybeSize) -> Size {
        Size::new(
            self.max_width
                .resolve(reference.width, self.font_size)
                .to_px_or(f32::INFINITY),
            self.max_height
                .resolve(reference.height, self.font_size)
                .to_px_or(f32::INFINITY),
        )
    }

    /// Clamp a width into the element's bounds.
    pub(crate) fn clamp_width(&self, width: f32, reference: MaybeSize) -> f32 {
        clamp(
            width,
            self.min_size(reference).width,
            self.max_size(reference).width,
        )
    }

    /// Clamp a height into the element's bounds.
    pub(crate) fn clamp_height(&self, height: f32, reference: MaybeSize) -> f32 {
        clamp(
            height,
            self.min_size(reference).height,
            self.max_size(reference).height,
        )
    }

    /// Explicit border-box size, clamped, with the aspect ratio filling in
    /// a missing axis.
    pub(crate) fn definite_size(&self, reference: MaybeSize) -> MaybeSize {
        let width = self
            .width
            .resolve(reference.width, self.font_size)
            .length()
            .map(|w| self.clamp_width(w, reference));
        let height = self
            .height
            .resolve(reference.height, self.font_size)
            .length()
            .map(|h| self.clamp_height(h, reference));
        self.apply_ratio(MaybeSize::new(width, height), reference)
    }

    /// Derive the missing axis from the aspect ratio when exactly one axis
    /// is known.
    pub(crate) fn apply_ratio(&self, size: MaybeSize, reference: MaybeSize) -> MaybeSize {
        let Some(ratio) = self.aspect_ratio else {
            return size;
        };
        match (size.width, size.height) {
            (Some(w), None) => {
                MaybeSize::new(Some(w), Some(self.clamp_height(w / ratio, reference)))
            }
            (None, Some(h)) => {
                MaybeSize::new(Some(self.clamp_width(h * ratio, reference)), Some(h))
            }
            _ => size,
        }
    }

    /// Flex basis, if definite.
    pub(crate) fn basis(&self, reference_main: Option<f32>) -> AutoOr {
        self.basis.resolve(reference_main, self.font_size)
    }
}

#[cfg(test)]
mod tests {
    use stencil_tree::DEFAULT_FONT_SIZE_PX;

    use super::*;

    #[test]
    fn font_size_inherits_when_unset() {
        let element = Element::text("x");
        let parsed = ParsedStyle::parse(&element, 20.0);
        assert!((parsed.font_size - 20.0).abs() < f32::EPSILON);

        let element = Element::text("x").with_style(|s| s.font_size = Some(-3.0));
        let parsed = ParsedStyle::parse(&element, DEFAULT_FONT_SIZE_PX);
        assert!((parsed.font_size - DEFAULT_FONT_SIZE_PX).abs() < f32::EPSILON);
    }

    #[test]
    fn gap_shorthand_and_overrides() {
        let element = Element::row(vec![]).with_container(|c| {
            c.gap = "4 8".into();
            c.row_gap = Some("6".into());
        });
        let parsed = ParsedStyle::parse(&element, 16.0);
        assert_eq!(parsed.gaps(MaybeSize::NONE), (6.0, 8.0));
    }

    #[test]
    fn image_ratio_fills_the_missing_axis() {
        let element = Element::image("a.png", Some(200.0), Some(100.0)).width("50");
        let parsed = ParsedStyle::parse(&element, 16.0);
        let size = parsed.definite_size(MaybeSize::NONE);
        assert_eq!(size, MaybeSize::new(Some(50.0), Some(25.0)));
    }

    #[test]
    fn percent_size_needs_a_reference() {
        let element = Element::text("x").width("50%");
        let parsed = ParsedStyle::parse(&element, 16.0);
        assert_eq!(parsed.definite_size(MaybeSize::NONE).width, None);
        assert_eq!(
            parsed
                .definite_size(MaybeSize::new(Some(300.0), None))
                .width,
            Some(150.0)
        );
    }

    #[test]
    fn min_size_covers_the_frame() {
        let element = Element::text("x").with_style(|s| s.padding = "5".into());
        let parsed = ParsedStyle::parse(&element, 16.0);
        assert_eq!(parsed.min_size(MaybeSize::NONE), Size::new(10.0, 10.0));
    }
}
