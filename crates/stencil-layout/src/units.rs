//! Unit resolver: dimension text to pixels.
//!
//! Accepted forms, with ASCII-case-insensitive suffixes:
//!
//! | text      | meaning                          |
//! |-----------|----------------------------------|
//! | `120`     | pixels                           |
//! | `120px`   | pixels                           |
//! | `50%`     | percent of the reference size    |
//! | `1.5em`   | multiple of the element font size |
//! | `auto`    | auto (also the empty string)     |
//!
//! Anything else is malformed. Malformed input never fails: it resolves to
//! `auto` and is reported once through [`warn_once`].

use stencil_common::warning::warn_once;

use crate::values::{AutoEdgeSizes, AutoOr};

/// A parsed dimension, not yet resolved against a reference size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// `auto`, the empty string, or malformed input.
    #[default]
    Auto,
    /// Absolute pixels.
    Px(f32),
    /// Percent of the reference size.
    Percent(f32),
    /// Multiple of the element's font size.
    Em(f32),
}

impl Dimension {
    /// Parse dimension text. Returns `None` when the text is malformed.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            return Some(Self::Auto);
        }
        let lower = trimmed.to_ascii_lowercase();
        let (number, make): (&str, fn(f32) -> Self) = if let Some(n) = lower.strip_suffix("px") {
            (n, Self::Px)
        } else if let Some(n) = lower.strip_suffix('%') {
            (n, Self::Percent)
        } else if let Some(n) = lower.strip_suffix("em") {
            (n, Self::Em)
        } else {
            (lower.as_str(), Self::Px)
        };
        // "1.5 em" is not a dimension
        if number.ends_with(char::is_whitespace) {
            return None;
        }
        number
            .parse::<f32>()
            .ok()
            .filter(|value| value.is_finite())
            .map(make)
    }

    /// Parse dimension text, degrading malformed input to [`Dimension::Auto`].
    #[must_use]
    pub fn parse_lenient(text: &str) -> Self {
        Self::parse(text).unwrap_or_else(|| {
            warn_once(
                "units",
                &format!("unparsable dimension {:?}, using auto", text.trim()),
            );
            Self::Auto
        })
    }

    /// Resolve to pixels.
    ///
    /// Percentages need a `reference`; without one (an indefinite parent
    /// size) they resolve to `auto`.
    #[must_use]
    pub fn resolve(self, reference: Option<f32>, font_size: f32) -> AutoOr {
        match self {
            Self::Auto => AutoOr::Auto,
            Self::Px(px) => AutoOr::Length(px),
            Self::Em(em) => AutoOr::Length(em * font_size),
            Self::Percent(pct) => {
                reference.map_or(AutoOr::Auto, |r| AutoOr::Length(pct * r / 100.0))
            }
        }
    }
}

/// Resolve dimension text in one step.
///
/// # Example
/// ```
/// use stencil_layout::units::resolve;
/// use stencil_layout::AutoOr;
///
/// assert_eq!(resolve("50%", Some(300.0), 16.0), AutoOr::Length(150.0));
/// assert_eq!(resolve("1.5em", None, 16.0), AutoOr::Length(24.0));
/// assert_eq!(resolve("banana", Some(300.0), 16.0), AutoOr::Auto);
/// ```
#[must_use]
pub fn resolve(text: &str, reference: Option<f32>, font_size: f32) -> AutoOr {
    Dimension::parse_lenient(text).resolve(reference, font_size)
}

/// Four parsed dimensions from a 1–4 value shorthand, in CSS order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeDimensions {
    /// Top edge.
    pub top: Dimension,
    /// Right edge.
    pub right: Dimension,
    /// Bottom edge.
    pub bottom: Dimension,
    /// Left edge.
    pub left: Dimension,
}

impl EdgeDimensions {
    /// Expand a padding/margin shorthand.
    ///
    /// One value applies to all sides, two to vertical/horizontal, three to
    /// top/horizontal/bottom and four to top/right/bottom/left. An empty
    /// shorthand is zero on every side. Extra values are ignored and
    /// malformed components become `auto`; both are reported.
    #[must_use]
    pub fn parse_shorthand(text: &str) -> Self {
        let tokens = split_tokens(text);
        if tokens.len() > 4 {
            warn_once(
                "units",
                &format!("shorthand {:?} has more than 4 values, using the first 4", text.trim()),
            );
        }
        let values: Vec<Dimension> = tokens
            .iter()
            .take(4)
            .map(|token| Dimension::parse_lenient(token))
            .collect();
        expand_sides(&values).map_or(
            Self {
                top: Dimension::Px(0.0),
                right: Dimension::Px(0.0),
                bottom: Dimension::Px(0.0),
                left: Dimension::Px(0.0),
            },
            |[top, right, bottom, left]| Self {
                top,
                right,
                bottom,
                left,
            },
        )
    }

    /// Resolve every side against the same reference, keeping `auto`.
    #[must_use]
    pub fn resolve(&self, reference: Option<f32>, font_size: f32) -> AutoEdgeSizes {
        AutoEdgeSizes {
            top: self.top.resolve(reference, font_size),
            right: self.right.resolve(reference, font_size),
            bottom: self.bottom.resolve(reference, font_size),
            left: self.left.resolve(reference, font_size),
        }
    }
}

/// Apply the CSS 1–4 value expansion; returns `[top, right, bottom, left]`.
pub(crate) fn expand_sides<T: Clone>(values: &[T]) -> Option<[T; 4]> {
    match values {
        [all] => Some([all.clone(), all.clone(), all.clone(), all.clone()]),
        [vertical, horizontal] => Some([
            vertical.clone(),
            horizontal.clone(),
            vertical.clone(),
            horizontal.clone(),
        ]),
        [top, horizontal, bottom] => Some([
            top.clone(),
            horizontal.clone(),
            bottom.clone(),
            horizontal.clone(),
        ]),
        [top, right, bottom, left, ..] => {
            Some([top.clone(), right.clone(), bottom.clone(), left.clone()])
        }
        [] => None,
    }
}

/// Split on whitespace outside parentheses, so `rgb(0, 0, 0)` stays whole.
pub(crate) fn split_tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut depth = 0_usize;
    let mut start = None;
    for (i, ch) in text.char_indices() {
        if ch.is_whitespace() && depth == 0 {
            if let Some(s) = start.take() {
                tokens.push(&text[s..i]);
            }
            continue;
        }
        if start.is_none() {
            start = Some(i);
        }
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(&text[s..]);
    }
    tokens
}
