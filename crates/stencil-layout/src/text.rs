//! The injected text-measurement capability.
//!
//! The engine never shapes text itself. It asks a [`TextMeasure`] how a run
//! of text breaks into lines at a given width and how much space the lines
//! take. Drawing backends supply an implementation backed by real font
//! data; [`ApproximateTextMeasure`] serves headless callers and tests.

use stencil_tree::TextOverflow;

/// Character appended to the last kept line under `overflow: ellipsis`.
pub const ELLIPSIS: char = '…';

/// One shaping query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeRequest<'a> {
    /// Font reference understood by the backend.
    pub font: &'a str,
    /// Font size in pixels.
    pub font_size: f32,
    /// Width available to the lines; `None` measures on one unbounded line
    /// per hard break.
    pub max_width: Option<f32>,
    /// The text; `\n` forces a break.
    pub content: &'a str,
    /// Whether soft wrapping at `max_width` is allowed.
    pub wrap: bool,
    /// Maximum number of lines kept.
    pub max_lines: Option<u32>,
    /// Treatment of the lines beyond `max_lines`.
    pub overflow: TextOverflow,
}

/// The result of shaping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapedText {
    /// The lines, in order.
    pub lines: Vec<String>,
    /// Width of the widest line.
    pub width: f32,
    /// Total height of all lines.
    pub height: f32,
    /// Height of one line.
    pub line_height: f32,
}

/// Text shaping used during measurement and layout.
///
/// Called once per text element with an unbounded width during intrinsic
/// measurement and again with the resolved width during layout. The engine
/// is `Sync` exactly when the implementation is.
pub trait TextMeasure {
    /// Break `request.content` into lines and measure them.
    fn shape(&self, request: &ShapeRequest<'_>) -> ShapedText;
}

/// Approximate shaping: fixed advance per character.
///
/// Each character advances `0.6 × font_size` and each line is
/// `1.2 × font_size` tall. Lines break greedily between words.
#[derive(Debug, Clone, Copy)]
pub struct ApproximateTextMeasure {
    /// Advance per character, as a fraction of the font size.
    pub char_width_ratio: f32,
    /// Line height, as a fraction of the font size.
    pub line_height_ratio: f32,
}

impl Default for ApproximateTextMeasure {
    fn default() -> Self {
        Self {
            char_width_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

impl ApproximateTextMeasure {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.char_width_ratio
    }

    /// Greedy word wrap of one hard-broken paragraph.
    fn wrap_paragraph(&self, paragraph: &str, max_width: f32, font_size: f32) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if self.text_width(&candidate, font_size) <= max_width + f32::EPSILON {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            }
        }
        lines.push(current);
        lines
    }

    /// Shorten `line` until it fits `max_width` with a trailing ellipsis.
    fn ellipsize(&self, line: &str, max_width: Option<f32>, font_size: f32) -> String {
        let mut kept: Vec<char> = line.trim_end().chars().collect();
        loop {
            let candidate: String = kept.iter().chain(std::iter::once(&ELLIPSIS)).collect();
            let fits = max_width.is_none_or(|max| self.text_width(&candidate, font_size) <= max);
            if fits || kept.is_empty() {
                return candidate;
            }
            let _ = kept.pop();
            while kept.last().is_some_and(|c| c.is_whitespace()) {
                let _ = kept.pop();
            }
        }
    }
}

impl TextMeasure for ApproximateTextMeasure {
    fn shape(&self, request: &ShapeRequest<'_>) -> ShapedText {
        let font_size = request.font_size;
        let line_height = font_size * self.line_height_ratio;
        if request.content.is_empty() {
            return ShapedText {
                line_height,
                ..ShapedText::default()
            };
        }

        let mut lines: Vec<String> = Vec::new();
        for paragraph in request.content.split('\n') {
            match request.max_width {
                Some(max_width) if request.wrap => {
                    lines.extend(self.wrap_paragraph(paragraph, max_width, font_size));
                }
                _ => lines.push(paragraph.trim_end().to_string()),
            }
        }

        if let Some(max_lines) = request.max_lines {
            let max_lines = max_lines as usize;
            if lines.len() > max_lines {
                lines.truncate(max_lines);
                if request.overflow == TextOverflow::Ellipsis {
                    if let Some(last) = lines.last_mut() {
                        *last = self.ellipsize(last, request.max_width, font_size);
                    }
                }
            }
        }

        let width = lines
            .iter()
            .map(|line| self.text_width(line, font_size))
            .fold(0.0_f32, f32::max);
        ShapedText {
            height: lines.len() as f32 * line_height,
            lines,
            width,
            line_height,
        }
    }
}
