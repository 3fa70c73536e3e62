//! Display list: a flat sequence of drawing commands.
//!
//! Commands are stored back to front, so a backend can iterate and execute
//! each one in turn. Coordinates are absolute canvas pixels.

use serde::Serialize;
use stencil_tree::{CodeKind, Orientation};

use crate::border::Borders;
use crate::box_model::Rect;

/// A single drawing command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DisplayCommand {
    /// Fill a border box with a solid color.
    FillRect {
        /// Area to fill.
        rect: Rect,
        /// Fill color.
        color: String,
        /// Corner radius; 0 for sharp corners.
        radius: f32,
        /// Opacity multiplier, accumulated down the tree.
        opacity: f32,
    },

    /// Stroke the borders inside a border box.
    StrokeBorder {
        /// The border box.
        rect: Rect,
        /// Resolved sides and radius.
        borders: Borders,
        /// Opacity multiplier.
        opacity: f32,
    },

    /// Draw pre-wrapped text lines from the top of a content box.
    DrawText {
        /// The content box.
        rect: Rect,
        /// Lines, top to bottom.
        lines: Vec<String>,
        /// Font reference.
        font: String,
        /// Font size in pixels.
        font_size: f32,
        /// Distance between consecutive line tops.
        line_height: f32,
        /// Text color.
        color: String,
        /// Opacity multiplier.
        opacity: f32,
    },

    /// Draw an image scaled into a content box.
    ///
    /// The `src` string is the lookup key for the backend's image store.
    DrawImage {
        /// The content box.
        rect: Rect,
        /// Source reference.
        src: String,
        /// Opacity multiplier.
        opacity: f32,
    },

    /// Generate and draw a QR code or barcode into a content box.
    DrawCode {
        /// The content box.
        rect: Rect,
        /// Symbology.
        kind: CodeKind,
        /// Encoded payload.
        data: String,
        /// Opacity multiplier.
        opacity: f32,
    },

    /// Draw a rule filling a content box.
    DrawDivider {
        /// The content box.
        rect: Rect,
        /// Direction of the rule.
        orientation: Orientation,
        /// Rule color.
        color: String,
        /// Opacity multiplier.
        opacity: f32,
    },
}

/// A list of drawing commands in painting order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command to the display list.
    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }

    /// Get the commands in painting order.
    #[must_use]
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// Get the number of commands.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the display list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
