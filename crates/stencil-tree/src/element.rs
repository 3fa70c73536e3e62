//! The element tree handed to the layout engine.
//!
//! The tree is fully resolved: loops, conditionals and interpolations have
//! been expanded upstream. Each container owns its children outright, so
//! the tree is acyclic by construction.

use serde::Deserialize;

use crate::content::{Container, Divider, GeneratedCode, Image, Text};
use crate::keywords::{CodeKind, DisplayMode, FlexDirection, Orientation, Position};
use crate::style::BoxStyle;

/// One node of a template.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Element {
    /// Box properties common to every kind.
    #[serde(default)]
    pub style: BoxStyle,
    /// Kind-specific payload.
    #[serde(flatten)]
    pub kind: ElementKind,
}

/// The element kinds a template can contain.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ElementKind {
    /// A flex container.
    Container(Container),
    /// Shaped text.
    Text(Text),
    /// An image.
    Image(Image),
    /// A generated QR code or barcode.
    Code(GeneratedCode),
    /// A horizontal or vertical rule.
    Divider(Divider),
}

impl Element {
    /// Wrap a payload with default box properties.
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        Self {
            style: BoxStyle::default(),
            kind,
        }
    }

    /// A row container holding `children`.
    #[must_use]
    pub fn row(children: Vec<Self>) -> Self {
        Self::new(ElementKind::Container(Container {
            direction: FlexDirection::Row,
            children,
            ..Container::default()
        }))
    }

    /// A column container holding `children`.
    #[must_use]
    pub fn column(children: Vec<Self>) -> Self {
        Self::new(ElementKind::Container(Container {
            direction: FlexDirection::Column,
            children,
            ..Container::default()
        }))
    }

    /// A text element with default font settings.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(ElementKind::Text(Text {
            content: content.into(),
            ..Text::default()
        }))
    }

    /// An image with optional natural dimensions.
    #[must_use]
    pub fn image(
        src: impl Into<String>,
        natural_width: Option<f32>,
        natural_height: Option<f32>,
    ) -> Self {
        Self::new(ElementKind::Image(Image {
            src: src.into(),
            natural_width,
            natural_height,
        }))
    }

    /// A generated code of the given kind.
    #[must_use]
    pub fn code(kind: CodeKind, data: impl Into<String>) -> Self {
        Self::new(ElementKind::Code(GeneratedCode {
            kind,
            data: data.into(),
            ..GeneratedCode::default()
        }))
    }

    /// A one-pixel divider.
    #[must_use]
    pub fn divider(orientation: Orientation) -> Self {
        Self::new(ElementKind::Divider(Divider {
            orientation,
            ..Divider::default()
        }))
    }

    /// Adjust the box properties in place.
    #[must_use]
    pub fn with_style(mut self, configure: impl FnOnce(&mut BoxStyle)) -> Self {
        configure(&mut self.style);
        self
    }

    /// Adjust the container properties in place; no-op for other kinds.
    #[must_use]
    pub fn with_container(mut self, configure: impl FnOnce(&mut Container)) -> Self {
        if let ElementKind::Container(container) = &mut self.kind {
            configure(container);
        }
        self
    }

    /// Set the border-box width.
    #[must_use]
    pub fn width(self, width: &str) -> Self {
        self.with_style(|style| style.width = width.to_string())
    }

    /// Set the border-box height.
    #[must_use]
    pub fn height(self, height: &str) -> Self {
        self.with_style(|style| style.height = height.to_string())
    }

    /// Set both border-box dimensions.
    #[must_use]
    pub fn size(self, width: &str, height: &str) -> Self {
        self.width(width).height(height)
    }

    /// Set the flex grow factor.
    #[must_use]
    pub fn grow(self, grow: f32) -> Self {
        self.with_style(|style| style.grow = grow)
    }

    /// Set the flex shrink factor.
    #[must_use]
    pub fn shrink(self, shrink: f32) -> Self {
        self.with_style(|style| style.shrink = shrink)
    }

    /// Set the flex basis.
    #[must_use]
    pub fn basis(self, basis: &str) -> Self {
        self.with_style(|style| style.basis = basis.to_string())
    }

    /// Set the placement order.
    #[must_use]
    pub fn order(self, order: i32) -> Self {
        self.with_style(|style| style.order = order)
    }

    /// Set the positioning scheme.
    #[must_use]
    pub fn position(self, position: Position) -> Self {
        self.with_style(|style| style.position = position)
    }

    /// Short label of the element kind, for diagnostics.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self.kind {
            ElementKind::Container(_) => "container",
            ElementKind::Text(_) => "text",
            ElementKind::Image(_) => "image",
            ElementKind::Code(_) => "code",
            ElementKind::Divider(_) => "divider",
        }
    }

    /// The container payload, if this is a container.
    #[must_use]
    pub const fn as_container(&self) -> Option<&Container> {
        match &self.kind {
            ElementKind::Container(container) => Some(container),
            _ => None,
        }
    }

    /// Children in document order; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match &self.kind {
            ElementKind::Container(container) => &container.children,
            _ => &[],
        }
    }

    /// Whether the element is taken out of flow.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.style.position == Position::Absolute
    }

    /// Whether the element is `display: none`.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.style.display == DisplayMode::None
    }

    /// Whether the element takes part in its parent's flex lines.
    #[must_use]
    pub fn is_in_flow(&self) -> bool {
        !self.is_absolute() && !self.is_hidden()
    }
}
