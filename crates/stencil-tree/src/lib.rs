//! Element tree model for Stencil templates.
//!
//! # Scope
//!
//! This crate defines the input of the layout engine:
//! - **Elements** - a tagged tree of containers, text, images, generated
//!   codes and dividers ([`Element`], [`ElementKind`])
//! - **Box properties** - sizing, spacing, borders and flex-item settings
//!   shared by every kind ([`BoxStyle`], [`BorderSpec`])
//! - **Keywords** - lenient, case-insensitive enums for every keyword-valued
//!   property ([`keywords`])
//!
//! Trees are usually produced by an upstream template parser; they can also
//! be built in code or deserialized from JSON with `serde`.

pub mod content;
pub mod element;
pub mod keywords;
pub mod style;

pub use content::{Container, Divider, GeneratedCode, Image, Text};
pub use element::{Element, ElementKind};
pub use keywords::{
    AlignContent, AlignItems, AlignSelf, CodeKind, DisplayMode, FlexDirection, FlexWrap,
    JustifyContent, Orientation, Position, TextDirection, TextOverflow,
};
pub use style::{BorderSpec, BoxStyle, DEFAULT_FONT_SIZE_PX};
