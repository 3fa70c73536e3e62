//! Common utilities for the Stencil renderer.
//!
//! This crate provides shared infrastructure used by all Stencil components:
//! - **Warning System** - deduplicated reports for template values that were
//!   degraded to a default instead of failing the render

pub mod warning;
