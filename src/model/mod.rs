//! Model types for extracted images and page layout.
//!
//! This module defines the intermediate representation that bridges the
//! PDF loaders and the extraction pipeline: raw image payloads with their
//! loader-assigned names, and the per-page layout element tree used by the
//! layout-tree strategy.

mod image;
mod layout;

pub use image::{EmbeddedImage, ImageFormat};
pub use layout::{LayoutElement, LayoutPage, OtherKind};
