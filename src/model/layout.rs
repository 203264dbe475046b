//! Layout element tree for the layout-tree extraction strategy.
//!
//! Each page is rendered as an ordered sequence of top-level layout
//! elements built from its content stream. Image XObjects become image
//! leaves, Form XObjects become containers over their own inner elements,
//! and everything else (text, vector graphics) is opaque.

use serde::Serialize;

use super::image::EmbeddedImage;

/// A node in a page's layout tree.
#[derive(Debug, Clone)]
pub enum LayoutElement {
    /// An image leaf.
    Image(EmbeddedImage),
    /// A container over child elements (a Form XObject), in encounter order.
    Container(Vec<LayoutElement>),
    /// A non-image, non-container element.
    Other(OtherKind),
}

impl LayoutElement {
    /// True for image leaves.
    pub fn is_image(&self) -> bool {
        matches!(self, LayoutElement::Image(_))
    }

    /// True for containers.
    pub fn is_container(&self) -> bool {
        matches!(self, LayoutElement::Container(_))
    }
}

/// What a non-image, non-container element is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OtherKind {
    /// A text object (BT..ET)
    Text,
    /// Vector graphics or shading
    Graphics,
}

/// A page rendered as layout elements.
#[derive(Debug, Clone)]
pub struct LayoutPage {
    /// Page number (1-indexed, document order)
    pub number: u32,

    /// Top-level layout elements in encounter order
    pub elements: Vec<LayoutElement>,
}

impl LayoutPage {
    /// Create an empty layout page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            elements: Vec::new(),
        }
    }

    /// Check if the page has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
