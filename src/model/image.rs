//! Embedded image payloads and raster format labeling.

use serde::Serialize;

/// A raster image recovered from a PDF page.
///
/// Ephemeral: constructed during page traversal and consumed by the writer.
/// The `name` is loader-assigned and is neither guaranteed unique nor
/// filesystem-safe.
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddedImage {
    /// Loader-assigned base name (XObject key, extension included or not
    /// depending on the extraction strategy).
    pub name: String,

    /// Raw image payload.
    #[serde(skip_serializing)]
    pub data: Vec<u8>,

    /// Raster format as labeled by the compression filter.
    pub format: ImageFormat,

    /// Width in pixels
    pub width: Option<u32>,

    /// Height in pixels
    pub height: Option<u32>,

    /// Bits per component (e.g., 8)
    pub bits_per_component: Option<u8>,

    /// Color space (e.g., "DeviceRGB", "DeviceGray")
    pub color_space: Option<String>,
}

impl EmbeddedImage {
    /// Create a new embedded image.
    pub fn new(name: impl Into<String>, data: Vec<u8>, format: ImageFormat) -> Self {
        Self {
            name: name.into(),
            data,
            format,
            width: None,
            height: None,
            bits_per_component: None,
            color_space: None,
        }
    }

    /// Set image dimensions.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set bits per component.
    pub fn with_bits_per_component(mut self, bits: u8) -> Self {
        self.bits_per_component = Some(bits);
        self
    }

    /// Set color space.
    pub fn with_color_space(mut self, color_space: impl Into<String>) -> Self {
        self.color_space = Some(color_space.into());
        self
    }

    /// Size of the payload in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Raster format of an embedded image.
///
/// PDF image XObjects do not carry a file format; the format is implied by
/// the stream's compression filter (DCTDecode data is a complete JPEG file,
/// JPXDecode a JPEG 2000 codestream). Everything else is decompressed raw
/// sample data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// JPEG (DCTDecode)
    Jpeg,
    /// JPEG 2000 (JPXDecode)
    Jpeg2000,
    /// PNG (recognized by magic bytes only; PDF has no PNG filter)
    Png,
    /// Decompressed raw samples, no container format
    Raw,
}

impl ImageFormat {
    /// Map a PDF stream filter name to a format.
    pub fn from_filter(filter: &str) -> Self {
        match filter {
            "DCTDecode" => ImageFormat::Jpeg,
            "JPXDecode" => ImageFormat::Jpeg2000,
            _ => ImageFormat::Raw,
        }
    }

    /// Detect a format from payload magic bytes.
    pub fn sniff(data: &[u8]) -> Self {
        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return ImageFormat::Jpeg;
        }

        // PNG: 89 50 4E 47 0D 0A 1A 0A
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return ImageFormat::Png;
        }

        // JPEG 2000: 00 00 00 0C 6A 50 20 20
        if data.starts_with(&[0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20]) {
            return ImageFormat::Jpeg2000;
        }

        ImageFormat::Raw
    }

    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Jpeg2000 => "jp2",
            ImageFormat::Png => "png",
            ImageFormat::Raw => "bin",
        }
    }

    /// MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Jpeg2000 => "image/jp2",
            ImageFormat::Png => "image/png",
            ImageFormat::Raw => "application/octet-stream",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Jpeg => write!(f, "jpeg"),
            ImageFormat::Jpeg2000 => write!(f, "jpeg2000"),
            ImageFormat::Png => write!(f, "png"),
            ImageFormat::Raw => write!(f, "raw"),
        }
    }
}
