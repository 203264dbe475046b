//! PDF loaders for the two extraction strategies.
//!
//! Both loaders delegate object-model traversal, content-stream decoding,
//! and filter decompression to `lopdf`; this module only decides which
//! objects are images and how their payloads are labeled.

mod layout_tree;
mod object_model;

pub use layout_tree::LayoutDocument;
pub use object_model::{ObjectModelDocument, PageImages};

use std::path::Path;

use lopdf::{Dictionary, Document as LopdfDocument, Object, Stream};

use crate::detect::detect_format_from_path;
use crate::error::{Error, Result};
use crate::model::{EmbeddedImage, ImageFormat};

/// Load a document from a file path.
///
/// Validates the PDF header first, then hands the file to lopdf. Decryption
/// failures map to [`Error::Encrypted`].
pub(crate) fn load_document<P: AsRef<Path>>(path: P) -> Result<LopdfDocument> {
    let path = path.as_ref();

    detect_format_from_path(path)?;

    LopdfDocument::load(path).map_err(|e| match e {
        lopdf::Error::Decryption(_) => Error::Encrypted,
        _ => Error::from(e),
    })
}

/// Load a document from an in-memory byte slice.
pub(crate) fn load_document_bytes(data: &[u8]) -> Result<LopdfDocument> {
    crate::detect::detect_format_from_bytes(data)?;

    LopdfDocument::load_mem(data).map_err(|e| match e {
        lopdf::Error::Decryption(_) => Error::Encrypted,
        _ => Error::from(e),
    })
}

/// Resolve a dictionary-valued entry that may be inline or a reference.
pub(crate) fn resolve_dict<'a>(doc: &'a LopdfDocument, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj {
        Object::Reference(r) => doc.get_dictionary(*r).ok(),
        Object::Dictionary(d) => Some(d),
        _ => None,
    }
}

/// Build an [`EmbeddedImage`] from an image XObject stream.
///
/// The name is the bare XObject key; callers that want a format suffix
/// append it. Returns an error for non-image XObjects.
pub(crate) fn image_from_stream(stream: &Stream, key: &[u8]) -> Result<EmbeddedImage> {
    let dict = &stream.dict;

    match dict
        .get(b"Subtype")
        .ok()
        .and_then(|s| s.as_name().ok())
        .and_then(|n| std::str::from_utf8(n).ok())
    {
        Some("Image") => {}
        _ => return Err(Error::ImageExtract("Not an image XObject".to_string())),
    }

    let format = ImageFormat::from_filter(stream_filter(dict).unwrap_or_default());

    // DCTDecode and JPXDecode payloads are complete image files and pass
    // through untouched; anything else is decompressed to raw samples.
    let data = match format {
        ImageFormat::Jpeg | ImageFormat::Jpeg2000 => stream.content.clone(),
        _ => stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone()),
    };

    let mut image = EmbeddedImage::new(String::from_utf8_lossy(key).to_string(), data, format);

    let width = dict
        .get(b"Width")
        .ok()
        .and_then(|w| w.as_i64().ok())
        .map(|w| w as u32);
    let height = dict
        .get(b"Height")
        .ok()
        .and_then(|h| h.as_i64().ok())
        .map(|h| h as u32);
    if let (Some(w), Some(h)) = (width, height) {
        image = image.with_dimensions(w, h);
    }

    if let Some(bits) = dict
        .get(b"BitsPerComponent")
        .ok()
        .and_then(|b| b.as_i64().ok())
    {
        image = image.with_bits_per_component(bits as u8);
    }

    if let Ok(cs) = dict.get(b"ColorSpace") {
        let cs_name = match cs {
            Object::Name(n) => Some(String::from_utf8_lossy(n).to_string()),
            Object::Array(arr) => arr
                .first()
                .and_then(|o| o.as_name().ok())
                .and_then(|n| std::str::from_utf8(n).ok())
                .map(String::from),
            _ => None,
        };
        if let Some(cs_name) = cs_name {
            image = image.with_color_space(cs_name);
        }
    }

    Ok(image)
}

/// First filter name of a stream, handling both Name and Array forms.
fn stream_filter(dict: &Dictionary) -> Option<&str> {
    match dict.get(b"Filter").ok()? {
        Object::Name(n) => std::str::from_utf8(n).ok(),
        Object::Array(arr) => arr
            .first()
            .and_then(|o| o.as_name().ok())
            .and_then(|n| std::str::from_utf8(n).ok()),
        _ => None,
    }
}
